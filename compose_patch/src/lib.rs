//! Patch and transform resolution for composed resources.
//!
//! A [`CompositionSpec`] describes how one structured document (the
//! *composite*) is used to assemble others (the *composed* resources). Each
//! composed template carries an ordered list of [`Patch`]es that copy values
//! between the two documents by field path, optionally passing them through a
//! chain of [`Transform`]s, or inject typed constants.
//!
//! The engine is synchronous and stateless: every call operates on
//! caller-owned documents and reports failures immediately through
//! [`ComposeError`].
//!
//! # Example
//!
//! ```rust
//! use compose_patch::{FieldPathPatch, Patch};
//! use serde_json::json;
//!
//! let mut composite = json!({"spec": {"region": "eu-west-1"}});
//! let mut composed = json!({});
//!
//! let patch = Patch::FromCompositeFieldPath(
//!     FieldPathPatch::new("spec.region").with_to_field_path("spec.forProvider.region"),
//! );
//! patch.apply(&mut composite, &mut composed, &[])?;
//!
//! assert_eq!(composed, json!({"spec": {"forProvider": {"region": "eu-west-1"}}}));
//! # Ok::<_, compose_patch::ComposeError>(())
//! ```

pub mod composition;
pub mod constant;
mod csv_env;
mod error;
pub mod fieldpath;
pub mod file;
pub mod patch;
pub mod settings;
pub mod transform;
mod value;

pub use composition::{ComposedTemplate, CompositionSpec, PatchSet};
pub use constant::{Constant, ConstantError, ConstantType, ConstantValue};
pub use csv_env::CsvEnv;
pub use error::{ComposeError, ErrorCategory};
pub use fieldpath::{FieldPathAccess, FieldPathError};
pub use file::load_composition;
pub use patch::{
    ConstantPatch, FieldPathPatch, FromFieldPathPolicy, Patch, PatchPolicy, PatchSetReference,
    PatchType, is_optional_field_path_not_found,
};
pub use settings::ResolveSettings;
pub use transform::{
    ConvertTransform, MapTransform, MathTransform, Resolve, StringTransform, Transform,
    TransformError, TransformType, apply_transforms,
};
pub use value::ValueKind;

/// Re-export of `serde_json` so callers and tests build documents with the
/// same version the engine uses.
pub use serde_json;

/// Result type returned by the patch engine.
pub type ComposeResult<T> = Result<T, ComposeError>;
