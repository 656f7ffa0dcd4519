//! Patches and their resolution.
//!
//! A [`Patch`] moves a single value between the composite and a composed
//! document, or writes a constant into the composed document. Patches are
//! written in documents as a flat object with a `type` discriminator:
//!
//! ```yaml
//! - type: FromCompositeFieldPath
//!   fromFieldPath: spec.parameters.size
//!   toFieldPath: spec.forProvider.storageGB
//!   policy:
//!     fromFieldPath: Required
//!   transforms:
//!     - type: math
//!       math:
//!         multiply: 10
//! ```
//!
//! and are held in memory as an enum with one variant per type.

mod apply;
mod policy;
mod types;
mod wire;

pub use policy::{FromFieldPathPolicy, PatchPolicy, is_optional_field_path_not_found};
pub use types::{ConstantPatch, FieldPathPatch, Patch, PatchSetReference, PatchType};
