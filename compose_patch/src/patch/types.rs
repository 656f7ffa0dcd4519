//! Patch data model.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ComposeError;
use crate::constant::ConstantValue;
use crate::transform::Transform;

use super::policy::{FromFieldPathPolicy, PatchPolicy};
use super::wire::PatchDocument;

/// The closed set of patch kinds.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum PatchType {
    /// Copy a value from the composite into the composed document.
    FromCompositeFieldPath,
    /// Copy a value from the composed document back into the composite.
    ToCompositeFieldPath,
    /// Reference to a named patch set, replaced by inlining.
    PatchSet,
    /// Write a literal into the composed document.
    FromConstantValue,
}

impl PatchType {
    /// Patch types applied when rendering a composed document from the
    /// composite.
    ///
    /// `PatchSet` is included so a template that skipped inlining fails
    /// loudly instead of silently losing its referenced patches.
    pub const FROM_COMPOSITE: &'static [Self] = &[
        Self::FromCompositeFieldPath,
        Self::PatchSet,
        Self::FromConstantValue,
    ];

    /// Patch types applied when propagating observed values back to the
    /// composite.
    pub const TO_COMPOSITE: &'static [Self] = &[Self::ToCompositeFieldPath];

    /// Returns the wire name of the patch type.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FromCompositeFieldPath => "FromCompositeFieldPath",
            Self::ToCompositeFieldPath => "ToCompositeFieldPath",
            Self::PatchSet => "PatchSet",
            Self::FromConstantValue => "FromConstantValue",
        }
    }
}

impl fmt::Display for PatchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PatchType {
    type Err = ComposeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "FromCompositeFieldPath" => Ok(Self::FromCompositeFieldPath),
            "ToCompositeFieldPath" => Ok(Self::ToCompositeFieldPath),
            "PatchSet" => Ok(Self::PatchSet),
            "FromConstantValue" => Ok(Self::FromConstantValue),
            other => Err(ComposeError::invalid_patch_type(other)),
        }
    }
}

/// A single patch.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "PatchDocument", into = "PatchDocument")]
pub enum Patch {
    /// Copy from the composite to the composed document.
    FromCompositeFieldPath(FieldPathPatch),
    /// Copy from the composed document to the composite.
    ToCompositeFieldPath(FieldPathPatch),
    /// Reference to a named patch set.
    PatchSet(PatchSetReference),
    /// Write a constant into the composed document.
    FromConstantValue(ConstantPatch),
    /// A patch whose `type` is outside the supported set. Kept so resolution
    /// can report the offending tag.
    Unsupported(String),
}

impl Patch {
    /// Returns the patch type, or `None` for an unsupported tag.
    #[must_use]
    pub const fn patch_type(&self) -> Option<PatchType> {
        match self {
            Self::FromCompositeFieldPath(_) => Some(PatchType::FromCompositeFieldPath),
            Self::ToCompositeFieldPath(_) => Some(PatchType::ToCompositeFieldPath),
            Self::PatchSet(_) => Some(PatchType::PatchSet),
            Self::FromConstantValue(_) => Some(PatchType::FromConstantValue),
            Self::Unsupported(_) => None,
        }
    }

    /// Returns the patch's `type` tag as written.
    #[must_use]
    pub fn type_name(&self) -> &str {
        match self {
            Self::Unsupported(tag) => tag,
            other => other.patch_type().map_or("", PatchType::as_str),
        }
    }

    /// Construct a `PatchSet` reference to `name`.
    #[must_use]
    pub fn patch_set(name: impl Into<String>) -> Self {
        Self::PatchSet(PatchSetReference {
            patch_set_name: Some(name.into()),
        })
    }
}

/// Configuration of the two field-path copy patches.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FieldPathPatch {
    /// Path read from the source document.
    pub from_field_path: Option<String>,
    /// Path written in the destination document. Defaults to
    /// `from_field_path`.
    pub to_field_path: Option<String>,
    /// Behaviour when the source path is absent.
    pub policy: Option<PatchPolicy>,
    /// Transforms applied, in order, to the value read.
    pub transforms: Vec<Transform>,
}

impl FieldPathPatch {
    /// Create a patch reading from `from_field_path`.
    #[must_use]
    pub fn new(from_field_path: impl Into<String>) -> Self {
        Self {
            from_field_path: Some(from_field_path.into()),
            ..Self::default()
        }
    }

    /// Set the destination path.
    #[must_use]
    pub fn with_to_field_path(mut self, to_field_path: impl Into<String>) -> Self {
        self.to_field_path = Some(to_field_path.into());
        self
    }

    /// Set the patch policy.
    #[must_use]
    pub const fn with_policy(mut self, policy: PatchPolicy) -> Self {
        self.policy = Some(policy);
        self
    }

    /// Append a transform to the pipeline.
    #[must_use]
    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transforms.push(transform);
        self
    }

    /// Effective policy for an absent source path.
    #[must_use]
    pub fn from_field_path_policy(&self) -> FromFieldPathPolicy {
        PatchPolicy::effective(self.policy.as_ref())
    }
}

/// Configuration of a `PatchSet` reference.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PatchSetReference {
    /// Name of the referenced patch set.
    pub patch_set_name: Option<String>,
}

/// Configuration of a `FromConstantValue` patch.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConstantPatch {
    /// Path written in the composed document.
    pub to_field_path: Option<String>,
    /// The literal to write.
    pub constant_value: Option<ConstantValue>,
}

impl ConstantPatch {
    /// Create a patch writing `constant_value` to `to_field_path`.
    #[must_use]
    pub fn new(to_field_path: impl Into<String>, constant_value: ConstantValue) -> Self {
        Self {
            to_field_path: Some(to_field_path.into()),
            constant_value: Some(constant_value),
        }
    }
}
