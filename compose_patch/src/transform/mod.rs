//! Value transforms applied between reading and writing a patched value.
//!
//! Each transform is a pure function from one JSON value to another. A
//! patch's transforms run in order, each seeing the previous one's output;
//! the first failure aborts the pipeline.

mod convert;
mod error;
mod format;
mod map;
mod math;
mod string;
mod wire;

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{ComposeError, ComposeResult};

pub use convert::ConvertTransform;
pub use error::TransformError;
pub use map::MapTransform;
pub use math::MathTransform;
pub use string::StringTransform;

use wire::TransformDocument;

/// Transform a single value.
pub trait Resolve {
    /// Produce the transformed value for `input`.
    ///
    /// # Errors
    ///
    /// Returns a [`TransformError`] when `input` is not acceptable to the
    /// transform or the transform is misconfigured.
    fn resolve(&self, input: &Value) -> Result<Value, TransformError>;
}

/// The closed set of transform kinds.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum TransformType {
    /// Look the input up in a table.
    Map,
    /// Integer arithmetic.
    Math,
    /// printf-style formatting.
    String,
    /// Type conversion.
    Convert,
}

impl TransformType {
    /// Returns the wire name of the transform type.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Map => "map",
            Self::Math => "math",
            Self::String => "string",
            Self::Convert => "convert",
        }
    }

    fn parse(tag: &str) -> Option<Self> {
        match tag {
            "map" => Some(Self::Map),
            "math" => Some(Self::Math),
            "string" => Some(Self::String),
            "convert" => Some(Self::Convert),
            _ => None,
        }
    }
}

impl fmt::Display for TransformType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single transform.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "TransformDocument", into = "TransformDocument")]
pub enum Transform {
    /// Table lookup.
    Map(MapTransform),
    /// Multiplication.
    Math(MathTransform),
    /// Formatting.
    String(StringTransform),
    /// Type conversion.
    Convert(ConvertTransform),
    /// A known type whose configuration block is absent.
    MissingConfig(TransformType),
    /// A type outside the supported set.
    Unsupported(String),
}

impl Transform {
    /// Returns the transform's `type` tag as written.
    #[must_use]
    pub fn type_name(&self) -> &str {
        match self {
            Self::Map(_) => TransformType::Map.as_str(),
            Self::Math(_) => TransformType::Math.as_str(),
            Self::String(_) => TransformType::String.as_str(),
            Self::Convert(_) => TransformType::Convert.as_str(),
            Self::MissingConfig(transform_type) => transform_type.as_str(),
            Self::Unsupported(tag) => tag,
        }
    }
}

impl Resolve for Transform {
    fn resolve(&self, input: &Value) -> Result<Value, TransformError> {
        match self {
            Self::Map(t) => t.resolve(input),
            Self::Math(t) => t.resolve(input),
            Self::String(t) => t.resolve(input),
            Self::Convert(t) => t.resolve(input),
            Self::MissingConfig(transform_type) => {
                Err(TransformError::ConfigMissing(*transform_type))
            }
            Self::Unsupported(tag) => Err(TransformError::TypeNotSupported(tag.clone())),
        }
    }
}

/// Run `input` through `transforms` in order.
///
/// An empty pipeline returns `input` unchanged.
///
/// # Errors
///
/// Returns [`ComposeError::Transform`] identifying the first transform that
/// failed.
///
/// # Examples
///
/// ```
/// use compose_patch::{ConvertTransform, MathTransform, Transform, apply_transforms};
/// use serde_json::json;
///
/// let pipeline = [
///     Transform::Convert(ConvertTransform::new("int")),
///     Transform::Math(MathTransform::multiply(10)),
/// ];
/// assert_eq!(apply_transforms(&pipeline, json!("4"))?, json!(40));
/// # Ok::<_, compose_patch::ComposeError>(())
/// ```
pub fn apply_transforms(transforms: &[Transform], input: Value) -> ComposeResult<Value> {
    transforms
        .iter()
        .enumerate()
        .try_fold(input, |value, (index, transform)| {
            transform
                .resolve(&value)
                .map_err(|source| ComposeError::Transform {
                    index,
                    transform_type: transform.type_name().to_owned(),
                    source,
                })
        })
}

#[cfg(test)]
mod tests;
