//! Errors reported by transforms.

use thiserror::Error;

use crate::error::ErrorCategory;
use crate::value::ValueKind;

use super::TransformType;

/// Failure resolving a transform.
#[derive(Clone, Debug, Error, PartialEq)]
#[non_exhaustive]
pub enum TransformError {
    /// The transform `type` is outside the supported set.
    #[error("transform type '{0}' is not supported")]
    TypeNotSupported(String),

    /// The configuration block for the transform type is absent.
    #[error("{0} transform requires a '{0}' configuration block")]
    ConfigMissing(TransformType),

    /// Map input was not a string.
    #[error("map transform does not support {kind} input")]
    MapTypeNotSupported {
        /// Kind of the rejected input.
        kind: ValueKind,
    },

    /// Map input has no entry in the table.
    #[error("key '{key}' is not found in map")]
    MapKeyNotFound {
        /// The input that was looked up.
        key: String,
    },

    /// Math transform has no operation configured.
    #[error("no multiplier is configured for math transform")]
    MathNoMultiplier,

    /// Math input was not an integer.
    #[error("math transform input is not a number: got {kind}")]
    MathInputNotNumber {
        /// Kind of the rejected input.
        kind: ValueKind,
    },

    /// The product does not fit in a 64-bit integer.
    #[error("{input} multiplied by {multiplier} overflows a 64-bit integer")]
    MathOverflow {
        /// The input, as written.
        input: String,
        /// The configured multiplier.
        multiplier: i64,
    },

    /// Convert input is not a scalar.
    #[error("convert transform does not support {kind} input")]
    ConvertInputTypeNotSupported {
        /// Kind of the rejected input.
        kind: ValueKind,
    },

    /// No conversion exists between the input kind and the target type.
    #[error("conversion from {from} to {to} is not supported")]
    ConversionPairNotSupported {
        /// Kind of the input.
        from: ValueKind,
        /// Requested target type, as written.
        to: String,
    },

    /// The input could not be converted to the target type.
    #[error("cannot convert {from} '{input}' to {to}: {reason}")]
    ConversionFailed {
        /// Kind of the input.
        from: ValueKind,
        /// The input, as written.
        input: String,
        /// Requested target type.
        to: &'static str,
        /// Why the conversion failed.
        reason: String,
    },
}

impl TransformError {
    /// Classify this error.
    #[must_use]
    pub const fn category(&self) -> ErrorCategory {
        match self {
            Self::TypeNotSupported(_)
            | Self::ConfigMissing(_)
            | Self::MathNoMultiplier
            | Self::ConversionPairNotSupported { .. } => ErrorCategory::Configuration,
            Self::MapTypeNotSupported { .. }
            | Self::MapKeyNotFound { .. }
            | Self::MathInputNotNumber { .. }
            | Self::MathOverflow { .. }
            | Self::ConvertInputTypeNotSupported { .. }
            | Self::ConversionFailed { .. } => ErrorCategory::Data,
        }
    }
}
