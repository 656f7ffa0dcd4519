//! Errors reported by field-path access.

use thiserror::Error;

use crate::error::ErrorCategory;

/// Failure reading or writing a field path.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
#[non_exhaustive]
pub enum FieldPathError {
    /// Nothing is stored at the path.
    #[error("{path}: no such field")]
    NotFound {
        /// The path that was read.
        path: String,
    },

    /// The path string is malformed.
    #[error("invalid field path '{path}': {reason}")]
    InvalidPath {
        /// The path that failed to parse.
        path: String,
        /// Why parsing failed.
        reason: String,
    },

    /// A value along the path has the wrong shape for the requested write.
    #[error("{path}: cannot write {segment}: parent is not {expected}")]
    TypeMismatch {
        /// The path that was written.
        path: String,
        /// The segment that could not be written.
        segment: String,
        /// The container kind the segment requires.
        expected: &'static str,
    },
}

impl FieldPathError {
    /// Construct a not-found error for `path`.
    #[must_use]
    pub fn not_found(path: impl Into<String>) -> Self {
        Self::NotFound { path: path.into() }
    }

    /// Construct an invalid-path error for `path`.
    #[must_use]
    pub fn invalid(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidPath {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Whether this error reports an absent field.
    ///
    /// Absent fields may be tolerated by patch policy; every other field-path
    /// failure is always surfaced.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Classify this error.
    #[must_use]
    pub const fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidPath { .. } => ErrorCategory::Configuration,
            Self::NotFound { .. } | Self::TypeMismatch { .. } => ErrorCategory::Data,
        }
    }
}
