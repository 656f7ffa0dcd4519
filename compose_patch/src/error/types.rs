//! Primary error enum for patch resolution flows.

use thiserror::Error;

use crate::constant::ConstantError;
use crate::fieldpath::FieldPathError;
use crate::patch::PatchType;
use crate::transform::TransformError;

/// Broad classification of a [`ComposeError`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorCategory {
    /// The composition itself is malformed. Retrying with the same
    /// configuration cannot succeed.
    Configuration,
    /// The configuration is valid but the documents being patched do not
    /// carry the data it expects.
    Data,
}

/// Errors that can occur while inlining patch sets or applying patches.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ComposeError {
    /// A `PatchSet` patch referenced a name with no matching patch set.
    #[error("cannot find patch set named '{name}'")]
    UndefinedPatchSet {
        /// Name of the missing patch set.
        name: String,
    },

    /// A patch is missing a field its type requires.
    #[error("{field} is required by patch type {patch_type}")]
    RequiredField {
        /// Wire name of the missing field.
        field: &'static str,
        /// Type of the offending patch.
        patch_type: PatchType,
    },

    /// A constant patch carries no constant value.
    #[error("a constant value is required by patch type {patch_type}")]
    ConstantValueRequired {
        /// Type of the offending patch.
        patch_type: PatchType,
    },

    /// The patch type cannot be resolved.
    #[error("patch type '{patch_type}' is not supported")]
    InvalidPatchType {
        /// Tag of the unsupported patch.
        patch_type: String,
    },

    /// Reading or writing a field path failed.
    #[error(transparent)]
    FieldPath(#[from] FieldPathError),

    /// A constant value could not be resolved.
    #[error(transparent)]
    Constant(#[from] ConstantError),

    /// A transform in a patch's pipeline failed.
    #[error("transform at index {index} of type {transform_type} failed: {source}")]
    Transform {
        /// Position of the failing transform in the pipeline.
        index: usize,
        /// Type tag of the failing transform.
        transform_type: String,
        /// Underlying transform failure.
        #[source]
        source: TransformError,
    },

    /// A patch in a composed template failed.
    #[error("cannot apply the patch at index {index}: {source}")]
    Patch {
        /// Position of the failing patch in the template.
        index: usize,
        /// Underlying failure.
        #[source]
        source: Box<Self>,
    },

    /// Rendering a composed template failed.
    #[error("cannot compose resource at index {index}: {source}")]
    Resource {
        /// Position of the template in the composition.
        index: usize,
        /// Underlying failure.
        #[source]
        source: Box<Self>,
    },

    /// Error originating from a composition or settings file.
    #[error("Configuration file error in '{path}': {source}")]
    File {
        /// Path that triggered the failure.
        path: std::path::PathBuf,
        /// Underlying error reported by the file loader.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Error while gathering settings from providers.
    #[error("Failed to gather settings: {0}")]
    Settings(#[from] Box<figment::Error>),
}

impl ComposeError {
    /// Classify this error as a configuration or data failure.
    ///
    /// Wrapped errors report the category of their innermost cause.
    #[must_use]
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::FieldPath(err) => err.category(),
            Self::Transform { source, .. } => source.category(),
            Self::Patch { source, .. } | Self::Resource { source, .. } => source.category(),
            Self::UndefinedPatchSet { .. }
            | Self::RequiredField { .. }
            | Self::ConstantValueRequired { .. }
            | Self::InvalidPatchType { .. }
            | Self::Constant(_)
            | Self::File { .. }
            | Self::Settings(_) => ErrorCategory::Configuration,
        }
    }

    /// Returns the innermost error, unwrapping patch and resource context.
    #[must_use]
    pub fn root(&self) -> &Self {
        match self {
            Self::Patch { source, .. } | Self::Resource { source, .. } => source.root(),
            other => other,
        }
    }
}
