//! Constructors and conversions for `ComposeError`.

use std::path::Path;

use figment::Error as FigmentError;

use crate::patch::PatchType;

use super::ComposeError;

impl ComposeError {
    /// Construct a missing-field error for a patch of `patch_type`.
    ///
    /// # Examples
    ///
    /// ```
    /// use compose_patch::{ComposeError, PatchType};
    /// let e = ComposeError::required_field("toFieldPath", PatchType::FromConstantValue);
    /// assert_eq!(e.to_string(), "toFieldPath is required by patch type FromConstantValue");
    /// ```
    #[must_use]
    pub const fn required_field(field: &'static str, patch_type: PatchType) -> Self {
        Self::RequiredField { field, patch_type }
    }

    /// Construct an invalid-patch-type error naming `patch_type`.
    #[must_use]
    pub fn invalid_patch_type(patch_type: impl Into<String>) -> Self {
        Self::InvalidPatchType {
            patch_type: patch_type.into(),
        }
    }

    /// Construct a file error for `path`.
    #[must_use]
    pub fn file(
        path: &Path,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self::File {
            path: path.to_path_buf(),
            source: source.into(),
        }
    }

    /// Construct a settings error from a [`figment::Error`].
    ///
    /// # Examples
    ///
    /// ```
    /// use compose_patch::ComposeError;
    /// let e = ComposeError::settings(figment::Error::from("boom"));
    /// assert!(matches!(e, ComposeError::Settings(_)));
    /// ```
    #[must_use]
    pub fn settings(source: FigmentError) -> Self {
        Self::Settings(Box::new(source))
    }

    /// Wrap `self` with the index of the patch that produced it.
    #[must_use]
    pub fn at_patch(self, index: usize) -> Self {
        Self::Patch {
            index,
            source: Box::new(self),
        }
    }

    /// Wrap `self` with the index of the composed template that produced it.
    #[must_use]
    pub fn at_resource(self, index: usize) -> Self {
        Self::Resource {
            index,
            source: Box::new(self),
        }
    }
}

impl From<FigmentError> for ComposeError {
    fn from(e: FigmentError) -> Self {
        Self::settings(e)
    }
}
