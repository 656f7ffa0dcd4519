//! Resolution of individual patches against a pair of documents.

use crate::fieldpath::FieldPathAccess;
use crate::transform::apply_transforms;
use crate::{ComposeError, ComposeResult};

use super::policy::is_optional_field_path_not_found;
use super::types::{ConstantPatch, FieldPathPatch, Patch, PatchType};

impl Patch {
    /// Apply this patch between `composite` and `composed`.
    ///
    /// When `only` is non-empty, patches whose type is not listed are skipped
    /// without error. `FromCompositeFieldPath` reads `composite` and writes
    /// `composed`; `ToCompositeFieldPath` reads `composed` and writes
    /// `composite`; `FromConstantValue` writes `composed`.
    ///
    /// Nothing is written unless the whole transform pipeline succeeds.
    ///
    /// # Errors
    ///
    /// Returns a [`ComposeError`] when the patch is missing a required field,
    /// has a type that cannot be resolved (including an un-inlined
    /// `PatchSet`), reads a required path that is absent, or when a transform,
    /// constant, or write fails.
    pub fn apply<C, D>(
        &self,
        composite: &mut C,
        composed: &mut D,
        only: &[PatchType],
    ) -> ComposeResult<()>
    where
        C: FieldPathAccess + ?Sized,
        D: FieldPathAccess + ?Sized,
    {
        if !only.is_empty() && !self.patch_type().is_some_and(|t| only.contains(&t)) {
            tracing::debug!(patch_type = self.type_name(), "patch type filtered out");
            return Ok(());
        }

        match self {
            Self::FromCompositeFieldPath(patch) => {
                patch.copy(PatchType::FromCompositeFieldPath, &*composite, composed)
            }
            Self::ToCompositeFieldPath(patch) => {
                patch.copy(PatchType::ToCompositeFieldPath, &*composed, composite)
            }
            Self::FromConstantValue(patch) => patch.write(composed),
            Self::PatchSet(_) | Self::Unsupported(_) => {
                Err(ComposeError::invalid_patch_type(self.type_name()))
            }
        }
    }
}

impl FieldPathPatch {
    /// Copy the value at `from_field_path` in `from` to `to_field_path` (or
    /// `from_field_path` when unset) in `to`, running it through the
    /// transform pipeline.
    ///
    /// The two field-path patch types differ only in which document is passed
    /// as `from` and which as `to`; `patch_type` is used for error reporting.
    ///
    /// # Errors
    ///
    /// Returns a [`ComposeError`] when `from_field_path` is unset, the read
    /// fails (other than an absence tolerated by policy), a transform fails,
    /// or the write fails.
    pub fn copy<S, T>(&self, patch_type: PatchType, from: &S, to: &mut T) -> ComposeResult<()>
    where
        S: FieldPathAccess + ?Sized,
        T: FieldPathAccess + ?Sized,
    {
        let from_path = self
            .from_field_path
            .as_deref()
            .ok_or_else(|| ComposeError::required_field("fromFieldPath", patch_type))?;

        let value = match from.get_value(from_path) {
            Ok(value) => value,
            Err(err) if is_optional_field_path_not_found(Some(&err), self.policy.as_ref()) => {
                tracing::debug!(
                    %patch_type,
                    from_field_path = from_path,
                    "optional source field absent; skipping patch"
                );
                return Ok(());
            }
            Err(err) => return Err(err.into()),
        };

        let transformed = apply_transforms(&self.transforms, value)?;
        let to_path = self.to_field_path.as_deref().unwrap_or(from_path);
        to.set_value(to_path, transformed)?;
        Ok(())
    }
}

impl ConstantPatch {
    /// Resolve the constant and write it to `to_field_path` in `to`.
    ///
    /// # Errors
    ///
    /// Returns a [`ComposeError`] when `to_field_path` or the constant is
    /// unset, the constant cannot be resolved, or the write fails.
    pub fn write<T>(&self, to: &mut T) -> ComposeResult<()>
    where
        T: FieldPathAccess + ?Sized,
    {
        let to_path = self.to_field_path.as_deref().ok_or_else(|| {
            ComposeError::required_field("toFieldPath", PatchType::FromConstantValue)
        })?;
        let constant = self
            .constant_value
            .as_ref()
            .ok_or(ComposeError::ConstantValueRequired {
                patch_type: PatchType::FromConstantValue,
            })?;
        to.set_value(to_path, constant.value()?)?;
        Ok(())
    }
}
