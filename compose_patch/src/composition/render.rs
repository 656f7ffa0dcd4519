//! Rendering composed documents from their templates.

use serde_json::Value;

use crate::ComposeResult;
use crate::fieldpath::FieldPathAccess;
use crate::patch::PatchType;

use super::{ComposedTemplate, CompositionSpec};

impl ComposedTemplate {
    /// Apply the template's patches between `composite` and `composed`.
    ///
    /// Patches run in order; `only` filters them as in
    /// [`Patch::apply`](crate::Patch::apply). Patches applied before a
    /// failure are not rolled back.
    ///
    /// # Errors
    ///
    /// Returns the first patch failure, wrapped with the patch's index.
    pub fn apply_patches<C, D>(
        &self,
        composite: &mut C,
        composed: &mut D,
        only: &[PatchType],
    ) -> ComposeResult<()>
    where
        C: FieldPathAccess + ?Sized,
        D: FieldPathAccess + ?Sized,
    {
        for (index, patch) in self.patches.iter().enumerate() {
            patch
                .apply(composite, composed, only)
                .map_err(|err| err.at_patch(index))?;
        }
        Ok(())
    }

    /// Render the composed document: a copy of `base` with every
    /// `FromCompositeFieldPath` and `FromConstantValue` patch applied.
    ///
    /// A `PatchSet` patch that was never inlined fails rather than being
    /// skipped.
    ///
    /// # Errors
    ///
    /// Returns the first patch failure, wrapped with the patch's index.
    pub fn render(&self, composite: &Value) -> ComposeResult<Value> {
        // `apply_patches` needs a mutable composite; these patch types never
        // write to it, so a scratch copy is enough.
        let mut scratch = composite.clone();
        let mut composed = self.base.clone();
        self.apply_patches(&mut scratch, &mut composed, PatchType::FROM_COMPOSITE)?;
        Ok(composed)
    }

    /// Copy observed values from `composed` back into `composite` using the
    /// template's `ToCompositeFieldPath` patches.
    ///
    /// # Errors
    ///
    /// Returns the first patch failure, wrapped with the patch's index.
    pub fn observe(&self, composite: &mut Value, composed: &mut Value) -> ComposeResult<()> {
        self.apply_patches(composite, composed, PatchType::TO_COMPOSITE)
    }
}

impl CompositionSpec {
    /// Render every template against `composite`, in order.
    ///
    /// # Errors
    ///
    /// Returns the first failure, wrapped with the template's index.
    pub fn render_all(&self, composite: &Value) -> ComposeResult<Vec<Value>> {
        self.resources
            .iter()
            .enumerate()
            .map(|(index, resource)| {
                tracing::debug!(resource = index, name = resource.name.as_deref(), "rendering");
                resource
                    .render(composite)
                    .map_err(|err| err.at_resource(index))
            })
            .collect()
    }

    /// Apply each template's patches between `composite` and the composed
    /// document at the same position in `composed`, filtered by `only`.
    ///
    /// Templates without a matching document are skipped.
    ///
    /// # Errors
    ///
    /// Returns the first failure, wrapped with the template's index.
    pub fn apply_all(
        &self,
        composite: &mut Value,
        composed: &mut [Value],
        only: &[PatchType],
    ) -> ComposeResult<()> {
        if composed.len() < self.resources.len() {
            tracing::debug!(
                templates = self.resources.len(),
                documents = composed.len(),
                "fewer composed documents than templates"
            );
        }
        for (index, (resource, document)) in self.resources.iter().zip(composed).enumerate() {
            resource
                .apply_patches(composite, document, only)
                .map_err(|err| err.at_resource(index))?;
        }
        Ok(())
    }
}
