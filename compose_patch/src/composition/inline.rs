//! Expansion of `PatchSet` references.

use crate::patch::{Patch, PatchType};
use crate::{ComposeError, ComposeResult};

use super::{CompositionSpec, PatchSet, find_patch_set};

impl CompositionSpec {
    /// Replace every `PatchSet` patch in every template with the patches of
    /// the set it names.
    ///
    /// Sets are spliced in at the position of the reference, in declared
    /// order. Patches inside a set are copied as-is, so a set that itself
    /// contains a `PatchSet` patch is not expanded further.
    ///
    /// # Errors
    ///
    /// Returns [`ComposeError::UndefinedPatchSet`] when a reference names no
    /// set, or a missing-field error when a reference has no name. Templates
    /// before the failing one have already been rewritten; the failing
    /// template keeps its original patches.
    ///
    /// # Examples
    ///
    /// ```
    /// use compose_patch::{ComposedTemplate, CompositionSpec, FieldPathPatch, Patch, PatchSet};
    /// use serde_json::json;
    ///
    /// let name = Patch::FromCompositeFieldPath(FieldPathPatch::new("metadata.name"));
    /// let mut spec = CompositionSpec {
    ///     patch_sets: vec![PatchSet::new("common", vec![name.clone()])],
    ///     resources: vec![ComposedTemplate::new(json!({}))
    ///         .with_patches(vec![Patch::patch_set("common")])],
    /// };
    /// spec.inline_patch_sets()?;
    /// assert_eq!(spec.resources[0].patches, vec![name]);
    /// # Ok::<_, compose_patch::ComposeError>(())
    /// ```
    pub fn inline_patch_sets(&mut self) -> ComposeResult<()> {
        let Self {
            patch_sets,
            resources,
        } = self;
        for (index, resource) in resources.iter_mut().enumerate() {
            let inlined = inline_patches(patch_sets, &resource.patches)?;
            tracing::debug!(
                resource = index,
                name = resource.name.as_deref(),
                before = resource.patches.len(),
                after = inlined.len(),
                "inlined patch sets"
            );
            resource.patches = inlined;
        }
        Ok(())
    }
}

fn inline_patches(patch_sets: &[PatchSet], patches: &[Patch]) -> ComposeResult<Vec<Patch>> {
    let mut inlined = Vec::with_capacity(patches.len());
    for patch in patches {
        let Patch::PatchSet(reference) = patch else {
            inlined.push(patch.clone());
            continue;
        };
        let name = reference
            .patch_set_name
            .as_deref()
            .ok_or_else(|| ComposeError::required_field("patchSetName", PatchType::PatchSet))?;
        let set = find_patch_set(patch_sets, name).ok_or_else(|| {
            ComposeError::UndefinedPatchSet {
                name: name.to_owned(),
            }
        })?;
        inlined.extend(set.patches.iter().cloned());
    }
    Ok(inlined)
}
