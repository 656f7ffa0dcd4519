//! Compositions: named patch sets and the templates composed from them.
//!
//! A composition is loaded once, has its patch sets inlined with
//! [`CompositionSpec::inline_patch_sets`], and is then used read-only to
//! render each composed document from the composite.

mod inline;
mod render;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::patch::Patch;

/// A set of patch sets and the resource templates that may reference them.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompositionSpec {
    /// Reusable, named groups of patches.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub patch_sets: Vec<PatchSet>,
    /// Templates for the composed resources, in render order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub resources: Vec<ComposedTemplate>,
}

impl CompositionSpec {
    /// Returns the first patch set called `name`.
    #[must_use]
    pub fn patch_set(&self, name: &str) -> Option<&PatchSet> {
        find_patch_set(&self.patch_sets, name)
    }
}

pub(crate) fn find_patch_set<'a>(patch_sets: &'a [PatchSet], name: &str) -> Option<&'a PatchSet> {
    patch_sets.iter().find(|set| set.name == name)
}

/// A named group of patches that templates include by reference.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PatchSet {
    /// Name referenced by `PatchSet` patches.
    pub name: String,
    /// Patches spliced into referencing templates, in order.
    #[serde(default)]
    pub patches: Vec<Patch>,
}

impl PatchSet {
    /// Create a patch set.
    #[must_use]
    pub fn new(name: impl Into<String>, patches: Vec<Patch>) -> Self {
        Self {
            name: name.into(),
            patches,
        }
    }
}

/// The template a single composed resource is rendered from.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ComposedTemplate {
    /// Optional label used in logs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// The document patches are applied on top of.
    #[serde(default = "empty_object")]
    pub base: Value,
    /// Patches applied, in order, when rendering and observing.
    #[serde(default)]
    pub patches: Vec<Patch>,
}

impl Default for ComposedTemplate {
    fn default() -> Self {
        Self::new(empty_object())
    }
}

impl ComposedTemplate {
    /// Create an unnamed template with no patches.
    #[must_use]
    pub const fn new(base: Value) -> Self {
        Self {
            name: None,
            base,
            patches: Vec::new(),
        }
    }

    /// Set the template's name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Replace the template's patches.
    #[must_use]
    pub fn with_patches(mut self, patches: Vec<Patch>) -> Self {
        self.patches = patches;
        self
    }
}

fn empty_object() -> Value {
    Value::Object(Map::new())
}
