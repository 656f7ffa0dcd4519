//! Flat document representation of a patch.

use serde::{Deserialize, Serialize};

use crate::constant::ConstantValue;
use crate::transform::Transform;

use super::policy::PatchPolicy;
use super::types::{ConstantPatch, FieldPathPatch, Patch, PatchSetReference, PatchType};

/// A patch as written in a composition document: a `type` tag plus every
/// field any patch type may carry.
///
/// Fields that do not belong to the tagged type are dropped on conversion.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct PatchDocument {
    #[serde(rename = "type", default = "default_patch_type")]
    patch_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    from_field_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    to_field_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    patch_set_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    policy: Option<PatchPolicy>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    constant_value: Option<ConstantValue>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    transforms: Vec<Transform>,
}

fn default_patch_type() -> String {
    PatchType::FromCompositeFieldPath.as_str().to_owned()
}

impl From<PatchDocument> for Patch {
    fn from(doc: PatchDocument) -> Self {
        let Ok(patch_type) = doc.patch_type.parse::<PatchType>() else {
            return Self::Unsupported(doc.patch_type);
        };
        match patch_type {
            PatchType::FromCompositeFieldPath => Self::FromCompositeFieldPath(field_path(doc)),
            PatchType::ToCompositeFieldPath => Self::ToCompositeFieldPath(field_path(doc)),
            PatchType::PatchSet => Self::PatchSet(PatchSetReference {
                patch_set_name: doc.patch_set_name,
            }),
            PatchType::FromConstantValue => Self::FromConstantValue(ConstantPatch {
                to_field_path: doc.to_field_path,
                constant_value: doc.constant_value,
            }),
        }
    }
}

fn field_path(doc: PatchDocument) -> FieldPathPatch {
    FieldPathPatch {
        from_field_path: doc.from_field_path,
        to_field_path: doc.to_field_path,
        policy: doc.policy,
        transforms: doc.transforms,
    }
}

impl From<Patch> for PatchDocument {
    fn from(patch: Patch) -> Self {
        let patch_type = patch.type_name().to_owned();
        match patch {
            Patch::FromCompositeFieldPath(p) | Patch::ToCompositeFieldPath(p) => Self {
                patch_type,
                from_field_path: p.from_field_path,
                to_field_path: p.to_field_path,
                policy: p.policy,
                transforms: p.transforms,
                ..Self::default()
            },
            Patch::PatchSet(p) => Self {
                patch_type,
                patch_set_name: p.patch_set_name,
                ..Self::default()
            },
            Patch::FromConstantValue(p) => Self {
                patch_type,
                to_field_path: p.to_field_path,
                constant_value: p.constant_value,
                ..Self::default()
            },
            Patch::Unsupported(_) => Self {
                patch_type,
                ..Self::default()
            },
        }
    }
}
