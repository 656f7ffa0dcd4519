//! Policy governing absent source fields.

use serde::{Deserialize, Serialize};

use crate::fieldpath::FieldPathError;

/// What to do when a patch's `fromFieldPath` does not exist.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub enum FromFieldPathPolicy {
    /// Skip the patch.
    #[default]
    Optional,
    /// Fail the patch.
    Required,
}

/// Per-patch policy.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatchPolicy {
    /// Behaviour for an absent source path. Unset means
    /// [`FromFieldPathPolicy::Optional`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from_field_path: Option<FromFieldPathPolicy>,
}

impl PatchPolicy {
    /// A policy that skips patches whose source is absent.
    #[must_use]
    pub const fn optional() -> Self {
        Self {
            from_field_path: Some(FromFieldPathPolicy::Optional),
        }
    }

    /// A policy that fails patches whose source is absent.
    #[must_use]
    pub const fn required() -> Self {
        Self {
            from_field_path: Some(FromFieldPathPolicy::Required),
        }
    }

    /// Resolve the policy for an absent source path, applying the default
    /// when `policy` or its `from_field_path` is unset.
    ///
    /// # Examples
    ///
    /// ```
    /// use compose_patch::{FromFieldPathPolicy, PatchPolicy};
    ///
    /// assert_eq!(PatchPolicy::effective(None), FromFieldPathPolicy::Optional);
    /// assert_eq!(
    ///     PatchPolicy::effective(Some(&PatchPolicy::default())),
    ///     FromFieldPathPolicy::Optional
    /// );
    /// assert_eq!(
    ///     PatchPolicy::effective(Some(&PatchPolicy::required())),
    ///     FromFieldPathPolicy::Required
    /// );
    /// ```
    #[must_use]
    pub fn effective(policy: Option<&Self>) -> FromFieldPathPolicy {
        policy
            .and_then(|p| p.from_field_path)
            .unwrap_or_default()
    }
}

/// Whether `err` reports an absent source field that `policy` allows the
/// patch to skip.
///
/// Returns `false` when there is no error, when the error is anything other
/// than [`FieldPathError::NotFound`], or when the effective policy is
/// [`FromFieldPathPolicy::Required`].
#[must_use]
pub fn is_optional_field_path_not_found(
    err: Option<&FieldPathError>,
    policy: Option<&PatchPolicy>,
) -> bool {
    err.is_some_and(FieldPathError::is_not_found)
        && PatchPolicy::effective(policy) == FromFieldPathPolicy::Optional
}
