//! Table lookup transform.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::value::ValueKind;

use super::{Resolve, TransformError};

/// Replaces a string input with its entry in `pairs`.
///
/// Written inline in documents:
///
/// ```yaml
/// type: map
/// map:
///   us-east: us-east-1
///   eu-west: eu-west-1
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MapTransform {
    /// Lookup table from input to output.
    pub pairs: BTreeMap<String, String>,
}

impl MapTransform {
    /// Build a map transform from key/value pairs.
    #[must_use]
    pub fn new<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            pairs: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl Resolve for MapTransform {
    fn resolve(&self, input: &Value) -> Result<Value, TransformError> {
        let Value::String(key) = input else {
            return Err(TransformError::MapTypeNotSupported {
                kind: ValueKind::of(input),
            });
        };
        self.pairs
            .get(key)
            .map(|mapped| Value::String(mapped.clone()))
            .ok_or_else(|| TransformError::MapKeyNotFound { key: key.clone() })
    }
}
