//! [`FieldPathAccess`] for JSON documents.

use serde_json::{Map, Value};

use super::{FieldPathAccess, FieldPathError, Segment, parse};

/// Most `null` entries a single write may pad onto the end of a list.
pub const MAX_LIST_PADDING: usize = 1024;

impl FieldPathAccess for Value {
    /// Walk `path` and clone the value found there.
    ///
    /// A missing key, an out-of-range index, or a segment applied to a value
    /// of the wrong shape all report [`FieldPathError::NotFound`]. A stored
    /// `null` is a value and is returned as such.
    ///
    /// # Examples
    ///
    /// ```
    /// use compose_patch::FieldPathAccess;
    /// use serde_json::json;
    ///
    /// let doc = json!({"spec": {"ports": [80, 443]}});
    /// assert_eq!(doc.get_value("spec.ports[1]")?, json!(443));
    /// assert!(doc.get_value("spec.ports[2]").unwrap_err().is_not_found());
    /// # Ok::<_, compose_patch::FieldPathError>(())
    /// ```
    fn get_value(&self, path: &str) -> Result<Value, FieldPathError> {
        let segments = parse(path)?;
        let mut current = self;
        for segment in &segments {
            let next = match (segment, current) {
                (Segment::Field(name), Self::Object(map)) => map.get(name),
                (Segment::Index(index), Self::Array(items)) => items.get(*index),
                _ => None,
            };
            current = next.ok_or_else(|| FieldPathError::not_found(path))?;
        }
        Ok(current.clone())
    }

    /// Store `value` at `path`.
    ///
    /// Missing objects are created for field segments and missing lists for
    /// index segments; `null` placeholders are replaced the same way. Lists
    /// grow with `null` padding to reach the requested index, by at most
    /// [`MAX_LIST_PADDING`] entries; a further index is
    /// [`FieldPathError::InvalidPath`].
    ///
    /// # Examples
    ///
    /// ```
    /// use compose_patch::FieldPathAccess;
    /// use serde_json::json;
    ///
    /// let mut doc = json!({});
    /// doc.set_value("spec.ports[1].name", json!("https"))?;
    /// assert_eq!(doc, json!({"spec": {"ports": [null, {"name": "https"}]}}));
    /// # Ok::<_, compose_patch::FieldPathError>(())
    /// ```
    fn set_value(&mut self, path: &str, value: Value) -> Result<(), FieldPathError> {
        let segments = parse(path)?;
        let Some((last, parents)) = segments.split_last() else {
            return Err(FieldPathError::invalid(path, "empty path"));
        };
        let mut current = self;
        for segment in parents {
            current = slot(current, segment, path)?;
        }
        *slot(current, last, path)? = value;
        Ok(())
    }
}

/// Returns the child of `parent` addressed by `segment`, creating it (and
/// `parent` itself, when it is `null`) if absent.
fn slot<'a>(
    parent: &'a mut Value,
    segment: &Segment,
    path: &str,
) -> Result<&'a mut Value, FieldPathError> {
    match segment {
        Segment::Field(name) => {
            if parent.is_null() {
                *parent = Value::Object(Map::new());
            }
            let Value::Object(map) = parent else {
                return Err(mismatch(path, segment, "an object"));
            };
            Ok(map.entry(name.clone()).or_insert(Value::Null))
        }
        Segment::Index(index) => {
            if parent.is_null() {
                *parent = Value::Array(Vec::new());
            }
            let Value::Array(items) = parent else {
                return Err(mismatch(path, segment, "a list"));
            };
            if index.saturating_sub(items.len()) > MAX_LIST_PADDING {
                return Err(FieldPathError::invalid(
                    path,
                    format!(
                        "index {index} is more than {MAX_LIST_PADDING} past the end of the list"
                    ),
                ));
            }
            if items.len() <= *index {
                items.resize_with(index.saturating_add(1), || Value::Null);
            }
            items
                .get_mut(*index)
                .ok_or_else(|| mismatch(path, segment, "a list"))
        }
    }
}

fn mismatch(path: &str, segment: &Segment, expected: &'static str) -> FieldPathError {
    FieldPathError::TypeMismatch {
        path: path.to_owned(),
        segment: segment.to_string(),
        expected,
    }
}
