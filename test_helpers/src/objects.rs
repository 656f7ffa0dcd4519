//! Builders for small composite and composed documents.
//!
//! Both documents carry their metadata under `objectMeta`, mirroring the
//! shape resources usually have when patches move labels and names around.

use serde_json::{Map, Value, json};

/// Builds `{"objectMeta": {"name": name, "labels": {..}}}`.
///
/// The `labels` map is omitted when `labels` is empty so tests can check
/// that a patch created it.
///
/// # Examples
///
/// ```
/// use compose_patch_test_helpers::objects::object_meta;
/// use serde_json::json;
///
/// assert_eq!(
///     object_meta("cp", &[("Test", "blah")]),
///     json!({"objectMeta": {"name": "cp", "labels": {"Test": "blah"}}})
/// );
/// ```
#[must_use]
pub fn object_meta(name: &str, labels: &[(&str, &str)]) -> Value {
    let mut meta = Map::new();
    meta.insert("name".to_owned(), Value::String(name.to_owned()));
    if !labels.is_empty() {
        let label_map: Map<String, Value> = labels
            .iter()
            .map(|(k, v)| ((*k).to_owned(), Value::String((*v).to_owned())))
            .collect();
        meta.insert("labels".to_owned(), Value::Object(label_map));
    }
    json!({ "objectMeta": meta })
}

/// A composite resource with parameters for the sample compositions in
/// [`crate::documents`].
#[must_use]
pub fn composite() -> Value {
    json!({
        "metadata": {
            "name": "my-db",
            "labels": {"team": "storage"}
        },
        "spec": {
            "parameters": {
                "region": "us-east",
                "storageGB": 20
            }
        }
    })
}
