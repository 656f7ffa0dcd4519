//! String formatting transform.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::format::sprintf;
use super::{Resolve, TransformError};

/// Formats the input into a printf-style template with a single verb.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct StringTransform {
    /// The template, e.g. `"%s-bucket"`.
    #[serde(rename = "fmt")]
    pub format: String,
}

impl StringTransform {
    /// A transform formatting with `format`.
    #[must_use]
    pub fn new(format: impl Into<String>) -> Self {
        Self {
            format: format.into(),
        }
    }
}

impl Resolve for StringTransform {
    /// Always succeeds; verb/value mismatches show up in the output text.
    fn resolve(&self, input: &Value) -> Result<Value, TransformError> {
        Ok(Value::String(sprintf(&self.format, input)))
    }
}
