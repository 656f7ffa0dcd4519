//! Runtime kinds of JSON values flowing through patches.

use std::fmt;

use serde_json::Value;

/// The runtime kind of a [`Value`], as reported in transform errors.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ValueKind {
    /// JSON `null`.
    Null,
    /// A boolean.
    Bool,
    /// An integer number.
    Int,
    /// A number with a fractional part or exponent.
    Float,
    /// A string.
    String,
    /// A list.
    Array,
    /// A map.
    Object,
}

impl ValueKind {
    /// Classify `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use compose_patch::ValueKind;
    /// use serde_json::json;
    ///
    /// assert_eq!(ValueKind::of(&json!(5)), ValueKind::Int);
    /// assert_eq!(ValueKind::of(&json!(5.5)), ValueKind::Float);
    /// assert_eq!(ValueKind::of(&json!([64])), ValueKind::Array);
    /// ```
    #[must_use]
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(_) => Self::Bool,
            Value::Number(n) if n.is_i64() || n.is_u64() => Self::Int,
            Value::Number(_) => Self::Float,
            Value::String(_) => Self::String,
            Value::Array(_) => Self::Array,
            Value::Object(_) => Self::Object,
        }
    }

    /// Returns the lowercase name used in messages.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool => "bool",
            Self::Int => "int",
            Self::Float => "float64",
            Self::String => "string",
            Self::Array => "array",
            Self::Object => "object",
        }
    }

    /// Whether the kind is a single value rather than a container or null.
    #[must_use]
    pub const fn is_scalar(self) -> bool {
        matches!(self, Self::Bool | Self::Int | Self::Float | Self::String)
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
