//! Typed literals written by `FromConstantValue` patches.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// The supported constant types.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ConstantType {
    /// A string literal.
    String,
    /// A 64-bit integer literal.
    Int,
    /// A boolean literal.
    Bool,
}

impl ConstantType {
    /// Returns the wire name of the type.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Int => "int",
            Self::Bool => "bool",
        }
    }
}

impl fmt::Display for ConstantType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConstantType {
    type Err = ConstantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "string" => Ok(Self::String),
            "int" => Ok(Self::Int),
            "bool" => Ok(Self::Bool),
            "" => Err(ConstantError::TypeNotDefined),
            other => Err(ConstantError::TypeNotSupported(other.to_owned())),
        }
    }
}

/// Failure resolving a [`ConstantValue`].
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum ConstantError {
    /// No `type` was given.
    #[error("constant value type is not defined")]
    TypeNotDefined,
    /// The `type` is outside the supported set.
    #[error("constant value type '{0}' is not supported")]
    TypeNotSupported(String),
    /// The payload matching `type` is unset.
    #[error("a value is required for constant type {0}")]
    RequiredValue(ConstantType),
}

/// A constant as written in a composition document: a `type` tag selecting
/// which of the payload fields is authoritative.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct ConstantValue {
    /// The constant type tag.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub value_type: Option<String>,
    /// Payload for `type: string`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub string: Option<String>,
    /// Payload for `type: int`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub int: Option<i64>,
    /// Payload for `type: bool`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bool: Option<bool>,
}

/// A resolved constant.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Constant {
    /// A string literal.
    String(String),
    /// A 64-bit integer literal.
    Int(i64),
    /// A boolean literal.
    Bool(bool),
}

impl From<Constant> for Value {
    fn from(constant: Constant) -> Self {
        match constant {
            Constant::String(s) => Self::String(s),
            Constant::Int(i) => Self::from(i),
            Constant::Bool(b) => Self::Bool(b),
        }
    }
}

impl ConstantValue {
    /// A string constant.
    #[must_use]
    pub fn string(value: impl Into<String>) -> Self {
        Self {
            value_type: Some(ConstantType::String.as_str().to_owned()),
            string: Some(value.into()),
            ..Self::default()
        }
    }

    /// An integer constant.
    #[must_use]
    pub fn int(value: i64) -> Self {
        Self {
            value_type: Some(ConstantType::Int.as_str().to_owned()),
            int: Some(value),
            ..Self::default()
        }
    }

    /// A boolean constant.
    #[must_use]
    pub fn bool(value: bool) -> Self {
        Self {
            value_type: Some(ConstantType::Bool.as_str().to_owned()),
            bool: Some(value),
            ..Self::default()
        }
    }

    /// Resolve the payload selected by the type tag.
    ///
    /// Payloads for other types are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ConstantError::TypeNotDefined`] when the tag is unset or
    /// empty, [`ConstantError::TypeNotSupported`] for an unknown tag, and
    /// [`ConstantError::RequiredValue`] when the selected payload is unset.
    ///
    /// # Examples
    ///
    /// ```
    /// use compose_patch::{Constant, ConstantValue};
    ///
    /// assert_eq!(ConstantValue::int(5).resolve()?, Constant::Int(5));
    /// # Ok::<_, compose_patch::ConstantError>(())
    /// ```
    pub fn resolve(&self) -> Result<Constant, ConstantError> {
        let constant_type: ConstantType = self.value_type.as_deref().unwrap_or_default().parse()?;
        let missing = || ConstantError::RequiredValue(constant_type);
        match constant_type {
            ConstantType::String => self
                .string
                .clone()
                .map(Constant::String)
                .ok_or_else(missing),
            ConstantType::Int => self.int.map(Constant::Int).ok_or_else(missing),
            ConstantType::Bool => self.bool.map(Constant::Bool).ok_or_else(missing),
        }
    }

    /// Resolve the constant to the JSON value written by a patch.
    ///
    /// # Errors
    ///
    /// See [`ConstantValue::resolve`].
    pub fn value(&self) -> Result<Value, ConstantError> {
        self.resolve().map(Value::from)
    }
}
