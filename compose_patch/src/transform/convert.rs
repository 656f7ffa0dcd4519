//! Scalar type conversion transform.

use std::fmt::Display;

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

use crate::value::ValueKind;

use super::{Resolve, TransformError};

// Bounds of the i64 range as f64; the upper bound itself is out of range.
const I64_LOWER: f64 = -9_223_372_036_854_775_808.0;
const I64_UPPER: f64 = 9_223_372_036_854_775_808.0;

/// Converts a scalar input to another scalar type.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct ConvertTransform {
    /// Target type: `string`, `int`, `bool` or `float64` (`float`).
    #[serde(rename = "toType")]
    pub to_type: String,
}

impl ConvertTransform {
    /// A transform converting to `to_type`.
    #[must_use]
    pub fn new(to_type: impl Into<String>) -> Self {
        Self {
            to_type: to_type.into(),
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Target {
    String,
    Int,
    Bool,
    Float,
}

impl Target {
    fn parse(name: &str) -> Option<Self> {
        match name {
            "string" => Some(Self::String),
            "int" => Some(Self::Int),
            "bool" => Some(Self::Bool),
            "float64" | "float" => Some(Self::Float),
            _ => None,
        }
    }

    const fn as_str(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Int => "int",
            Self::Bool => "bool",
            Self::Float => "float64",
        }
    }
}

impl Resolve for ConvertTransform {
    fn resolve(&self, input: &Value) -> Result<Value, TransformError> {
        let from = ValueKind::of(input);
        if !from.is_scalar() {
            return Err(TransformError::ConvertInputTypeNotSupported { kind: from });
        }
        let unsupported = || TransformError::ConversionPairNotSupported {
            from,
            to: self.to_type.clone(),
        };
        let target = Target::parse(&self.to_type).ok_or_else(unsupported)?;

        match (input, target) {
            (Value::String(_), Target::String) | (Value::Bool(_), Target::Bool) => {
                Ok(input.clone())
            }
            (Value::String(s), Target::Int) => s
                .parse::<i64>()
                .map(Value::from)
                .map_err(|e| failed(from, s, target, e)),
            (Value::String(s), Target::Bool) => parse_bool(s)
                .map(Value::Bool)
                .ok_or_else(|| failed(from, s, target, "invalid syntax")),
            (Value::String(s), Target::Float) => {
                let parsed = s.parse::<f64>().map_err(|e| failed(from, s, target, e))?;
                finite(parsed).ok_or_else(|| failed(from, s, target, "not a finite number"))
            }
            (Value::Bool(b), Target::String) => Ok(Value::String(b.to_string())),
            (Value::Bool(b), Target::Int) => Ok(Value::from(i64::from(*b))),
            (Value::Number(n), Target::String) => Ok(Value::String(n.to_string())),
            (Value::Number(n), _) if from == ValueKind::Int => convert_int(n, target),
            (Value::Number(n), Target::Float) => Ok(Value::Number(n.clone())),
            (Value::Number(n), Target::Int) => float_to_int(n),
            _ => Err(unsupported()),
        }
    }
}

fn convert_int(n: &Number, target: Target) -> Result<Value, TransformError> {
    let int = n
        .as_i64()
        .ok_or_else(|| failed(ValueKind::Int, n, target, "out of range for int64"))?;
    match target {
        Target::Int => Ok(Value::from(int)),
        Target::Bool => match int {
            0 => Ok(Value::Bool(false)),
            1 => Ok(Value::Bool(true)),
            _ => Err(failed(ValueKind::Int, n, target, "only 0 and 1 convert to bool")),
        },
        Target::Float => Ok(int_to_float(int)),
        Target::String => Ok(Value::String(int.to_string())),
    }
}

#[expect(
    clippy::cast_precision_loss,
    reason = "integers beyond 2^53 round to the nearest representable float"
)]
fn int_to_float(int: i64) -> Value {
    Value::from(int as f64)
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "the value is truncated and range-checked before the cast"
)]
fn float_to_int(n: &Number) -> Result<Value, TransformError> {
    let float = n.as_f64().unwrap_or(f64::NAN).trunc();
    if float.is_finite() && float >= I64_LOWER && float < I64_UPPER {
        Ok(Value::from(float as i64))
    } else {
        Err(failed(ValueKind::Float, n, Target::Int, "out of range for int64"))
    }
}

fn finite(float: f64) -> Option<Value> {
    Number::from_f64(float).map(Value::Number)
}

fn parse_bool(input: &str) -> Option<bool> {
    match input {
        "1" | "t" | "T" | "true" | "TRUE" | "True" => Some(true),
        "0" | "f" | "F" | "false" | "FALSE" | "False" => Some(false),
        _ => None,
    }
}

fn failed(
    from: ValueKind,
    input: impl Display,
    target: Target,
    reason: impl Display,
) -> TransformError {
    TransformError::ConversionFailed {
        from,
        input: input.to_string(),
        to: target.as_str(),
        reason: reason.to_string(),
    }
}
