//! Integer arithmetic transform.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::value::ValueKind;

use super::{Resolve, TransformError};

/// Multiplies an integer input.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct MathTransform {
    /// Factor applied to the input.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub multiply: Option<i64>,
}

impl MathTransform {
    /// A transform multiplying by `factor`.
    #[must_use]
    pub const fn multiply(factor: i64) -> Self {
        Self {
            multiply: Some(factor),
        }
    }
}

impl Resolve for MathTransform {
    /// Multiply an integer input, producing a 64-bit integer.
    ///
    /// Floats, strings and every other non-integer kind are rejected.
    fn resolve(&self, input: &Value) -> Result<Value, TransformError> {
        let multiplier = self.multiply.ok_or(TransformError::MathNoMultiplier)?;
        let Value::Number(number) = input else {
            return Err(TransformError::MathInputNotNumber {
                kind: ValueKind::of(input),
            });
        };
        if !number.is_i64() && !number.is_u64() {
            return Err(TransformError::MathInputNotNumber {
                kind: ValueKind::Float,
            });
        }
        number
            .as_i64()
            .and_then(|n| n.checked_mul(multiplier))
            .map(Value::from)
            .ok_or_else(|| TransformError::MathOverflow {
                input: number.to_string(),
                multiplier,
            })
    }
}
