//! Value kinds and kind-preserving scalar coercion

use crate::{EditError, Result};
use serde_json::{Number, Value};
use std::fmt;

/// Runtime kind of a document value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Integer,
    Float,
    String,
    Boolean,
    Null,
    Sequence,
    Mapping,
}

impl ValueKind {
    /// Classify a value
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => ValueKind::Null,
            Value::Bool(_) => ValueKind::Boolean,
            Value::Number(n) if n.is_f64() => ValueKind::Float,
            Value::Number(_) => ValueKind::Integer,
            Value::String(_) => ValueKind::String,
            Value::Array(_) => ValueKind::Sequence,
            Value::Object(_) => ValueKind::Mapping,
        }
    }

    /// Kinds `coerce_scalar` can rewrite from text
    pub fn is_scalar_updatable(self) -> bool {
        matches!(self, ValueKind::Integer | ValueKind::Float | ValueKind::String)
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::Integer => "an integer",
            ValueKind::Float => "a float",
            ValueKind::String => "a string",
            ValueKind::Boolean => "a boolean",
            ValueKind::Null => "null",
            ValueKind::Sequence => "a sequence",
            ValueKind::Mapping => "a mapping",
        };
        f.write_str(name)
    }
}

/// Parse `input` as a value of the same kind as `current`.
///
/// Numbers keep their integer/float kind, strings accept the input verbatim,
/// and every other kind is rejected with `UnsupportedType`.
pub fn coerce_scalar(current: &Value, input: &str) -> Result<Value> {
    let kind = ValueKind::of(current);
    let mismatch = || EditError::TypeMismatch {
        expected: kind,
        input: input.to_string(),
    };

    if !kind.is_scalar_updatable() {
        return Err(EditError::UnsupportedType(kind));
    }

    match kind {
        ValueKind::Integer => {
            let trimmed = input.trim();
            if let Ok(n) = trimmed.parse::<i64>() {
                Ok(Value::Number(n.into()))
            } else if let Ok(n) = trimmed.parse::<u64>() {
                Ok(Value::Number(n.into()))
            } else {
                Err(mismatch())
            }
        }
        ValueKind::Float => {
            let parsed: f64 = input.trim().parse().map_err(|_| mismatch())?;
            Number::from_f64(parsed)
                .map(Value::Number)
                .ok_or_else(mismatch)
        }
        _ => Ok(Value::String(input.to_string())),
    }
}
