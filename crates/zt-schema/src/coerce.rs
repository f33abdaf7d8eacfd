//! # Coercing Primitives
//!
//! The `coerce` namespace: scalar schemas that first convert their input
//! to the target type and then validate it. Each is a [`Preprocess`] in
//! front of the matching primitive.

use crate::combinators::Preprocess;
use crate::primitives::{ZBoolean, ZNumber, ZString};
use crate::value::Value;

/// Transform signature used by the coercing primitives.
pub type CoerceFn = fn(&Value) -> Result<Value, String>;

/// The `coerce` sub-namespace of [`crate::Zod`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ZodCoerce;

impl ZodCoerce {
    /// Stringify scalars, then require a string.
    pub fn string(&self) -> Preprocess<CoerceFn, ZString> {
        Preprocess::new(to_string as CoerceFn, ZString::new())
    }

    /// Parse numeric text and map booleans to 0/1, then require a number.
    pub fn number(&self) -> Preprocess<CoerceFn, ZNumber> {
        Preprocess::new(to_number as CoerceFn, ZNumber::new())
    }

    /// Apply truthiness, then require a boolean.
    pub fn boolean(&self) -> Preprocess<CoerceFn, ZBoolean> {
        Preprocess::new(to_boolean as CoerceFn, ZBoolean::new())
    }
}

fn to_string(value: &Value) -> Result<Value, String> {
    Ok(match value {
        Value::Null => Value::from("null"),
        Value::Bool(b) => Value::from(b.to_string()),
        Value::Number(n) => Value::from(n.to_string()),
        Value::Opaque(payload) => Value::from(payload.to_string()),
        other => other.clone(),
    })
}

fn to_number(value: &Value) -> Result<Value, String> {
    Ok(match value {
        Value::String(s) if s.trim().is_empty() => Value::Number(0.0),
        Value::String(s) => Value::Number(s.trim().parse::<f64>().unwrap_or(f64::NAN)),
        Value::Bool(b) => Value::Number(if *b { 1.0 } else { 0.0 }),
        Value::Null => Value::Number(0.0),
        other => other.clone(),
    })
}

fn to_boolean(value: &Value) -> Result<Value, String> {
    Ok(Value::Bool(match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => *n != 0.0 && !n.is_nan(),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) | Value::Opaque(_) => true,
    }))
}
