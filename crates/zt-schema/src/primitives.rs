//! # Primitive Schemas
//!
//! Leaf schemas for the JSON scalar types, the accept-anything schema, and
//! `Custom`, the schema-from-predicate primitive that extensions build
//! their own leaf validators on.

use std::fmt;

use crate::error::{Issue, IssueCode, PathSegment, ZodError};
use crate::schema::Schema;
use crate::value::Value;

fn invalid_type(expected: &str, input: &Value, path: &[PathSegment]) -> ZodError {
    ZodError::single(Issue::new(
        IssueCode::InvalidType,
        path,
        format!("Expected {expected}, received {}", input.type_name()),
    ))
}

/// Accepts strings.
#[derive(Debug, Clone, Default)]
pub struct ZString;

impl ZString {
    pub fn new() -> Self {
        Self
    }
}

impl Schema for ZString {
    fn check(&self, input: &Value, path: &[PathSegment]) -> Result<Value, ZodError> {
        match input {
            Value::String(_) => Ok(input.clone()),
            other => Err(invalid_type("string", other, path)),
        }
    }
}

/// Accepts finite numbers.
#[derive(Debug, Clone, Default)]
pub struct ZNumber;

impl ZNumber {
    pub fn new() -> Self {
        Self
    }
}

impl Schema for ZNumber {
    fn check(&self, input: &Value, path: &[PathSegment]) -> Result<Value, ZodError> {
        match input {
            Value::Number(n) if n.is_finite() => Ok(input.clone()),
            other => Err(invalid_type("number", other, path)),
        }
    }
}

/// Accepts booleans.
#[derive(Debug, Clone, Default)]
pub struct ZBoolean;

impl ZBoolean {
    pub fn new() -> Self {
        Self
    }
}

impl Schema for ZBoolean {
    fn check(&self, input: &Value, path: &[PathSegment]) -> Result<Value, ZodError> {
        match input {
            Value::Bool(_) => Ok(input.clone()),
            other => Err(invalid_type("boolean", other, path)),
        }
    }
}

/// Accepts every value unchanged.
#[derive(Debug, Clone, Default)]
pub struct ZAny;

impl ZAny {
    pub fn new() -> Self {
        Self
    }
}

impl Schema for ZAny {
    fn check(&self, input: &Value, _path: &[PathSegment]) -> Result<Value, ZodError> {
        Ok(input.clone())
    }
}

/// A schema defined by a predicate and the message to report when the
/// predicate is false.
///
/// Accepted values pass through unchanged; for opaque values that means the
/// output is the very same instance.
pub struct Custom<F> {
    check: F,
    message: String,
}

impl<F> Custom<F>
where
    F: Fn(&Value) -> bool + Send + Sync,
{
    /// Build from a predicate and a rejection message.
    pub fn new(check: F, message: impl Into<String>) -> Self {
        Self {
            check,
            message: message.into(),
        }
    }

    /// The message reported on rejection.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl<F> fmt::Debug for Custom<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Custom")
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}

impl<F: Clone> Clone for Custom<F> {
    fn clone(&self) -> Self {
        Self {
            check: self.check.clone(),
            message: self.message.clone(),
        }
    }
}

impl<F> Schema for Custom<F>
where
    F: Fn(&Value) -> bool + Send + Sync,
{
    fn check(&self, input: &Value, path: &[PathSegment]) -> Result<Value, ZodError> {
        if (self.check)(input) {
            Ok(input.clone())
        } else {
            Err(ZodError::single(Issue::new(IssueCode::Custom, path, self.message.clone())))
        }
    }
}
