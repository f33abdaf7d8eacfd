//! # Optional and Nullable
//!
//! Wrappers that widen an inner schema's acceptance: `Optional` accepts an
//! absent object field, `Nullable` accepts `Null`. Everything else is
//! delegated unchanged, so wrapping never alters the inner schema's
//! messages.

use crate::error::{PathSegment, ZodError};
use crate::schema::Schema;
use crate::value::Value;

/// Accepts an absent field in addition to whatever the inner schema accepts.
#[derive(Debug, Clone)]
pub struct Optional<S> {
    inner: S,
}

impl<S: Schema> Optional<S> {
    /// Wrap `inner`.
    pub fn new(inner: S) -> Self {
        Self { inner }
    }

    /// The wrapped schema.
    pub fn unwrap_inner(self) -> S {
        self.inner
    }
}

impl<S: Schema> Schema for Optional<S> {
    fn check(&self, input: &Value, path: &[PathSegment]) -> Result<Value, ZodError> {
        self.inner.check(input, path)
    }

    fn check_field(
        &self,
        input: Option<&Value>,
        path: &[PathSegment],
    ) -> Result<Option<Value>, ZodError> {
        match input {
            Some(value) => self.inner.check(value, path).map(Some),
            None => Ok(None),
        }
    }
}

/// Accepts [`Value::Null`] in addition to whatever the inner schema accepts.
#[derive(Debug, Clone)]
pub struct Nullable<S> {
    inner: S,
}

impl<S: Schema> Nullable<S> {
    /// Wrap `inner`.
    pub fn new(inner: S) -> Self {
        Self { inner }
    }

    /// The wrapped schema.
    pub fn unwrap_inner(self) -> S {
        self.inner
    }
}

impl<S: Schema> Schema for Nullable<S> {
    fn check(&self, input: &Value, path: &[PathSegment]) -> Result<Value, ZodError> {
        if input.is_null() {
            return Ok(Value::Null);
        }
        self.inner.check(input, path)
    }

    /// Absence is the inner schema's call, so `optional().nullable()`
    /// accepts a missing field just like `nullable().optional()`.
    fn check_field(
        &self,
        input: Option<&Value>,
        path: &[PathSegment],
    ) -> Result<Option<Value>, ZodError> {
        match input {
            Some(value) => self.check(value, path).map(Some),
            None => self.inner.check_field(None, path),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::ZString;

    #[test]
    fn test_optional_accepts_absent() {
        let schema = ZString::new().optional();
        assert_eq!(schema.check_field(None, &[]).unwrap(), None);
        assert!(schema.parse(&Value::Null).is_err());
    }

    #[test]
    fn test_nullable_accepts_null_only() {
        let schema = ZString::new().nullable();
        assert_eq!(schema.parse(&Value::Null).unwrap(), Value::Null);
        assert!(schema.check_field(None, &[]).is_err());
        assert!(schema.parse(&Value::Bool(true)).is_err());
    }

    #[test]
    fn test_optional_nullable_compose() {
        let schema = ZString::new().nullable().optional();
        assert_eq!(schema.check_field(None, &[]).unwrap(), None);
        assert_eq!(schema.parse(&Value::Null).unwrap(), Value::Null);
        assert_eq!(schema.parse(&Value::from("x")).unwrap(), Value::from("x"));
    }

    #[test]
    fn test_nullable_optional_accepts_absent_in_either_order() {
        let schema = ZString::new().optional().nullable();
        assert_eq!(schema.check_field(None, &[]).unwrap(), None);
        assert_eq!(
            schema.check_field(Some(&Value::Null), &[]).unwrap(),
            Some(Value::Null)
        );
        assert!(schema.check_field(Some(&Value::Bool(true)), &[]).is_err());
    }

    #[test]
    fn test_nullable_absent_still_required_without_optional() {
        let err = ZString::new().nullable().check_field(None, &[]).unwrap_err();
        assert_eq!(err.issues()[0].code, crate::error::IssueCode::Required);
    }
}
