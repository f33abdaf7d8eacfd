//! # The Schema Contract
//!
//! Every validator implements [`Schema`]. The required method is
//! [`Schema::check`]; everything else (parse entry points, absence
//! handling, wrapper constructors) has a default built on it.
//!
//! The trait is object safe so heterogeneous schemas can be stored as
//! [`BoxedSchema`] inside objects. Schemas are `Send + Sync` and hold no
//! mutable state, so one schema may validate from many threads at once.

use std::sync::Arc;

use crate::error::{Issue, IssueCode, PathSegment, ZodError};
use crate::modifiers::{Nullable, Optional};
use crate::value::Value;

/// A type-erased schema.
pub type BoxedSchema = Box<dyn Schema>;

/// A validator over dynamic [`Value`]s.
pub trait Schema: Send + Sync {
    /// Validate `input` found at `path`, returning the output value.
    ///
    /// The output may differ from the input: transforms substitute values
    /// and objects strip unknown keys.
    fn check(&self, input: &Value, path: &[PathSegment]) -> Result<Value, ZodError>;

    /// Validate a possibly absent object field.
    ///
    /// `Ok(None)` means "absent and allowed"; the caller omits the field
    /// from its output.
    fn check_field(
        &self,
        input: Option<&Value>,
        path: &[PathSegment],
    ) -> Result<Option<Value>, ZodError> {
        match input {
            Some(value) => self.check(value, path).map(Some),
            None => Err(ZodError::single(Issue::new(IssueCode::Required, path, "Required"))),
        }
    }

    /// Validate a root value.
    fn parse(&self, input: &Value) -> Result<Value, ZodError> {
        self.check(input, &[])
    }

    /// Validate a root value, reporting the outcome as a [`SafeParseResult`].
    fn safe_parse(&self, input: &Value) -> SafeParseResult {
        self.parse(input).into()
    }

    /// Also accept an absent field.
    fn optional(self) -> Optional<Self>
    where
        Self: Sized,
    {
        Optional::new(self)
    }

    /// Also accept [`Value::Null`].
    fn nullable(self) -> Nullable<Self>
    where
        Self: Sized,
    {
        Nullable::new(self)
    }

    /// Erase the concrete type.
    fn boxed(self) -> BoxedSchema
    where
        Self: Sized + 'static,
    {
        Box::new(self)
    }
}

impl<S: Schema + ?Sized> Schema for Box<S> {
    fn check(&self, input: &Value, path: &[PathSegment]) -> Result<Value, ZodError> {
        (**self).check(input, path)
    }

    fn check_field(
        &self,
        input: Option<&Value>,
        path: &[PathSegment],
    ) -> Result<Option<Value>, ZodError> {
        (**self).check_field(input, path)
    }
}

impl<S: Schema + ?Sized> Schema for Arc<S> {
    fn check(&self, input: &Value, path: &[PathSegment]) -> Result<Value, ZodError> {
        (**self).check(input, path)
    }

    fn check_field(
        &self,
        input: Option<&Value>,
        path: &[PathSegment],
    ) -> Result<Option<Value>, ZodError> {
        (**self).check_field(input, path)
    }
}

/// Outcome of [`Schema::safe_parse`].
#[derive(Debug, Clone, PartialEq)]
pub enum SafeParseResult {
    /// The value was accepted.
    Success(Value),
    /// The value was rejected.
    Failure(ZodError),
}

impl SafeParseResult {
    /// True on success.
    pub fn success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// The accepted value, if any.
    pub fn data(&self) -> Option<&Value> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// The error, if any.
    pub fn error(&self) -> Option<&ZodError> {
        match self {
            Self::Success(_) => None,
            Self::Failure(err) => Some(err),
        }
    }

    /// Convert back into a `Result`.
    pub fn into_result(self) -> Result<Value, ZodError> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(err) => Err(err),
        }
    }
}

impl From<Result<Value, ZodError>> for SafeParseResult {
    fn from(result: Result<Value, ZodError>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(err) => Self::Failure(err),
        }
    }
}
