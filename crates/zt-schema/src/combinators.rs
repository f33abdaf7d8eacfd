//! # Preprocess
//!
//! `Preprocess` runs a transform over the input before handing the result
//! to an inner schema. It is how coercion is expressed: the transform turns
//! text into a typed value, and the inner schema decides whether that value
//! is acceptable.
//!
//! A transform that fails stops validation immediately with an
//! [`IssueCode::Transform`] issue carrying the transform's message. The
//! inner schema never sees the untransformed input.

use std::fmt;

use crate::error::{Issue, IssueCode, PathSegment, ZodError};
use crate::schema::Schema;
use crate::value::Value;

/// A transform stage composed in front of an inner schema.
pub struct Preprocess<F, S> {
    transform: F,
    inner: S,
}

impl<F, S> Preprocess<F, S>
where
    F: Fn(&Value) -> Result<Value, String> + Send + Sync,
    S: Schema,
{
    /// Compose `transform` in front of `inner`.
    pub fn new(transform: F, inner: S) -> Self {
        Self { transform, inner }
    }

    /// The schema that validates transformed values.
    pub fn inner(&self) -> &S {
        &self.inner
    }
}

impl<F: Clone, S: Clone> Clone for Preprocess<F, S> {
    fn clone(&self) -> Self {
        Self {
            transform: self.transform.clone(),
            inner: self.inner.clone(),
        }
    }
}

impl<F, S: fmt::Debug> fmt::Debug for Preprocess<F, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Preprocess")
            .field("inner", &self.inner)
            .finish_non_exhaustive()
    }
}

impl<F, S> Schema for Preprocess<F, S>
where
    F: Fn(&Value) -> Result<Value, String> + Send + Sync,
    S: Schema,
{
    fn check(&self, input: &Value, path: &[PathSegment]) -> Result<Value, ZodError> {
        let transformed = (self.transform)(input)
            .map_err(|message| ZodError::single(Issue::new(IssueCode::Transform, path, message)))?;
        self.inner.check(&transformed, path)
    }
}
