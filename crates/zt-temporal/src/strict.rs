//! # Strict Temporal Schemas
//!
//! A strict schema accepts exactly the genuine instances of one kind and
//! returns them unchanged (the output is the same shared instance as the
//! input). Everything else, including perfectly valid canonical text, is
//! rejected with a single custom issue.
//!
//! [`make_strict_schema`] is the general factory: it binds a predicate and a
//! message into a host [`Custom`] schema. [`StrictSchema`] is the typed
//! wrapper the catalog hands out; it remembers the Rust type so callers can
//! get the instance back with [`StrictSchema::parse_typed`].

use std::fmt;
use std::marker::PhantomData;

use zt_core::TemporalType;
use zt_schema::{Custom, PathSegment, Schema, Value, ZodError};

use crate::error::TemporalFailure;
use crate::messages::{resolve_message, TemporalErrorMessage};
use crate::registry::{self, Predicate};

/// Build a schema that accepts values satisfying `predicate`.
///
/// The rejection message is the override's `invalid_type` when one is
/// given, otherwise `default_message`.
pub fn make_strict_schema(
    predicate: Predicate,
    default_message: &str,
    messages: Option<&TemporalErrorMessage>,
) -> Custom<Predicate> {
    let message = resolve_message(messages, default_message.to_owned());
    zt_schema::custom(predicate, message)
}

/// Strict validator for the kind of `T`.
pub struct StrictSchema<T> {
    inner: Custom<Predicate>,
    _kind: PhantomData<fn() -> T>,
}

impl<T: TemporalType> StrictSchema<T> {
    /// Build with the registry's predicate and default message for `T`.
    pub fn new(messages: Option<&TemporalErrorMessage>) -> Self {
        let descriptor = registry::descriptor(T::KIND);
        Self {
            inner: make_strict_schema(
                descriptor.predicate,
                &descriptor.default_message(),
                messages,
            ),
            _kind: PhantomData,
        }
    }

    /// The message reported on rejection.
    pub fn message(&self) -> &str {
        self.inner.message()
    }

    /// Validate and return the instance itself.
    pub fn parse_typed(&self, input: &Value) -> Result<T, TemporalFailure> {
        let output = self
            .parse(input)
            .map_err(|err| TemporalFailure::from_zod(T::KIND, &err))?;
        output
            .downcast_ref::<T>()
            .cloned()
            .ok_or_else(|| TemporalFailure::TypeMismatch {
                kind: T::KIND,
                message: self.message().to_owned(),
            })
    }
}

impl<T> Clone for StrictSchema<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            _kind: PhantomData,
        }
    }
}

impl<T: TemporalType> fmt::Debug for StrictSchema<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StrictSchema")
            .field("kind", &T::KIND)
            .field("message", &self.message())
            .finish()
    }
}

impl<T: TemporalType> Schema for StrictSchema<T> {
    fn check(&self, input: &Value, path: &[PathSegment]) -> Result<Value, ZodError> {
        self.inner.check(input, path)
    }
}
