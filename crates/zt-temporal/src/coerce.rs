//! # Coercing Temporal Schemas
//!
//! A coercing schema puts a text-parsing stage in front of the strict
//! schema of the same kind:
//!
//! 1. Text is parsed with the kind's canonical parser. On success the new
//!    instance goes on to the strict check, which accepts it. On failure
//!    validation stops with a coercion issue; the strict check never runs.
//! 2. Anything else is handed to the strict check untouched, so genuine
//!    instances pass through as the same instance and other values are
//!    rejected with the type-mismatch message.
//!
//! ## Messages
//!
//! When the caller overrides `invalid_type`, that one message is used for
//! both failure modes. Otherwise a parse failure reports
//! `Invalid Temporal.<Kind> string: <input>` and a type mismatch reports
//! `Invalid Temporal.<Kind>`.

use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use zt_core::TemporalType;
use zt_schema::{Custom, PathSegment, Preprocess, Schema, Value, ZodError};

use crate::error::TemporalFailure;
use crate::messages::TemporalErrorMessage;
use crate::registry::{self, KindDescriptor, Predicate};
use crate::strict::make_strict_schema;

/// The text-parsing stage of a coercing schema.
pub type TextCoercion = Arc<dyn Fn(&Value) -> Result<Value, String> + Send + Sync>;

/// Host schema produced by [`make_coercing_schema`].
pub type CoercingInner = Preprocess<TextCoercion, Custom<Predicate>>;

/// Build a coercing schema for the kind `descriptor` describes.
pub fn make_coercing_schema(
    descriptor: &'static KindDescriptor,
    messages: Option<&TemporalErrorMessage>,
) -> CoercingInner {
    let strict = make_strict_schema(descriptor.predicate, &descriptor.default_message(), messages);
    let override_message = messages.and_then(|m| m.invalid_type.clone());

    let transform: TextCoercion = Arc::new(move |input: &Value| match input {
        Value::String(text) => (descriptor.parse)(text).map_err(|err| {
            tracing::debug!(
                kind = %descriptor.kind,
                input = %text,
                error = %err,
                "temporal coercion failed"
            );
            override_message
                .clone()
                .unwrap_or_else(|| descriptor.coercion_message(text))
        }),
        other => Ok(other.clone()),
    });

    zt_schema::preprocess(transform, strict)
}

/// Coercing validator for the kind of `T`.
pub struct CoercingSchema<T> {
    inner: CoercingInner,
    _kind: PhantomData<fn() -> T>,
}

impl<T: TemporalType> CoercingSchema<T> {
    /// Build from the registry descriptor for `T`.
    pub fn new(messages: Option<&TemporalErrorMessage>) -> Self {
        Self {
            inner: make_coercing_schema(registry::descriptor(T::KIND), messages),
            _kind: PhantomData,
        }
    }

    /// The type-mismatch message.
    pub fn message(&self) -> &str {
        self.inner.inner().message()
    }

    /// Validate, coercing text, and return the instance itself.
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

impl<T> Clone for CoercingSchema<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            _kind: PhantomData,
        }
    }
}

impl<T: TemporalType> fmt::Debug for CoercingSchema<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CoercingSchema")
            .field("kind", &T::KIND)
            .field("message", &self.message())
            .finish()
    }
}

impl<T: TemporalType> Schema for CoercingSchema<T> {
    fn check(&self, input: &Value, path: &[PathSegment]) -> Result<Value, ZodError> {
        self.inner.check(input, path)
    }
}
