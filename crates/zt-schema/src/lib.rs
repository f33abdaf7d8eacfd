//! # zt-schema: Host Validation Contract
//!
//! A small Zod-style validation library over dynamic [`Value`]s. Schemas
//! are plain values implementing [`Schema`]; they compose by wrapping
//! (`optional`, `nullable`, `object`, `preprocess`) and validate through
//! the `parse`/`safe_parse` entry points.
//!
//! This crate knows nothing about temporal values. Extensions add their
//! own leaf validators through two primitives:
//!
//! - [`custom`] turns a predicate and a message into a schema.
//! - [`preprocess`] runs a transform before delegating to an inner schema.
//!
//! ## The `Zod` Namespace
//!
//! [`Zod`] groups every constructor as a method, with a public `coerce`
//! member holding the coercing variants. It is a zero-sized `Copy` value:
//! extensions wrap it rather than modify it.
//!
//! ```
//! use zt_schema::{Schema, Value, Zod};
//!
//! let z = Zod::new();
//! let schema = z.object()
//!     .field("name", z.string())
//!     .field("age", z.coerce.number().optional());
//! let out = schema.parse(&Value::from(serde_json::json!({"name": "x", "age": "7"}))).unwrap();
//! assert_eq!(out.get("age"), Some(&Value::Number(7.0)));
//! ```

pub mod coerce;
pub mod combinators;
pub mod error;
pub mod modifiers;
pub mod object;
pub mod primitives;
pub mod schema;
pub mod value;

pub use coerce::ZodCoerce;
pub use combinators::Preprocess;
pub use error::{Issue, IssueCode, PathSegment, ZodError};
pub use modifiers::{Nullable, Optional};
pub use object::{UnknownKeys, ZObject};
pub use primitives::{Custom, ZAny, ZBoolean, ZNumber, ZString};
pub use schema::{BoxedSchema, SafeParseResult, Schema};
pub use value::{OpaqueValue, Value};

/// Create a string schema.
pub fn string() -> ZString {
    ZString::new()
}

/// Create a number schema.
pub fn number() -> ZNumber {
    ZNumber::new()
}

/// Create a boolean schema.
pub fn boolean() -> ZBoolean {
    ZBoolean::new()
}

/// Create a schema that accepts anything.
pub fn any() -> ZAny {
    ZAny::new()
}

/// Create an object schema.
pub fn object() -> ZObject {
    ZObject::new()
}

/// Create a schema from a predicate and a rejection message.
pub fn custom<F>(check: F, message: impl Into<String>) -> Custom<F>
where
    F: Fn(&Value) -> bool + Send + Sync,
{
    Custom::new(check, message)
}

/// Run `transform` on the input before validating it with `schema`.
pub fn preprocess<F, S>(transform: F, schema: S) -> Preprocess<F, S>
where
    F: Fn(&Value) -> Result<Value, String> + Send + Sync,
    S: Schema,
{
    Preprocess::new(transform, schema)
}

/// The schema-builder namespace.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Zod {
    /// Coercing constructors.
    pub coerce: ZodCoerce,
}

impl Zod {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn string(&self) -> ZString {
        string()
    }

    pub fn number(&self) -> ZNumber {
        number()
    }

    pub fn boolean(&self) -> ZBoolean {
        boolean()
    }

    pub fn any(&self) -> ZAny {
        any()
    }

    pub fn object(&self) -> ZObject {
        object()
    }

    pub fn custom<F>(&self, check: F, message: impl Into<String>) -> Custom<F>
    where
        F: Fn(&Value) -> bool + Send + Sync,
    {
        custom(check, message)
    }

    pub fn preprocess<F, S>(&self, transform: F, schema: S) -> Preprocess<F, S>
    where
        F: Fn(&Value) -> Result<Value, String> + Send + Sync,
        S: Schema,
    {
        preprocess(transform, schema)
    }
}
