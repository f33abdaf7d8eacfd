//! # Type Registry
//!
//! One `KindDescriptor` per temporal kind: how to recognize a genuine
//! instance, how to parse one from canonical text, and what to say when
//! either fails. The registry is fixed at compile time and exhaustive; the
//! strict factory and the coercion wrapper read everything they need from
//! it.
//!
//! ## Invariant
//!
//! `REGISTRY[k.index()].kind == k` for every kind `k`. Descriptors are
//! built with [`KindDescriptor::of`], which ties the predicate and the
//! parser to the same Rust type, so a descriptor cannot pair one kind's
//! predicate with another kind's parser.

use std::fmt;

use zt_core::{
    Calendar, Duration, Instant, PlainDate, PlainDateTime, PlainTime, TemporalError,
    TemporalKind, TemporalType, TimeZone, ZonedDateTime, TEMPORAL_KIND_COUNT,
};
use zt_schema::Value;

/// Instance-of check over a dynamic value.
pub type Predicate = fn(&Value) -> bool;

/// Parse canonical text into a dynamic value holding a genuine instance.
pub type ParseFn = fn(&str) -> Result<Value, TemporalError>;

/// Everything the schema factories need to know about one kind.
#[derive(Clone, Copy)]
pub struct KindDescriptor {
    /// The kind described.
    pub kind: TemporalKind,
    /// True iff the value is a genuine instance of `kind`.
    pub predicate: Predicate,
    /// Parse canonical text into an instance of `kind`.
    pub parse: ParseFn,
}

impl KindDescriptor {
    /// The descriptor for Rust type `T`.
    pub const fn of<T: TemporalType>() -> Self {
        Self {
            kind: T::KIND,
            predicate: is_instance::<T>,
            parse: parse_value::<T>,
        }
    }

    /// Message for a value of the wrong type, e.g. `Invalid Temporal.Instant`.
    pub fn default_message(&self) -> String {
        format!("Invalid {}", self.kind.qualified_name())
    }

    /// Message for text that failed to parse, e.g.
    /// `Invalid Temporal.Instant string: not-a-date`.
    pub fn coercion_message(&self, text: &str) -> String {
        format!("Invalid {} string: {text}", self.kind.qualified_name())
    }
}

impl fmt::Debug for KindDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KindDescriptor")
            .field("kind", &self.kind)
            .finish_non_exhaustive()
    }
}

/// Nominal instance check: the value must hold exactly a `T`.
pub fn is_instance<T: TemporalType>(value: &Value) -> bool {
    value.is::<T>()
}

/// Parse `text` as `T` and wrap the instance.
pub fn parse_value<T: TemporalType>(text: &str) -> Result<Value, TemporalError> {
    T::parse_canonical(text).map(Value::opaque)
}

/// Descriptors for all kinds, in [`TemporalKind::ALL`] order.
pub static REGISTRY: [KindDescriptor; TEMPORAL_KIND_COUNT] = [
    KindDescriptor::of::<Instant>(),
    KindDescriptor::of::<PlainDate>(),
    KindDescriptor::of::<PlainTime>(),
    KindDescriptor::of::<PlainDateTime>(),
    KindDescriptor::of::<ZonedDateTime>(),
    KindDescriptor::of::<Duration>(),
    KindDescriptor::of::<TimeZone>(),
    KindDescriptor::of::<Calendar>(),
];

/// The descriptor for `kind`.
pub fn descriptor(kind: TemporalKind) -> &'static KindDescriptor {
    &REGISTRY[kind.index()]
}
