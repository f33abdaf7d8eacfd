//! # Schema Catalog
//!
//! Sixteen named constructors: a strict and a coercing validator for each
//! of the eight temporal kinds. Each call builds a fresh, independent
//! validator; an override passed to one call affects only that validator.
//!
//! The generic forms [`strict`] and [`coerced`] are what the named
//! constructors delegate to. [`strict_constructor`] and
//! [`coercing_constructor`] select a constructor by [`TemporalKind`] at
//! runtime and return a type-erased schema.

use zt_core::{
    Calendar, Duration, Instant, PlainDate, PlainDateTime, PlainTime, TemporalKind,
    TemporalType, TimeZone, ZonedDateTime,
};
use zt_schema::{BoxedSchema, Schema};

use crate::coerce::CoercingSchema;
use crate::messages::TemporalErrorMessage;
use crate::strict::StrictSchema;

/// A catalog constructor with its schema type erased.
pub type SchemaConstructor = fn(Option<TemporalErrorMessage>) -> BoxedSchema;

/// Strict validator for `T`.
pub fn strict<T: TemporalType>(messages: Option<TemporalErrorMessage>) -> StrictSchema<T> {
    StrictSchema::new(messages.as_ref())
}

/// Coercing validator for `T`.
pub fn coerced<T: TemporalType>(messages: Option<TemporalErrorMessage>) -> CoercingSchema<T> {
    CoercingSchema::new(messages.as_ref())
}

macro_rules! catalog_entries {
    ($($ty:ident => $strict:ident, $coerced:ident;)*) => {
        $(
            #[doc = concat!("Accepts only genuine `", stringify!($ty), "` instances.")]
            pub fn $strict(messages: Option<TemporalErrorMessage>) -> StrictSchema<$ty> {
                strict(messages)
            }

            #[doc = concat!("Accepts `", stringify!($ty), "` instances or their canonical text.")]
            pub fn $coerced(messages: Option<TemporalErrorMessage>) -> CoercingSchema<$ty> {
                coerced(messages)
            }
        )*

        /// The strict constructor for `kind`.
        pub fn strict_constructor(kind: TemporalKind) -> SchemaConstructor {
            match kind {
                $(TemporalKind::$ty => |messages| $strict(messages).boxed(),)*
            }
        }

        /// The coercing constructor for `kind`.
        pub fn coercing_constructor(kind: TemporalKind) -> SchemaConstructor {
            match kind {
                $(TemporalKind::$ty => |messages| $coerced(messages).boxed(),)*
            }
        }
    };
}

catalog_entries! {
    Instant => temporal_instant, coerced_temporal_instant;
    PlainDate => temporal_plain_date, coerced_temporal_plain_date;
    PlainTime => temporal_plain_time, coerced_temporal_plain_time;
    PlainDateTime => temporal_plain_date_time, coerced_temporal_plain_date_time;
    ZonedDateTime => temporal_zoned_date_time, coerced_temporal_zoned_date_time;
    Duration => temporal_duration, coerced_temporal_duration;
    TimeZone => temporal_time_zone, coerced_temporal_time_zone;
    Calendar => temporal_calendar, coerced_temporal_calendar;
}
