//! # Instance Extension
//!
//! [`with_temporal`] takes a host validation namespace and returns a new
//! [`TemporalZod`] that exposes the eight strict constructors as methods
//! and carries a `coerce` member exposing the eight coercing ones.
//!
//! ## Delegation
//!
//! `TemporalZod<H>` derefs to `H`, so every host constructor stays
//! reachable (`tz.string()`, `tz.object()`). Its own `coerce` field shadows
//! the host's: `tz.coerce` is a [`TemporalCoerce`] that in turn derefs to
//! the host's coerce namespace, so `tz.coerce.number()` still works next to
//! `tz.coerce.temporal_instant(None)`.
//!
//! ## Non-mutation
//!
//! The host is taken by shared reference and copied into the augmented
//! instance. Nothing is added to or changed on the original; it remains
//! usable, and equal to what it was, after the call.
//!
//! A host without a coerce namespace uses [`EmptyCoerce`], and its
//! augmented `coerce` member carries only the temporal constructors.

use std::fmt;
use std::ops::Deref;

use zt_core::{
    Calendar, Duration, Instant, PlainDate, PlainDateTime, PlainTime, TemporalKind, TimeZone,
    ZonedDateTime,
};
use zt_schema::{Zod, ZodCoerce};

use crate::catalog::{self, SchemaConstructor};
use crate::coerce::CoercingSchema;
use crate::messages::TemporalErrorMessage;
use crate::strict::StrictSchema;

/// A schema-builder namespace that can be extended.
pub trait ValidationHost {
    /// The host's coercing sub-namespace.
    type Coerce: Clone;

    /// A copy of the coercing sub-namespace.
    fn coerce_namespace(&self) -> Self::Coerce;
}

impl ValidationHost for Zod {
    type Coerce = ZodCoerce;

    fn coerce_namespace(&self) -> ZodCoerce {
        self.coerce
    }
}

/// Coerce namespace for hosts that have none.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmptyCoerce;

/// A host namespace augmented with the strict temporal constructors.
pub struct TemporalZod<H: ValidationHost> {
    host: H,
    /// Coercing constructors, delegating to the host's coerce namespace.
    pub coerce: TemporalCoerce<H::Coerce>,
}

/// A coerce namespace augmented with the coercing temporal constructors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TemporalCoerce<C> {
    base: C,
}

/// Augment `host` with the temporal constructors.
pub fn with_temporal<H>(host: &H) -> TemporalZod<H>
where
    H: ValidationHost + Clone,
{
    tracing::trace!(
        host = std::any::type_name::<H>(),
        "building temporal-augmented instance"
    );
    TemporalZod {
        coerce: TemporalCoerce {
            base: host.coerce_namespace(),
        },
        host: host.clone(),
    }
}

impl<H: ValidationHost> TemporalZod<H> {
    /// The host this instance delegates to.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Drop the augmentation and return the host.
    pub fn into_host(self) -> H {
        self.host
    }

    /// Look up a strict constructor by member name, e.g. `temporalInstant`.
    pub fn resolve(&self, name: &str) -> Option<SchemaConstructor> {
        let kind = TemporalKind::from_member_name(name);
        tracing::trace!(member = name, found = kind.is_some(), "resolving temporal member");
        kind.map(catalog::strict_constructor)
    }

    /// Names of the members this instance adds over its host.
    pub fn member_names(&self) -> impl Iterator<Item = &'static str> {
        TemporalKind::ALL.into_iter().map(TemporalKind::member_name)
    }
}

impl<C> TemporalCoerce<C> {
    /// The host coerce namespace this one delegates to.
    pub fn base(&self) -> &C {
        &self.base
    }

    /// Look up a coercing constructor by member name, e.g. `temporalInstant`.
    pub fn resolve(&self, name: &str) -> Option<SchemaConstructor> {
        let kind = TemporalKind::from_member_name(name);
        tracing::trace!(
            member = name,
            found = kind.is_some(),
            "resolving coercing temporal member"
        );
        kind.map(catalog::coercing_constructor)
    }

    /// Names of the members this namespace adds over its base.
    pub fn member_names(&self) -> impl Iterator<Item = &'static str> {
        TemporalKind::ALL.into_iter().map(TemporalKind::member_name)
    }
}

macro_rules! namespace_methods {
    ($($ty:ident => $method:ident, $strict:ident, $coerced:ident;)*) => {
        impl<H: ValidationHost> TemporalZod<H> {
            $(
                #[doc = concat!("Strict `", stringify!($ty), "` validator.")]
                pub fn $method(&self, messages: Option<TemporalErrorMessage>) -> StrictSchema<$ty> {
                    catalog::$strict(messages)
                }
            )*
        }

        impl<C> TemporalCoerce<C> {
            $(
                #[doc = concat!("Coercing `", stringify!($ty), "` validator.")]
                pub fn $method(&self, messages: Option<TemporalErrorMessage>) -> CoercingSchema<$ty> {
                    catalog::$coerced(messages)
                }
            )*
        }
    };
}

namespace_methods! {
    Instant => temporal_instant, temporal_instant, coerced_temporal_instant;
    PlainDate => temporal_plain_date, temporal_plain_date, coerced_temporal_plain_date;
    PlainTime => temporal_plain_time, temporal_plain_time, coerced_temporal_plain_time;
    PlainDateTime => temporal_plain_date_time, temporal_plain_date_time, coerced_temporal_plain_date_time;
    ZonedDateTime => temporal_zoned_date_time, temporal_zoned_date_time, coerced_temporal_zoned_date_time;
    Duration => temporal_duration, temporal_duration, coerced_temporal_duration;
    TimeZone => temporal_time_zone, temporal_time_zone, coerced_temporal_time_zone;
    Calendar => temporal_calendar, temporal_calendar, coerced_temporal_calendar;
}

impl<H: ValidationHost> Deref for TemporalZod<H> {
    type Target = H;

    fn deref(&self) -> &H {
        &self.host
    }
}

impl<C> Deref for TemporalCoerce<C> {
    type Target = C;

    fn deref(&self) -> &C {
        &self.base
    }
}

impl<H> Clone for TemporalZod<H>
where
    H: ValidationHost + Clone,
{
    fn clone(&self) -> Self {
        Self {
            host: self.host.clone(),
            coerce: self.coerce.clone(),
        }
    }
}

impl<H> fmt::Debug for TemporalZod<H>
where
    H: ValidationHost + fmt::Debug,
    H::Coerce: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TemporalZod")
            .field("host", &self.host)
            .field("coerce", &self.coerce)
            .finish()
    }
}
