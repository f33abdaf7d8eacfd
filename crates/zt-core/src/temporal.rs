//! # Temporal Value Types
//!
//! Nominal newtypes for the six jiff-backed kinds, and the `TemporalType`
//! trait that every one of the eight kinds implements.
//!
//! ## Invariant
//!
//! Each kind is its own Rust type. A `PlainDate` can never be mistaken for
//! an `Instant` even though both render as ISO 8601 text, because instance
//! checks go through `TypeId`, not through structure. Calendar arithmetic
//! differs per kind, so cross-kind acceptance would corrupt downstream
//! computation.
//!
//! ## Canonical Strings
//!
//! `Display` renders the canonical string and `FromStr` parses it back. For
//! every value `v`, `v.to_string().parse()` yields a value equal to `v`.

use std::fmt;
use std::str::FromStr;

use crate::error::TemporalError;
use crate::kind::TemporalKind;

/// A genuine temporal value of one specific kind.
///
/// The bounds make implementors storable inside a dynamic validation value:
/// they are owned, thread-safe, comparable and printable.
pub trait TemporalType:
    Clone
    + fmt::Debug
    + fmt::Display
    + PartialEq
    + FromStr<Err = TemporalError>
    + Send
    + Sync
    + 'static
{
    /// The kind this type represents.
    const KIND: TemporalKind;

    /// Parse from canonical text. Same as [`FromStr::from_str`].
    fn parse_canonical(text: &str) -> Result<Self, TemporalError> {
        text.parse()
    }

    /// Render canonical text. Same as [`ToString::to_string`].
    fn to_canonical(&self) -> String {
        self.to_string()
    }
}

macro_rules! jiff_newtype {
    ($(#[$meta:meta])* $name:ident($inner:ty) => $kind:ident) => {
        $(#[$meta])*
        pub struct $name($inner);

        impl $name {
            /// Wrap a jiff value.
            pub fn new(inner: $inner) -> Self {
                Self(inner)
            }

            /// Borrow the underlying jiff value.
            pub fn as_jiff(&self) -> &$inner {
                &self.0
            }

            /// Unwrap into the underlying jiff value.
            pub fn into_jiff(self) -> $inner {
                self.0
            }
        }

        impl From<$inner> for $name {
            fn from(inner: $inner) -> Self {
                Self(inner)
            }
        }

        impl FromStr for $name {
            type Err = TemporalError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.parse::<$inner>()
                    .map(Self)
                    .map_err(|e| TemporalError::parse(TemporalKind::$kind, s, e))
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(&self.0, f)
            }
        }

        impl TemporalType for $name {
            const KIND: TemporalKind = TemporalKind::$kind;
        }
    };
}

/// Implements serde for a type by way of its canonical string.
macro_rules! canonical_serde {
    ($($name:ty),+ $(,)?) => {
        $(
            impl serde::Serialize for $name {
                fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                    serializer.collect_str(self)
                }
            }

            impl<'de> serde::Deserialize<'de> for $name {
                fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                    let text = <String as serde::Deserialize>::deserialize(deserializer)?;
                    text.parse().map_err(serde::de::Error::custom)
                }
            }
        )+
    };
}

pub(crate) use canonical_serde;

jiff_newtype! {
    /// An exact point on the time line, e.g. `2024-02-09T12:00:00Z`.
    ///
    /// Parsing requires an offset (`Z` or `±HH:MM`); the canonical form is
    /// always UTC with a `Z` suffix.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
    Instant(jiff::Timestamp) => Instant
}

jiff_newtype! {
    /// A calendar date with no zone, e.g. `2024-02-09`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
    PlainDate(jiff::civil::Date) => PlainDate
}

jiff_newtype! {
    /// A wall-clock time with no zone, e.g. `12:00:00`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
    PlainTime(jiff::civil::Time) => PlainTime
}

jiff_newtype! {
    /// A date and wall-clock time with no zone, e.g. `2024-02-09T12:00:00`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
    PlainDateTime(jiff::civil::DateTime) => PlainDateTime
}

jiff_newtype! {
    /// A date-time bound to a time zone, e.g.
    /// `2024-02-09T12:00:00+01:00[Europe/Paris]`.
    #[derive(Debug, Clone, PartialEq, Eq)]
    ZonedDateTime(jiff::Zoned) => ZonedDateTime
}

impl Instant {
    /// The current instant from the system clock.
    pub fn now() -> Self {
        Self(jiff::Timestamp::now())
    }

    /// Build an instant from whole seconds since the Unix epoch.
    pub fn from_epoch_seconds(secs: i64) -> Result<Self, TemporalError> {
        jiff::Timestamp::from_second(secs)
            .map(Self)
            .map_err(|e| TemporalError::out_of_range(TemporalKind::Instant, e))
    }

    /// Whole seconds since the Unix epoch.
    pub fn epoch_seconds(&self) -> i64 {
        self.0.as_second()
    }
}

impl PlainDate {
    /// Build a date from its ISO year, month and day.
    pub fn from_ymd(year: i16, month: i8, day: i8) -> Result<Self, TemporalError> {
        jiff::civil::Date::new(year, month, day)
            .map(Self)
            .map_err(|e| TemporalError::out_of_range(TemporalKind::PlainDate, e))
    }
}

impl PlainTime {
    /// Build a time from hour, minute and second.
    pub fn from_hms(hour: i8, minute: i8, second: i8) -> Result<Self, TemporalError> {
        jiff::civil::Time::new(hour, minute, second, 0)
            .map(Self)
            .map_err(|e| TemporalError::out_of_range(TemporalKind::PlainTime, e))
    }
}

impl PlainDateTime {
    /// Combine a date and a time.
    pub fn from_parts(date: PlainDate, time: PlainTime) -> Self {
        Self(date.0.to_datetime(time.0))
    }
}

impl ZonedDateTime {
    /// The instant this zoned value refers to.
    pub fn to_instant(&self) -> Instant {
        Instant(self.0.timestamp())
    }

    /// The wall-clock date-time in this value's zone.
    pub fn to_plain_date_time(&self) -> PlainDateTime {
        PlainDateTime(self.0.datetime())
    }
}

/// A length of time in calendar and clock units, e.g. `P1Y2M3DT4H5M6S`.
///
/// Equality is field-wise: `PT60M` and `PT1H` are different durations even
/// though they span the same amount of clock time.
#[derive(Debug, Clone, Copy)]
pub struct Duration(jiff::Span);

impl Duration {
    /// Wrap a jiff span.
    pub fn new(span: jiff::Span) -> Self {
        Self(span)
    }

    /// Borrow the underlying jiff span.
    pub fn as_jiff(&self) -> &jiff::Span {
        &self.0
    }

    /// Unwrap into the underlying jiff span.
    pub fn into_jiff(self) -> jiff::Span {
        self.0
    }

    /// True when every unit is zero.
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl From<jiff::Span> for Duration {
    fn from(span: jiff::Span) -> Self {
        Self(span)
    }
}

impl PartialEq for Duration {
    fn eq(&self, other: &Self) -> bool {
        self.0.fieldwise() == other.0.fieldwise()
    }
}

impl Eq for Duration {}

impl FromStr for Duration {
    type Err = TemporalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // The friendly format ("1 hour") is jiff-specific; only ISO 8601
        // durations are canonical.
        let trimmed = s.strip_prefix(&['+', '-'][..]).unwrap_or(s);
        if !trimmed.starts_with(&['P', 'p'][..]) {
            return Err(TemporalError::parse(
                TemporalKind::Duration,
                s,
                "expected an ISO 8601 duration starting with 'P'",
            ));
        }
        s.parse::<jiff::Span>()
            .map(Self)
            .map_err(|e| TemporalError::parse(TemporalKind::Duration, s, e))
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let printer = jiff::fmt::temporal::SpanPrinter::new();
        f.write_str(&printer.span_to_string(&self.0))
    }
}

impl TemporalType for Duration {
    const KIND: TemporalKind = TemporalKind::Duration;
}

canonical_serde!(Instant, PlainDate, PlainTime, PlainDateTime, ZonedDateTime, Duration);
