//! # Temporal Kinds: The Closed Set of Eight
//!
//! Defines `TemporalKind`, the one enumeration of temporal value categories
//! used across the workspace. Every `match` on it is exhaustive, so adding a
//! kind forces the registry, the catalog and the extension to handle it at
//! compile time.
//!
//! ## Naming
//!
//! Each kind has three spellings:
//!
//! | Kind | `name()` | `qualified_name()` | `member_name()` |
//! |------|----------|--------------------|-----------------|
//! | Instant | `Instant` | `Temporal.Instant` | `temporalInstant` |
//! | PlainDate | `PlainDate` | `Temporal.PlainDate` | `temporalPlainDate` |
//! | PlainTime | `PlainTime` | `Temporal.PlainTime` | `temporalPlainTime` |
//! | PlainDateTime | `PlainDateTime` | `Temporal.PlainDateTime` | `temporalPlainDateTime` |
//! | ZonedDateTime | `ZonedDateTime` | `Temporal.ZonedDateTime` | `temporalZonedDateTime` |
//! | Duration | `Duration` | `Temporal.Duration` | `temporalDuration` |
//! | TimeZone | `TimeZone` | `Temporal.TimeZone` | `temporalTimeZone` |
//! | Calendar | `Calendar` | `Temporal.Calendar` | `temporalCalendar` |
//!
//! The qualified name is what error messages display.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::TemporalError;

/// Number of temporal kinds. Used by registries sized at compile time.
pub const TEMPORAL_KIND_COUNT: usize = 8;

/// The eight temporal value categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemporalKind {
    /// An exact point on the time line, independent of any zone.
    Instant,
    /// A calendar date with no time and no zone.
    PlainDate,
    /// A wall-clock time with no date and no zone.
    PlainTime,
    /// A calendar date and wall-clock time with no zone.
    PlainDateTime,
    /// A date and time anchored to a specific time zone.
    ZonedDateTime,
    /// A length of time expressed in calendar and clock units.
    Duration,
    /// A time zone identifier (IANA name or fixed offset).
    TimeZone,
    /// A calendar system identifier.
    Calendar,
}

impl TemporalKind {
    /// All kinds in registry order.
    pub const ALL: [TemporalKind; TEMPORAL_KIND_COUNT] = [
        Self::Instant,
        Self::PlainDate,
        Self::PlainTime,
        Self::PlainDateTime,
        Self::ZonedDateTime,
        Self::Duration,
        Self::TimeZone,
        Self::Calendar,
    ];

    /// Position of this kind in [`TemporalKind::ALL`].
    pub const fn index(self) -> usize {
        match self {
            Self::Instant => 0,
            Self::PlainDate => 1,
            Self::PlainTime => 2,
            Self::PlainDateTime => 3,
            Self::ZonedDateTime => 4,
            Self::Duration => 5,
            Self::TimeZone => 6,
            Self::Calendar => 7,
        }
    }

    /// Bare type name, e.g. `"PlainDate"`.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Instant => "Instant",
            Self::PlainDate => "PlainDate",
            Self::PlainTime => "PlainTime",
            Self::PlainDateTime => "PlainDateTime",
            Self::ZonedDateTime => "ZonedDateTime",
            Self::Duration => "Duration",
            Self::TimeZone => "TimeZone",
            Self::Calendar => "Calendar",
        }
    }

    /// Namespaced type name used in messages, e.g. `"Temporal.PlainDate"`.
    pub const fn qualified_name(self) -> &'static str {
        match self {
            Self::Instant => "Temporal.Instant",
            Self::PlainDate => "Temporal.PlainDate",
            Self::PlainTime => "Temporal.PlainTime",
            Self::PlainDateTime => "Temporal.PlainDateTime",
            Self::ZonedDateTime => "Temporal.ZonedDateTime",
            Self::Duration => "Temporal.Duration",
            Self::TimeZone => "Temporal.TimeZone",
            Self::Calendar => "Temporal.Calendar",
        }
    }

    /// Member name under which a validation namespace exposes this kind,
    /// e.g. `"temporalPlainDate"`.
    pub const fn member_name(self) -> &'static str {
        match self {
            Self::Instant => "temporalInstant",
            Self::PlainDate => "temporalPlainDate",
            Self::PlainTime => "temporalPlainTime",
            Self::PlainDateTime => "temporalPlainDateTime",
            Self::ZonedDateTime => "temporalZonedDateTime",
            Self::Duration => "temporalDuration",
            Self::TimeZone => "temporalTimeZone",
            Self::Calendar => "temporalCalendar",
        }
    }

    /// Look a kind up by its member name. Exact match only.
    pub fn from_member_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.member_name() == name)
    }
}

impl fmt::Display for TemporalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.qualified_name())
    }
}

impl FromStr for TemporalKind {
    type Err = TemporalError;

    /// Accepts the bare name, the qualified name, the member name, or the
    /// snake_case serde spelling.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bare = s.strip_prefix("Temporal.").unwrap_or(s);
        Self::ALL
            .into_iter()
            .find(|k| {
                k.name() == bare
                    || k.member_name() == s
                    || snake_case(k.name()) == s
            })
            .ok_or_else(|| TemporalError::UnknownKind(s.to_string()))
    }
}

fn snake_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for (i, ch) in name.chars().enumerate() {
        if ch.is_ascii_uppercase() {
            if i > 0 {
                out.push('_');
            }
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}
