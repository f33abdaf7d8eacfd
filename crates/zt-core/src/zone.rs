//! # Time Zone Identifiers
//!
//! `TimeZone` names a zone either by IANA identifier (resolved through
//! jiff's bundled tz database, so results do not depend on the host's
//! `/usr/share/zoneinfo`) or by a fixed UTC offset.
//!
//! Accepted text:
//!
//! - an IANA identifier, case-insensitive: `Europe/Paris`, `utc`
//! - a fixed offset: `+01:00`, `-0530`, `+01`
//! - an ISO 8601 date-time carrying a bracketed zone annotation:
//!   `2024-02-09T12:00:00+01:00[Europe/Paris]`
//! - an exact ISO 8601 date-time without one, which names its own offset
//!   (`2024-02-09T12:00:00+01:00`) or `UTC` (`2024-02-09T12:00:00Z`)
//!
//! The canonical string is the IANA identifier as spelled by the database,
//! or the offset as `±HH:MM`.

use std::fmt;
use std::str::FromStr;

use crate::error::TemporalError;
use crate::kind::TemporalKind;
use crate::temporal::{canonical_serde, TemporalType};

/// A time zone identifier.
#[derive(Debug, Clone)]
pub struct TimeZone {
    id: String,
    zone: jiff::tz::TimeZone,
}

impl TimeZone {
    /// The UTC zone.
    pub fn utc() -> Self {
        Self {
            id: "UTC".to_string(),
            zone: jiff::tz::TimeZone::UTC,
        }
    }

    /// A zone with a fixed offset from UTC, in seconds.
    pub fn fixed(offset_seconds: i32) -> Result<Self, TemporalError> {
        let offset = jiff::tz::Offset::from_seconds(offset_seconds)
            .map_err(|e| TemporalError::out_of_range(TemporalKind::TimeZone, e))?;
        Ok(Self {
            id: format_offset(offset_seconds),
            zone: jiff::tz::TimeZone::fixed(offset),
        })
    }

    /// The canonical identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Borrow the underlying jiff zone.
    pub fn as_jiff(&self) -> &jiff::tz::TimeZone {
        &self.zone
    }
}

impl PartialEq for TimeZone {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TimeZone {}

impl std::hash::Hash for TimeZone {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl FromStr for TimeZone {
    type Err = TemporalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let candidate = match zone_annotation(s) {
            Some(annotation) => annotation?,
            None => offset_suffix(s).unwrap_or(s),
        };

        if let Some(secs) = parse_offset(candidate) {
            return Self::fixed(secs).map_err(|e| TemporalError::parse(TemporalKind::TimeZone, s, e));
        }

        let zone = jiff::tz::TimeZone::get(candidate)
            .map_err(|e| TemporalError::parse(TemporalKind::TimeZone, s, e))?;
        let id = zone.iana_name().unwrap_or(candidate).to_string();
        Ok(Self { id, zone })
    }
}

impl fmt::Display for TimeZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id)
    }
}

impl TemporalType for TimeZone {
    const KIND: TemporalKind = TemporalKind::TimeZone;
}

canonical_serde!(TimeZone);

/// Extract the zone annotation from an ISO date-time string.
///
/// Returns `None` when the text has no brackets. Calendar and other keyed
/// annotations (`[u-ca=iso8601]`) are skipped; a leading `!` critical flag
/// is dropped.
fn zone_annotation(text: &str) -> Option<Result<&str, TemporalError>> {
    let start = text.find('[')?;
    let mut rest = &text[start..];
    while let Some(open) = rest.find('[') {
        let Some(close) = rest[open..].find(']') else {
            return Some(Err(TemporalError::parse(
                TemporalKind::TimeZone,
                text,
                "unterminated bracketed annotation",
            )));
        };
        let body = &rest[open + 1..open + close];
        let body = body.strip_prefix('!').unwrap_or(body);
        if !body.contains('=') && !body.is_empty() {
            return Some(Ok(body));
        }
        rest = &rest[open + close + 1..];
    }
    Some(Err(TemporalError::parse(
        TemporalKind::TimeZone,
        text,
        "no time zone annotation",
    )))
}

/// The zone implied by an exact date-time without a bracketed zone:
/// `UTC` for a `Z` suffix, otherwise the numeric offset.
fn offset_suffix(text: &str) -> Option<&str> {
    text.parse::<jiff::Timestamp>().ok()?;
    let separator = text.find(|c: char| matches!(c, 'T' | 't' | ' '))?;
    let time = &text[separator + 1..];
    if time.ends_with(&['Z', 'z'][..]) {
        return Some("UTC");
    }
    let sign = time.rfind(&['+', '-'][..])?;
    Some(&time[sign..])
}

/// Parse `±HH`, `±HHMM` or `±HH:MM` into seconds east of UTC.
fn parse_offset(text: &str) -> Option<i32> {
    let (sign, digits) = match text.as_bytes().first()? {
        b'+' => (1, &text[1..]),
        b'-' => (-1, &text[1..]),
        _ => return None,
    };
    // Byte offsets below are only char boundaries for ASCII text.
    if !digits.is_ascii() {
        return None;
    }
    let (hours, minutes) = match digits.len() {
        2 => (digits, "00"),
        4 => (&digits[..2], &digits[2..]),
        5 if digits.as_bytes()[2] == b':' => (&digits[..2], &digits[3..]),
        _ => return None,
    };
    if !hours.bytes().chain(minutes.bytes()).all(|b| b.is_ascii_digit()) {
        return None;
    }
    let hours: i32 = hours.parse().ok()?;
    let minutes: i32 = minutes.parse().ok()?;
    if hours > 23 || minutes > 59 {
        return None;
    }
    Some(sign * (hours * 3600 + minutes * 60))
}

fn format_offset(secs: i32) -> String {
    let sign = if secs < 0 { '-' } else { '+' };
    let abs = secs.unsigned_abs();
    format!("{sign}{:02}:{:02}", abs / 3600, (abs % 3600) / 60)
}
