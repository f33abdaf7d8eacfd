//! # Calendar Identifiers
//!
//! `Calendar` is the closed set of CLDR calendar systems a temporal value
//! may be expressed in. The set is fixed; there is no calendar arithmetic
//! here, only identification.
//!
//! Accepted text:
//!
//! - an identifier, ASCII case-insensitive: `iso8601`, `Gregory`
//! - a legacy alias: `islamicc` (→ `islamic-civil`),
//!   `ethiopic-amete-alem` (→ `ethioaa`)
//! - an ISO 8601 date or date-time with a `[u-ca=…]` annotation
//! - a bare ISO 8601 date or date-time, which implies `iso8601`

use std::fmt;
use std::str::FromStr;

use crate::error::TemporalError;
use crate::kind::TemporalKind;
use crate::temporal::{canonical_serde, TemporalType};

/// A calendar system identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Calendar {
    /// ISO 8601 proleptic Gregorian calendar.
    #[default]
    Iso8601,
    Buddhist,
    Chinese,
    Coptic,
    Dangi,
    Ethioaa,
    Ethiopic,
    Gregory,
    Hebrew,
    Indian,
    Islamic,
    IslamicCivil,
    IslamicRgsa,
    IslamicTbla,
    IslamicUmalqura,
    Japanese,
    Persian,
    Roc,
}

impl Calendar {
    /// Every supported calendar.
    pub const ALL: [Calendar; 18] = [
        Self::Iso8601,
        Self::Buddhist,
        Self::Chinese,
        Self::Coptic,
        Self::Dangi,
        Self::Ethioaa,
        Self::Ethiopic,
        Self::Gregory,
        Self::Hebrew,
        Self::Indian,
        Self::Islamic,
        Self::IslamicCivil,
        Self::IslamicRgsa,
        Self::IslamicTbla,
        Self::IslamicUmalqura,
        Self::Japanese,
        Self::Persian,
        Self::Roc,
    ];

    /// The canonical lowercase identifier.
    pub const fn id(self) -> &'static str {
        match self {
            Self::Iso8601 => "iso8601",
            Self::Buddhist => "buddhist",
            Self::Chinese => "chinese",
            Self::Coptic => "coptic",
            Self::Dangi => "dangi",
            Self::Ethioaa => "ethioaa",
            Self::Ethiopic => "ethiopic",
            Self::Gregory => "gregory",
            Self::Hebrew => "hebrew",
            Self::Indian => "indian",
            Self::Islamic => "islamic",
            Self::IslamicCivil => "islamic-civil",
            Self::IslamicRgsa => "islamic-rgsa",
            Self::IslamicTbla => "islamic-tbla",
            Self::IslamicUmalqura => "islamic-umalqura",
            Self::Japanese => "japanese",
            Self::Persian => "persian",
            Self::Roc => "roc",
        }
    }

    /// Look up an identifier or legacy alias, ignoring ASCII case.
    pub fn from_id(id: &str) -> Option<Self> {
        let lower = id.to_ascii_lowercase();
        match lower.as_str() {
            "islamicc" => return Some(Self::IslamicCivil),
            "ethiopic-amete-alem" => return Some(Self::Ethioaa),
            _ => {}
        }
        Self::ALL.into_iter().find(|c| c.id() == lower)
    }
}

impl FromStr for Calendar {
    type Err = TemporalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(calendar) = Self::from_id(s) {
            return Ok(calendar);
        }

        let (head, annotations) = match s.find('[') {
            Some(i) => (&s[..i], &s[i..]),
            None => (s, ""),
        };
        let is_iso = head.parse::<jiff::civil::Date>().is_ok()
            || head.parse::<jiff::civil::DateTime>().is_ok()
            || head.parse::<jiff::Timestamp>().is_ok();
        if !is_iso {
            return Err(TemporalError::parse(
                TemporalKind::Calendar,
                s,
                "not a calendar identifier or ISO 8601 date",
            ));
        }

        match calendar_annotation(s, annotations)? {
            None => Ok(Self::Iso8601),
            Some(id) => Self::from_id(id).ok_or_else(|| {
                TemporalError::parse(
                    TemporalKind::Calendar,
                    s,
                    format!("unknown calendar identifier {id:?}"),
                )
            }),
        }
    }
}

impl fmt::Display for Calendar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl TemporalType for Calendar {
    const KIND: TemporalKind = TemporalKind::Calendar;
}

canonical_serde!(Calendar);

/// Walk the bracketed annotations after an ISO date and return the value
/// of the first `u-ca=` one.
///
/// Every group must be a closed, non-empty `[...]`, and nothing may follow
/// the last one.
fn calendar_annotation<'a>(
    text: &str,
    annotations: &'a str,
) -> Result<Option<&'a str>, TemporalError> {
    let malformed = |reason: &str| TemporalError::parse(TemporalKind::Calendar, text, reason);
    let mut calendar = None;
    let mut rest = annotations;
    while !rest.is_empty() {
        let Some(group) = rest.strip_prefix('[') else {
            return Err(malformed("unexpected text after annotations"));
        };
        let Some(close) = group.find(']') else {
            return Err(malformed("unterminated bracketed annotation"));
        };
        let body = &group[..close];
        let body = body.strip_prefix('!').unwrap_or(body);
        if body.is_empty() || body.contains('[') {
            return Err(malformed("empty or nested bracketed annotation"));
        }
        if calendar.is_none() {
            calendar = body.strip_prefix("u-ca=");
        }
        rest = &group[close + 1..];
    }
    Ok(calendar)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifier_roundtrip() {
        for calendar in Calendar::ALL {
            assert_eq!(calendar.id().parse::<Calendar>().unwrap(), calendar);
            assert_eq!(calendar.to_string(), calendar.id());
        }
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!("ISO8601".parse::<Calendar>().unwrap(), Calendar::Iso8601);
        assert_eq!("Gregory".parse::<Calendar>().unwrap(), Calendar::Gregory);
    }

    #[test]
    fn test_legacy_aliases() {
        assert_eq!("islamicc".parse::<Calendar>().unwrap(), Calendar::IslamicCivil);
        assert_eq!(
            "ethiopic-amete-alem".parse::<Calendar>().unwrap(),
            Calendar::Ethioaa
        );
    }

    #[test]
    fn test_iso_string_defaults_to_iso8601() {
        assert_eq!("2024-02-09".parse::<Calendar>().unwrap(), Calendar::Iso8601);
        assert_eq!(
            "2024-02-09T12:00:00".parse::<Calendar>().unwrap(),
            Calendar::Iso8601
        );
    }

    #[test]
    fn test_calendar_annotation() {
        let cal: Calendar = "2024-02-09[u-ca=hebrew]".parse().unwrap();
        assert_eq!(cal, Calendar::Hebrew);
        let cal: Calendar = "2024-02-09T12:00:00+01:00[Europe/Paris][!u-ca=japanese]"
            .parse()
            .unwrap();
        assert_eq!(cal, Calendar::Japanese);
        assert!("2024-02-09[u-ca=martian]".parse::<Calendar>().is_err());
    }

    #[test]
    fn test_malformed_annotations_rejected() {
        assert!("2024-02-09[u-ca=hebrew".parse::<Calendar>().is_err());
        assert!("2024-02-09[garbage".parse::<Calendar>().is_err());
        assert!("2024-02-09[]".parse::<Calendar>().is_err());
        assert!("2024-02-09[!]".parse::<Calendar>().is_err());
        assert!("2024-02-09[u-ca=hebrew]x".parse::<Calendar>().is_err());
        assert!("2024-02-09[a[u-ca=hebrew]".parse::<Calendar>().is_err());
        assert!("2024-02-09[u-ca=".parse::<Calendar>().is_err());
    }

    #[test]
    fn test_first_calendar_annotation_wins() {
        let cal: Calendar = "2024-02-09[u-ca=hebrew][u-ca=japanese]".parse().unwrap();
        assert_eq!(cal, Calendar::Hebrew);
    }

    #[test]
    fn test_invalid_rejected() {
        assert!("invalid".parse::<Calendar>().is_err());
        assert!("not-a-date".parse::<Calendar>().is_err());
        assert!("".parse::<Calendar>().is_err());
    }

    #[test]
    fn test_default_is_iso8601() {
        assert_eq!(Calendar::default(), Calendar::Iso8601);
    }
}
