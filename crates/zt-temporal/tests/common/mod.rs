//! Shared fixtures for the integration tests.

#![allow(dead_code)]

use zt_core::TemporalKind;
use zt_schema::Value;
use zt_temporal::descriptor;

/// A canonical string for each kind.
pub fn canonical(kind: TemporalKind) -> &'static str {
    match kind {
        TemporalKind::Instant => "2024-02-09T12:00:00Z",
        TemporalKind::PlainDate => "2024-02-09",
        TemporalKind::PlainTime => "12:00:00",
        TemporalKind::PlainDateTime => "2024-02-09T12:00:00",
        TemporalKind::ZonedDateTime => "2024-02-09T12:00:00+01:00[Europe/Paris]",
        TemporalKind::Duration => "P1Y2M3DT4H5M6S",
        TemporalKind::TimeZone => "Europe/Paris",
        TemporalKind::Calendar => "iso8601",
    }
}

/// A genuine instance of `kind`, wrapped as a value.
pub fn instance(kind: TemporalKind) -> Value {
    (descriptor(kind).parse)(canonical(kind)).unwrap()
}

/// Build an object value from `(key, value)` pairs.
pub fn object<const N: usize>(entries: [(&str, Value); N]) -> Value {
    entries
        .into_iter()
        .map(|(key, value)| (key.to_string(), value))
        .collect()
}
