//! # chrono Interop
//!
//! Conversions between the temporal value types and `chrono`, for callers
//! whose surrounding code already speaks chrono. Every conversion is
//! fallible because the two libraries disagree on range: jiff spans years
//! -9999..=9999 while chrono reaches further, and chrono encodes leap
//! seconds as nanosecond values at or above one billion, which jiff does
//! not represent.

use chrono::{DateTime, Datelike, NaiveDate, NaiveTime, Timelike, Utc};

use crate::error::TemporalError;
use crate::kind::TemporalKind;
use crate::temporal::{Instant, PlainDate, PlainTime};

const NANOS_PER_SECOND: i32 = 1_000_000_000;

impl TryFrom<DateTime<Utc>> for Instant {
    type Error = TemporalError;

    fn try_from(dt: DateTime<Utc>) -> Result<Self, Self::Error> {
        let nanos = i32::try_from(dt.timestamp_subsec_nanos())
            .map_err(|e| TemporalError::out_of_range(TemporalKind::Instant, e))?;
        jiff::Timestamp::new(dt.timestamp(), nanos)
            .map(Instant::new)
            .map_err(|e| TemporalError::out_of_range(TemporalKind::Instant, e))
    }
}

impl TryFrom<Instant> for DateTime<Utc> {
    type Error = TemporalError;

    fn try_from(instant: Instant) -> Result<Self, Self::Error> {
        let ts = instant.as_jiff();
        let mut secs = ts.as_second();
        let mut nanos = ts.subsec_nanosecond();
        // jiff reports a negative fraction before the epoch; chrono wants
        // a non-negative one.
        if nanos < 0 {
            secs -= 1;
            nanos += NANOS_PER_SECOND;
        }
        let nanos = u32::try_from(nanos)
            .map_err(|e| TemporalError::out_of_range(TemporalKind::Instant, e))?;
        DateTime::from_timestamp(secs, nanos).ok_or_else(|| {
            TemporalError::out_of_range(TemporalKind::Instant, format!("{instant} exceeds chrono range"))
        })
    }
}

impl TryFrom<NaiveDate> for PlainDate {
    type Error = TemporalError;

    fn try_from(date: NaiveDate) -> Result<Self, Self::Error> {
        let year = i16::try_from(date.year())
            .map_err(|e| TemporalError::out_of_range(TemporalKind::PlainDate, e))?;
        // chrono guarantees month 1..=12 and day 1..=31, both fit in i8.
        PlainDate::from_ymd(year, date.month() as i8, date.day() as i8)
    }
}

impl TryFrom<PlainDate> for NaiveDate {
    type Error = TemporalError;

    fn try_from(date: PlainDate) -> Result<Self, Self::Error> {
        let d = date.as_jiff();
        NaiveDate::from_ymd_opt(i32::from(d.year()), d.month() as u32, d.day() as u32).ok_or_else(
            || TemporalError::out_of_range(TemporalKind::PlainDate, format!("{date} exceeds chrono range")),
        )
    }
}

impl TryFrom<NaiveTime> for PlainTime {
    type Error = TemporalError;

    fn try_from(time: NaiveTime) -> Result<Self, Self::Error> {
        let nanos = i32::try_from(time.nanosecond())
            .map_err(|e| TemporalError::out_of_range(TemporalKind::PlainTime, e))?;
        jiff::civil::Time::new(
            time.hour() as i8,
            time.minute() as i8,
            time.second() as i8,
            nanos,
        )
        .map(PlainTime::new)
        .map_err(|e| TemporalError::out_of_range(TemporalKind::PlainTime, e))
    }
}

impl TryFrom<PlainTime> for NaiveTime {
    type Error = TemporalError;

    fn try_from(time: PlainTime) -> Result<Self, Self::Error> {
        let t = time.as_jiff();
        NaiveTime::from_hms_nano_opt(
            t.hour() as u32,
            t.minute() as u32,
            t.second() as u32,
            t.subsec_nanosecond() as u32,
        )
        .ok_or_else(|| TemporalError::out_of_range(TemporalKind::PlainTime, format!("{time} not a chrono time")))
    }
}
