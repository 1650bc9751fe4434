//! Conversions between the null-aware value types and `chrono`.
//!
//! Inbound conversions refuse to produce the null date, so a value that came
//! from a real calendar can never be mistaken for "no date". The null time is
//! midnight and stays legal in both directions.

use bedrock_common::{Date, DateTime, Time};
use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

use crate::error::{PrimitiveError, PrimitiveResult};

pub fn date_from_naive(date: NaiveDate) -> PrimitiveResult<Date> {
    let out = Date::new(date.year(), date.month(), date.day());
    if out.is_null() {
        tracing::debug!(%date, "rejecting calendar date equal to the null date");
        return Err(PrimitiveError::ReservedNullDate { date: out });
    }
    Ok(out)
}

/// `None` for the null date and for triples no calendar accepts.
pub fn date_to_naive(date: &Date) -> Option<NaiveDate> {
    if date.is_null() {
        return None;
    }
    NaiveDate::from_ymd_opt(date.year, date.month, date.day)
}

/// Sub-microsecond precision is truncated. Leap-second representations
/// (nanosecond >= 1e9) are rejected.
pub fn time_from_naive(time: NaiveTime) -> PrimitiveResult<Time> {
    let nanos = time.nanosecond();
    if nanos >= 1_000_000_000 {
        return Err(PrimitiveError::InvalidTime {
            hour: time.hour(),
            minute: time.minute(),
            second: time.second(),
            nanosecond: nanos,
        });
    }
    Ok(Time::new(
        time.hour(),
        time.minute(),
        time.second(),
        nanos / 1_000_000,
        (nanos / 1_000) % 1_000,
    ))
}

pub fn time_to_naive(time: &Time) -> Option<NaiveTime> {
    if !time.is_valid() {
        return None;
    }
    NaiveTime::from_hms_nano_opt(time.hour, time.minute, time.second, time.subsec_nanos()?)
}

pub fn datetime_from_naive(dt: NaiveDateTime) -> PrimitiveResult<DateTime> {
    let date = date_from_naive(dt.date())?;
    let time = time_from_naive(dt.time())?;
    Ok(DateTime::new(date, time))
}

/// `None` when the date part is null or either part is out of range.
pub fn datetime_to_naive(dt: &DateTime) -> Option<NaiveDateTime> {
    let date = date_to_naive(&dt.date())?;
    let time = time_to_naive(&dt.time())?;
    Some(date.and_time(time))
}
