//! Temporal codec: naive local date-times ⇄ sortable integers.
//!
//! A naive value is encoded as the number of seconds since
//! `1970-01-01T00:00:00` *as if* it were UTC. No zone conversion happens, so
//! the mapping is monotonic and range queries become integer comparisons.

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, NaiveTime, SubsecRound};

pub fn encode(dt: &NaiveDateTime) -> i64 {
    dt.and_utc().timestamp()
}

pub fn decode(secs: i64) -> AppResult<NaiveDateTime> {
    DateTime::from_timestamp(secs, 0)
        .map(|dt| dt.naive_utc())
        .ok_or_else(|| AppError::InvalidTimestamp(secs.to_string()))
}

pub fn truncate_to_second(dt: &NaiveDateTime) -> NaiveDateTime {
    dt.trunc_subsecs(0)
}

pub fn truncate_duration(d: &Duration) -> Duration {
    Duration::seconds(d.num_seconds())
}

/// Durations are stored as whole, non-negative seconds.
pub fn encode_duration(d: &Duration) -> AppResult<i64> {
    if *d < Duration::zero() {
        return Err(AppError::InvalidAppointment(format!(
            "duration must not be negative ({d})"
        )));
    }
    Ok(d.num_seconds())
}

pub fn decode_duration(secs: i64) -> AppResult<Duration> {
    if secs < 0 {
        return Err(AppError::InvalidTimestamp(format!("negative duration {secs}s")));
    }
    Duration::try_seconds(secs)
        .ok_or_else(|| AppError::InvalidTimestamp(format!("duration {secs}s out of range")))
}

/// Exclusive end of an encoded interval.
pub fn interval_end(start: i64, duration_secs: i64) -> AppResult<i64> {
    start
        .checked_add(duration_secs)
        .ok_or_else(|| AppError::InvalidTimestamp(format!("{start} + {duration_secs}s")))
}

/// `[start of day, start of next day)`, encoded.
pub fn day_bounds(day: NaiveDate) -> AppResult<(i64, i64)> {
    let next = day
        .succ_opt()
        .ok_or_else(|| AppError::InvalidTimestamp(format!("day after {day}")))?;

    Ok((
        encode(&day.and_time(NaiveTime::MIN)),
        encode(&next.and_time(NaiveTime::MIN)),
    ))
}
