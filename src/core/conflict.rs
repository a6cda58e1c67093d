//! Interval overlap between appointments sharing a site.

use crate::core::codec;
use crate::errors::{AppError, AppResult};
use crate::models::appointment::Appointment;

/// Half-open interval `[start, end)` over encoded seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval {
    pub start: i64,
    pub end: i64,
}

impl Interval {
    pub fn new(start: i64, end: i64) -> AppResult<Self> {
        if end < start {
            return Err(AppError::InvalidTimestamp(format!(
                "interval ends before it starts ({start} > {end})"
            )));
        }
        Ok(Self { start, end })
    }

    pub fn of(appt: &Appointment) -> AppResult<Self> {
        let start = codec::encode(&appt.datetime);
        let secs = codec::encode_duration(&appt.duration)?;
        Self::new(start, codec::interval_end(start, secs)?)
    }

    pub fn is_degenerate(&self) -> bool {
        self.start == self.end
    }

    /// `s < e' && s' < e`; touching intervals and zero-length intervals
    /// never overlap.
    pub fn overlaps(&self, other: &Interval) -> bool {
        if self.is_degenerate() || other.is_degenerate() {
            return false;
        }
        self.start < other.end && other.start < self.end
    }
}

/// A candidate slot checked against stored appointments.
#[derive(Debug, Clone, Copy)]
pub struct ConflictQuery {
    /// Identity to ignore (the record being edited). `0` ignores nothing.
    pub exclude_id: i64,
    pub site_code: i64,
    pub interval: Interval,
}

impl ConflictQuery {
    pub fn new(exclude_id: i64, site_code: i64, start: i64, end: i64) -> AppResult<Self> {
        Ok(Self {
            exclude_id,
            site_code,
            interval: Interval::new(start, end)?,
        })
    }

    pub fn for_appointment(appt: &Appointment) -> AppResult<Self> {
        Ok(Self {
            exclude_id: appt.id,
            site_code: appt.location.site_code(),
            interval: Interval::of(appt)?,
        })
    }

    pub fn matches(&self, appt: &Appointment) -> AppResult<bool> {
        if appt.location.site_code() != self.site_code {
            return Ok(false);
        }
        if self.exclude_id != 0 && appt.id == self.exclude_id {
            return Ok(false);
        }
        Ok(self.interval.overlaps(&Interval::of(appt)?))
    }

    pub fn detect<I>(&self, candidates: I) -> AppResult<Vec<Appointment>>
    where
        I: IntoIterator<Item = Appointment>,
    {
        let mut out = Vec::new();
        for appt in candidates {
            if self.matches(&appt)? {
                out.push(appt);
            }
        }
        Ok(out)
    }
}
