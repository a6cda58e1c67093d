use super::location::Location;
use crate::core::codec;
use crate::errors::{AppError, AppResult};
use chrono::{Duration, NaiveDateTime};

/// A single scheduled appointment.
///
/// `id == 0` means the record has never been stored; the store assigns the
/// identity on first insert and it never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Appointment {
    pub id: i64,                 // ⇔ appointments.id
    pub title: String,           // ⇔ appointments.title (non-empty)
    pub datetime: NaiveDateTime, // ⇔ appointments.datetime (INTEGER, encoded seconds)
    pub location: Location,      // ⇔ appointments.location (INTEGER, site code)
    pub duration: Duration,      // ⇔ appointments.duration (INTEGER, seconds)
    pub description: String,     // ⇔ appointments.description
}

impl Appointment {
    /// New, not yet persisted appointment.
    pub fn new(
        title: impl Into<String>,
        datetime: NaiveDateTime,
        location: Location,
        duration: Duration,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: 0,
            title: title.into(),
            datetime,
            location,
            duration,
            description: description.into(),
        }
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }

    pub fn is_persisted(&self) -> bool {
        self.id != 0
    }

    /// Exclusive end of the appointment's interval.
    pub fn end(&self) -> AppResult<NaiveDateTime> {
        self.datetime
            .checked_add_signed(self.duration)
            .ok_or_else(|| AppError::InvalidTimestamp(format!("{} + {}", self.datetime, self.duration)))
    }

    /// The value the store will hold for this record: datetime and duration
    /// truncated to whole seconds.
    pub fn normalized(&self) -> Self {
        Self {
            datetime: codec::truncate_to_second(&self.datetime),
            duration: codec::truncate_duration(&self.duration),
            ..self.clone()
        }
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.title.trim().is_empty() {
            return Err(AppError::InvalidAppointment("title must not be empty".into()));
        }
        if self.duration < Duration::zero() {
            return Err(AppError::InvalidAppointment(format!(
                "duration must not be negative ({}s)",
                self.duration.num_seconds()
            )));
        }
        Ok(())
    }
}
