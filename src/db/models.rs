//! Database row models.
//! These are thin wrappers around SQLite rows; conversion into domain types
//! happens outside the rusqlite row closure so codec errors keep their kind.

use crate::core::codec;
use crate::errors::{AppError, AppResult};
use crate::models::appointment::Appointment;
use crate::models::location::Location;

#[derive(Debug, Clone)]
pub struct DbAppointmentRow {
    pub id: i64,
    pub title: String,
    pub datetime: i64,
    pub location: i64,
    pub duration: i64,
    pub description: String,
}

impl TryFrom<DbAppointmentRow> for Appointment {
    type Error = AppError;

    fn try_from(row: DbAppointmentRow) -> AppResult<Self> {
        let location = Location::from_site_code(row.location).ok_or_else(|| {
            AppError::InvalidAppointment(format!(
                "unknown site code {} on appointment {}",
                row.location, row.id
            ))
        })?;

        Ok(Appointment {
            id: row.id,
            title: row.title,
            datetime: codec::decode(row.datetime)?,
            location,
            duration: codec::decode_duration(row.duration)?,
            description: row.description,
        })
    }
}

#[derive(Debug, Clone)]
pub struct DbLogRow {
    pub id: i64,
    pub date: String,
    pub operation: String,
    pub target: String,
    pub message: String,
}
