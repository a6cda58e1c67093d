// src/export/model.rs

use crate::core::codec;
use crate::errors::AppResult;
use crate::models::appointment::Appointment;
use serde::Serialize;

const EXPORT_DATETIME: &str = "%Y-%m-%d %H:%M:%S";

/// Flat record written by the CSV and JSON exporters.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct AppointmentExport {
    pub id: i64,
    pub title: String,
    pub start: String,
    pub end: String,
    pub location: String,
    pub site_code: i64,
    pub duration_minutes: i64,
    pub description: String,
}

impl AppointmentExport {
    pub fn from_appointment(appt: &Appointment) -> AppResult<Self> {
        let end = appt.end()?;
        Ok(Self {
            id: appt.id,
            title: appt.title.clone(),
            start: appt.datetime.format(EXPORT_DATETIME).to_string(),
            end: end.format(EXPORT_DATETIME).to_string(),
            location: appt.location.name().to_string(),
            site_code: appt.location.site_code(),
            duration_minutes: codec::encode_duration(&appt.duration)? / 60,
            description: appt.description.clone(),
        })
    }
}
