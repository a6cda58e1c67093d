pub mod add;
pub mod backup;
pub mod config;
pub mod conflicts;
pub mod db;
pub mod del;
pub mod edit;
pub mod export;
pub mod init;
pub mod list;
pub mod locations;
pub mod log;

use crate::config::Config;
use crate::core::service::ScheduleService;
use crate::errors::{AppError, AppResult};
use crate::models::appointment::Appointment;
use crate::models::location::Location;
use crate::utils::date;
use crate::utils::formatting::ellipsize;
use crate::utils::format_duration;
use crate::utils::table::Table;
use chrono::NaiveDateTime;

/// Open the configured database behind the async service.
pub(crate) async fn open_service(cfg: &Config) -> AppResult<ScheduleService> {
    let path = cfg.database_path();
    ScheduleService::open(&path.to_string_lossy()).await
}

pub(crate) fn parse_location(input: &str) -> AppResult<Location> {
    Location::from_name(input).ok_or_else(|| AppError::InvalidLocation(input.to_string()))
}

pub(crate) fn parse_when(input: &str) -> AppResult<NaiveDateTime> {
    date::parse_datetime(input).ok_or_else(|| AppError::InvalidDate(input.to_string()))
}

/// Render appointments as a table using the configured datetime format.
pub(crate) fn render_appointments(appts: &[Appointment], cfg: &Config) -> String {
    let mut table = Table::new(["ID", "START", "END", "DUR", "LOCATION", "TITLE", "DESCRIPTION"]);

    for a in appts {
        // an end past chrono's range only happens on corrupt rows; show it blank
        let end = a
            .end()
            .map(|e| date::format_datetime(&e, &cfg.datetime_format))
            .unwrap_or_default();

        table.add_row(vec![
            a.id.to_string(),
            date::format_datetime(&a.datetime, &cfg.datetime_format),
            end,
            format_duration(&a.duration),
            a.location.label(),
            ellipsize(&a.title, 32),
            ellipsize(&a.description, 40),
        ]);
    }

    table.render()
}
