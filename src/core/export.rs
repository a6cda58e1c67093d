use crate::core::service::ScheduleService;
use crate::errors::AppResult;
use crate::export::{AppointmentExport, ExportFormat, ensure_writable, export_csv, export_json};
use crate::models::location::Location;
use crate::models::query_shape::QueryShape;
use std::path::Path;

pub struct ExportLogic;

impl ExportLogic {
    /// Write the appointments of `shape` (optionally one site only) to
    /// `file`. Returns the number of records written.
    pub async fn export(
        service: &ScheduleService,
        format: ExportFormat,
        file: &Path,
        shape: QueryShape,
        location: Option<Location>,
        force: bool,
    ) -> AppResult<usize> {
        ensure_writable(file, force)?;

        let rows = service
            .snapshot(shape)
            .await?
            .iter()
            .filter(|a| location.is_none_or(|loc| a.location == loc))
            .map(AppointmentExport::from_appointment)
            .collect::<AppResult<Vec<_>>>()?;

        match format {
            ExportFormat::Csv => export_csv(&rows, file)?,
            ExportFormat::Json => export_json(&rows, file)?,
        }

        Ok(rows.len())
    }
}
