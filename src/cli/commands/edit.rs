use crate::cli::commands::{open_service, parse_location, parse_when, render_appointments};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::{AddLogic, AppointmentPatch, SaveResult};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};
use crate::utils::duration::parse_duration;

/// Change fields of an existing appointment, keeping its identity.
pub async fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit {
        id,
        title,
        at,
        loc,
        dur,
        desc,
        force,
    } = cmd
    {
        let patch = AppointmentPatch {
            title: title.clone(),
            datetime: at.as_deref().map(parse_when).transpose()?,
            location: loc.as_deref().map(parse_location).transpose()?,
            duration: dur.as_deref().map(parse_duration).transpose()?,
            description: desc.clone(),
        };

        if patch.is_empty() {
            info("Nothing to change.");
            return Ok(());
        }

        let service = open_service(cfg).await?;
        let check = cfg.check_conflicts && !*force;

        match AddLogic::edit(&service, *id, &patch, check).await? {
            (SaveResult::Saved(_), Some(updated)) => {
                success(format!("Appointment #{} updated.", id));
                print!("{}", render_appointments(&[updated], cfg));
            }
            (SaveResult::Blocked(conflicts), _) => {
                warning(format!(
                    "The new slot overlaps {} appointment(s):",
                    conflicts.len()
                ));
                print!("{}", render_appointments(&conflicts, cfg));
                return Err(AppError::Conflict(
                    "appointment not updated (use --force to save anyway)".into(),
                ));
            }
            _ => warning(format!("No appointment with id {}.", id)),
        }
    }

    Ok(())
}
