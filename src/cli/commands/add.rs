use crate::cli::commands::{open_service, parse_location, parse_when, render_appointments};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::{AddLogic, SaveResult};
use crate::core::store::UpsertOutcome;
use crate::errors::{AppError, AppResult};
use crate::models::appointment::Appointment;
use crate::ui::messages::{success, warning};
use crate::utils::date;
use crate::utils::duration::parse_duration;
use crate::utils::format_duration;

/// Book a new appointment.
pub async fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        title,
        at,
        loc,
        dur,
        desc,
        force,
    } = cmd
    {
        let datetime = parse_when(at)?;
        let location = match loc {
            Some(l) => parse_location(l)?,
            None => cfg.location()?,
        };
        let duration = match dur {
            Some(d) => parse_duration(d)?,
            None => cfg.duration()?,
        };

        let appt = Appointment::new(
            title.clone(),
            datetime,
            location,
            duration,
            desc.clone().unwrap_or_default(),
        );

        let service = open_service(cfg).await?;
        let check = cfg.check_conflicts && !*force;

        match AddLogic::save(&service, appt, check).await? {
            SaveResult::Saved(UpsertOutcome::Inserted(id)) => {
                success(format!(
                    "Appointment #{} '{}' booked at {} on {} ({}).",
                    id,
                    title.trim(),
                    location.label(),
                    date::format_datetime(&datetime, &cfg.datetime_format),
                    format_duration(&duration)
                ));
            }
            SaveResult::Saved(_) | SaveResult::Missing => {
                success("Appointment saved.");
            }
            SaveResult::Blocked(conflicts) => {
                warning(format!(
                    "The slot overlaps {} appointment(s) at {}:",
                    conflicts.len(),
                    location.label()
                ));
                print!("{}", render_appointments(&conflicts, cfg));
                return Err(AppError::Conflict(
                    "appointment not saved (use --force to book anyway)".into(),
                ));
            }
        }
    }

    Ok(())
}
