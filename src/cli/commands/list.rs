use crate::cli::commands::{open_service, parse_location, render_appointments};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::query_shape::QueryShape;
use crate::ui::messages::{header, info};
use crate::utils::date;
use crate::utils::format_duration;
use crate::utils::formatting::bold;
use chrono::Duration;

pub async fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { when, loc } = cmd {
        let location = loc.as_deref().map(parse_location).transpose()?;

        let service = open_service(cfg).await?;
        let appts: Vec<_> = service
            .snapshot(*when)
            .await?
            .into_iter()
            .filter(|a| location.is_none_or(|l| a.location == l))
            .collect();

        let title = match when {
            QueryShape::All => "All appointments".to_string(),
            QueryShape::Today => format!("Appointments for {}", date::today()),
            QueryShape::Future => "Upcoming appointments".to_string(),
            QueryShape::Past => "Past appointments".to_string(),
        };
        header(match location {
            Some(l) => format!("{} at {}", title, l.label()),
            None => title,
        });

        if appts.is_empty() {
            info("No appointments.");
            return Ok(());
        }

        print!("{}", render_appointments(&appts, cfg));

        let booked = appts
            .iter()
            .fold(Duration::zero(), |acc, a| acc + a.duration);
        println!(
            "\n{} appointment(s), {} booked",
            bold(&appts.len().to_string()),
            bold(&format_duration(&booked))
        );
    }

    Ok(())
}
