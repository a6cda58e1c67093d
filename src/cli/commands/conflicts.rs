use crate::cli::commands::{open_service, parse_location, parse_when, render_appointments};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::codec;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};
use crate::utils::duration::parse_duration;

/// Show which appointments overlap a prospective slot at a site.
pub async fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Conflicts {
        at,
        dur,
        loc,
        exclude,
    } = cmd
    {
        let start_at = parse_when(at)?;
        let location = match loc {
            Some(l) => parse_location(l)?,
            None => cfg.location()?,
        };
        let duration = match dur {
            Some(d) => parse_duration(d)?,
            None => cfg.duration()?,
        };

        let start = codec::encode(&codec::truncate_to_second(&start_at));
        let end = codec::interval_end(start, codec::encode_duration(&duration)?)?;

        let service = open_service(cfg).await?;
        let hits = service
            .overlapping_appointments(*exclude, location.site_code(), start, end)
            .await?;

        if hits.is_empty() {
            success(format!("No conflicts at {}.", location.label()));
        } else {
            warning(format!(
                "{} overlapping appointment(s) at {}:",
                hits.len(),
                location.label()
            ));
            print!("{}", render_appointments(&hits, cfg));
        }
    }

    Ok(())
}
