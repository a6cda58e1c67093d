use crate::cli::commands::open_service;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::del::DeleteLogic;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};

use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

pub async fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id, all, yes } = cmd {
        if *all {
            if !*yes && !ask_confirmation("Delete ALL appointments? This action is irreversible.") {
                info("Operation cancelled.");
                return Ok(());
            }

            let service = open_service(cfg).await?;
            let n = DeleteLogic::all(&service).await?;
            success(format!("{} appointment(s) deleted.", n));
            return Ok(());
        }

        if let Some(id) = id {
            let service = open_service(cfg).await?;
            match DeleteLogic::by_id(&service, *id).await? {
                Some(removed) => success(format!(
                    "Appointment #{} '{}' deleted.",
                    removed.id, removed.title
                )),
                None => warning(format!("No appointment with id {}.", id)),
            }
        }
    }

    Ok(())
}
