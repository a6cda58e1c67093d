use crate::cli::parser::Commands;
use crate::config::Config;
use crate::config::migrate::{fill_missing_keys, missing_keys};
use crate::core::config::ConfigLogic;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{header, info, success, warning};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
        migrate,
        edit_config,
        editor,
    } = cmd
    {
        let path = Config::config_file();

        if *print_config {
            header(format!("Configuration ({})", path.display()));
            let yaml = serde_yaml::to_string(cfg).map_err(|_| AppError::ConfigSave)?;
            print!("{}", yaml);
        }

        if *check {
            if !path.exists() {
                warning(format!(
                    "{} does not exist; run `rschedule init` first.",
                    path.display()
                ));
            } else {
                let missing = missing_keys(&path)?;
                if missing.is_empty() {
                    success("Configuration is complete.");
                } else {
                    warning(format!("Missing keys: {}", missing.join(", ")));
                }
                cfg.location()?;
                cfg.duration()?;
            }
        }

        if *migrate {
            let added = fill_missing_keys(&path)?;
            if added.is_empty() {
                info("Nothing to migrate.");
            } else {
                success(format!("Added keys: {}", added.join(", ")));
            }
        }

        if *edit_config {
            let used = ConfigLogic::edit(&path, editor.as_deref())?;
            success(format!("Configuration edited with {}", used));
        }
    }

    Ok(())
}
