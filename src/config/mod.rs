use crate::errors::{AppError, AppResult};
use crate::models::location::Location;
use crate::utils::duration::parse_duration;
use crate::utils::path::{ensure_parent_dir, expand_tilde};
use chrono::Duration;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub mod migrate; // use submodule at src/config/migrate.rs

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default = "default_location")]
    pub default_location: String,
    #[serde(default = "default_duration")]
    pub default_duration: String,
    #[serde(default = "default_datetime_format")]
    pub datetime_format: String,
    #[serde(default = "default_check_conflicts")]
    pub check_conflicts: bool,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}
fn default_location() -> String {
    Location::Dallas.name().to_string()
}
fn default_duration() -> String {
    "45m".to_string()
}
fn default_datetime_format() -> String {
    "%Y-%m-%d %H:%M".to_string()
}
fn default_check_conflicts() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            default_location: default_location(),
            default_duration: default_duration(),
            datetime_format: default_datetime_format(),
            check_conflicts: default_check_conflicts(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        let base = if cfg!(target_os = "windows") {
            dirs::config_dir()
        } else {
            dirs::home_dir()
        };
        let name = if cfg!(target_os = "windows") {
            "rschedule"
        } else {
            ".rschedule"
        };
        base.unwrap_or_else(|| PathBuf::from(".")).join(name)
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rschedule.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("rschedule.sqlite")
    }

    /// Load configuration from the standard file, or defaults if missing.
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        serde_yaml::from_str(&content).map_err(|_| AppError::ConfigLoad)
    }

    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        let yaml = serde_yaml::to_string(self).map_err(|_| AppError::ConfigSave)?;
        ensure_parent_dir(path)?;
        fs::write(path, yaml).map_err(|_| AppError::ConfigSave)
    }

    /// Database path with `~/` expanded.
    pub fn database_path(&self) -> PathBuf {
        expand_tilde(&self.database)
    }

    pub fn location(&self) -> AppResult<Location> {
        Location::from_name(&self.default_location).ok_or_else(|| {
            AppError::Config(format!(
                "default_location '{}' is not a known site",
                self.default_location
            ))
        })
    }

    pub fn duration(&self) -> AppResult<Duration> {
        parse_duration(&self.default_duration).map_err(|_| {
            AppError::Config(format!(
                "default_duration '{}' is not a valid duration",
                self.default_duration
            ))
        })
    }

    /// Prepare the config directory and, unless `is_test`, write the config
    /// file. An existing file keeps its settings; only `database` changes
    /// when a custom one is given.
    pub fn init_all(custom_db: Option<String>, is_test: bool) -> AppResult<Self> {
        let dir = Self::config_dir();
        let file = Self::config_file();

        let mut config = if is_test {
            Self::default()
        } else {
            fs::create_dir_all(&dir)?;
            Self::load_from(&file)?
        };

        if let Some(name) = custom_db {
            let p = expand_tilde(&name);
            config.database = if p.is_absolute() || is_test {
                p.to_string_lossy().to_string()
            } else {
                dir.join(p).to_string_lossy().to_string()
            };
        }

        ensure_parent_dir(&config.database_path())?;

        if !is_test {
            config.save_to(&file)?;
        }

        Ok(config)
    }
}
