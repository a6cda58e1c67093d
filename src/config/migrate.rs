//! Bring an older configuration file up to the current set of keys.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

fn read_mapping(path: &Path) -> AppResult<Mapping> {
    let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
    match serde_yaml::from_str::<Value>(&content).map_err(|_| AppError::ConfigLoad)? {
        Value::Mapping(map) => Ok(map),
        Value::Null => Ok(Mapping::new()),
        _ => Err(AppError::Config(format!(
            "{} does not contain a YAML mapping",
            path.display()
        ))),
    }
}

fn defaults() -> AppResult<Mapping> {
    match serde_yaml::to_value(Config::default()).map_err(|_| AppError::ConfigSave)? {
        Value::Mapping(map) => Ok(map),
        _ => Err(AppError::ConfigSave),
    }
}

/// Keys the current schema knows about but the file lacks.
pub fn missing_keys(path: &Path) -> AppResult<Vec<String>> {
    let file = read_mapping(path)?;
    Ok(defaults()?
        .keys()
        .filter(|k| !file.contains_key(*k))
        .filter_map(|k| k.as_str().map(str::to_string))
        .collect())
}

/// Add every missing key with its default value; existing values and
/// unknown keys are preserved. Returns the keys added.
pub fn fill_missing_keys(path: &Path) -> AppResult<Vec<String>> {
    let mut file = read_mapping(path)?;
    let mut added = Vec::new();

    for (key, value) in defaults()? {
        if file.contains_key(&key) {
            continue;
        }
        if let Some(name) = key.as_str() {
            added.push(name.to_string());
        }
        file.insert(key, value);
    }

    if !added.is_empty() {
        let yaml = serde_yaml::to_string(&Value::Mapping(file)).map_err(|_| AppError::ConfigSave)?;
        fs::write(path, yaml).map_err(|_| AppError::ConfigSave)?;
    }

    Ok(added)
}
