// Licensed under the Open Software License version 3.0
use super::types::{Config, Example};
use crate::error::Result;
use serde::Serialize;
use serde_json::{ser::PrettyFormatter, Serializer};
use std::{
    fs,
    path::{Path, PathBuf},
    process,
};

pub const CONFIG_FILE_ENV_VAR: &str = "PLANT_SENSOR_DATA_CONFIG_FILE";
const DEFAULT_CONFIG_FILE: &str = "config.json";

fn write_example_config_to_file(path: &Path) -> Result<()> {
    // Use 4 spaces for indentation
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut buffer = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buffer, formatter);
    Config::example().serialize(&mut serializer)?;
    fs::write(path, buffer)?;
    Ok(())
}

/// Creates an example config file unless one exists
/// # Returns
/// `true` if config was written to file
/// `false` if config file already exists or can't be written
fn create_example_config_if_not_exists(path: &Path) -> bool {
    if path.exists() {
        return false;
    }
    match write_example_config_to_file(path) {
        Ok(()) => true,
        Err(error) => {
            tracing::warn!("Failed to write {}: {}", path.display(), error);
            false
        }
    }
}

fn read_config(path: &Path) -> Result<Config> {
    let config_file = fs::read_to_string(path)?;
    let config: Config = serde_json::from_str(&config_file)?;
    Ok(config)
}

/// Path from the environment, "config.json" in current directory otherwise
pub fn config_file_path() -> PathBuf {
    std::env::var(CONFIG_FILE_ENV_VAR)
        .ok()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE))
}

pub fn read_config_or_create_example() -> Config {
    tracing::trace!("Determining config file path");
    let config_file_path = config_file_path();
    tracing::debug!("Reading config from: {}", config_file_path.display());
    // Exit on failure
    let config = match read_config(&config_file_path) {
        Ok(config) => config,
        Err(error) => {
            tracing::error!("Failed to read config: {}", error);
            if create_example_config_if_not_exists(&config_file_path) {
                tracing::error!(
                    "Wrote example config to {}. Please edit this file and try again.",
                    config_file_path.display()
                );
            } else {
                tracing::error!(
                    "Fix or delete {} and run again",
                    config_file_path.display()
                );
            }
            process::exit(1);
        }
    };
    tracing::debug!("Successfully read config");
    config
}
