//! Configuration management for the CCA manager.
//!
//! This module handles loading and validating configuration from environment variables.
//! A `.env` file in the working directory is loaded first if present.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::path::PathBuf;

/// Default location of the data file, relative to the working directory.
pub const DEFAULT_DATA_FILE: &str = "data/addressbook.json";

/// Configuration for the CCA manager.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the JSON data file (default: `data/addressbook.json`)
    pub data_file: PathBuf,

    /// Save after every command that changes the address book (default: true).
    /// When false, changes are saved once on exit.
    pub autosave: bool,

    /// Log level (default: "warn")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `CCA_DATA_FILE`: Path of the JSON data file (default: `data/addressbook.json`)
    /// - `CCA_AUTOSAVE`: `true`/`false` (default: true)
    /// - `LOG_LEVEL`: Logging level (default: "warn")
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let data_file = match env::var("CCA_DATA_FILE") {
            Ok(path) if path.trim().is_empty() => {
                return Err(ConfigError::InvalidValue {
                    var: "CCA_DATA_FILE".to_string(),
                    reason: "Cannot be empty".to_string(),
                })
            }
            Ok(path) => PathBuf::from(path),
            Err(_) => PathBuf::from(DEFAULT_DATA_FILE),
        };

        let autosave = Self::parse_env_bool("CCA_AUTOSAVE", true)?;
        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "warn".to_string());

        Ok(Config {
            data_file,
            autosave,
            log_level,
        })
    }

    /// Parse an environment variable as bool with a default value.
    fn parse_env_bool(var_name: &str, default: bool) -> ConfigResult<bool> {
        match env::var(var_name) {
            Ok(val) => match val.trim().to_lowercase().as_str() {
                "true" | "1" | "yes" => Ok(true),
                "false" | "0" | "no" => Ok(false),
                _ => Err(ConfigError::InvalidValue {
                    var: var_name.to_string(),
                    reason: format!("Must be true or false, got: {}", val),
                }),
            },
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            autosave: true,
            log_level: "warn".to_string(),
        }
    }
}
