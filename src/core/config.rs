// src/core/config.rs
use std::env;
use std::path::PathBuf;

use log::LevelFilter;

use crate::db::json::DEFAULT_STORAGE_FILE;

// Configuration for the password generator and store
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    // Storage
    pub storage_file: PathBuf,

    // Password Generation
    pub default_password_length: usize,

    // Logging
    pub log_level: LevelFilter,
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            // Storage
            storage_file: PathBuf::from(DEFAULT_STORAGE_FILE),

            // Password Generation
            default_password_length: 12,

            // Logging
            log_level: LevelFilter::Warn,
            log_file: None,
        }
    }
}

impl Config {
    // Load configuration from environment variables
    pub fn load() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        // Storage
        if let Some(file) = lookup("PASSGEN_STORAGE_FILE") {
            if !file.trim().is_empty() {
                config.storage_file = PathBuf::from(file);
            }
        }

        // Password Generation
        if let Some(val) = lookup("DEFAULT_PASSWORD_LENGTH") {
            if let Ok(length) = val.trim().parse() {
                config.default_password_length = length;
            }
        }

        // Logging
        if let Some(level) = lookup("LOG_LEVEL") {
            match level.to_lowercase().as_str() {
                "off" => config.log_level = LevelFilter::Off,
                "error" => config.log_level = LevelFilter::Error,
                "warn" => config.log_level = LevelFilter::Warn,
                "info" => config.log_level = LevelFilter::Info,
                "debug" => config.log_level = LevelFilter::Debug,
                "trace" => config.log_level = LevelFilter::Trace,
                _ => {}
            }
        }

        if let Some(file) = lookup("LOG_FILE") {
            if !file.trim().is_empty() {
                config.log_file = Some(PathBuf::from(file));
            }
        }

        config
    }
}
