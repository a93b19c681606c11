// src/logging/mod.rs
use std::fs::OpenOptions;
use std::io;

use crate::core::config::Config;

/// Install the global logger. Output goes to stderr unless a log file is
/// configured, so it never mixes with generated passwords on stdout.
pub fn init_logging(config: &Config) -> io::Result<()> {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(config.log_level)
        .format_timestamp_secs()
        .format_module_path(true)
        .format_target(false);

    if let Some(path) = &config.log_file {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    } else {
        builder.target(env_logger::Target::Stderr);
    }

    // A second initialisation is harmless; keep the first logger.
    if builder.try_init().is_err() {
        log::debug!("Logger already initialised");
    }

    Ok(())
}
