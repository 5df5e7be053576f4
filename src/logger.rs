//! Logging setup.
//!
//! Everything in the crate logs through the `log` facade; this module wires
//! the facade to a `fern` dispatch built from [`Config`].

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Local;
use log::LevelFilter;

use crate::config::Config;
use crate::constants::{APP_NAME, LOG_FILE_NAME, LOG_TIMESTAMP_FORMAT};

/// Driver targets that are noisy below warn unless SQL logging is requested
const DRIVER_TARGETS: [&str; 2] = ["sqlx", "sea_orm"];

/// Install the global logger. Fails if one is already installed.
pub fn init(config: &Config) -> Result<()> {
    build_dispatch(config)?
        .apply()
        .map_err(|e| anyhow::anyhow!("Failed to install logger: {}", e))
}

/// Build the dispatch without installing it.
///
/// With logging enabled, records at the configured level go to the log
/// file. Otherwise only warnings and errors reach stderr.
pub fn build_dispatch(config: &Config) -> Result<fern::Dispatch> {
    let logging = &config.logging;
    let level = if logging.enabled { logging.level_filter()? } else { LevelFilter::Warn };
    let driver_level = if config.database.sqlx_logging { level } else { level.min(LevelFilter::Warn) };

    let mut dispatch = fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {:<5} {}] {}",
                Local::now().format(LOG_TIMESTAMP_FORMAT),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level);

    for target in DRIVER_TARGETS {
        dispatch = dispatch.level_for(target, driver_level);
    }

    if logging.enabled {
        let path = resolve_log_file(config)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
        }
        let file = fern::log_file(&path).with_context(|| format!("Failed to open log file: {}", path.display()))?;
        Ok(dispatch.chain(file))
    } else {
        Ok(dispatch.chain(std::io::stderr()))
    }
}

/// Log file from the config, falling back to [`get_log_file_path`]
pub fn resolve_log_file(config: &Config) -> Result<PathBuf> {
    match &config.logging.file {
        Some(path) => Ok(path.clone()),
        None => get_log_file_path().context("Could not determine a data directory for the log file"),
    }
}

/// `<data_local_dir>/commander/commander.log`
pub fn get_log_file_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|dir| dir.join(APP_NAME).join(LOG_FILE_NAME))
}
