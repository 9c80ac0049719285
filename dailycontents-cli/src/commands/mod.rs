//! CLI command implementations

pub mod add;
pub mod demo;
pub mod logs;
pub mod posts;
pub mod users;

use std::path::PathBuf;

use anyhow::{Context, Result};
use dailycontents_core::{DailyContentsContext, EntryPoint, LogEvent, LoggingService};

/// Environment variable overriding the data directory
pub const DATA_DIR_ENV: &str = "DAILY_CONTENTS_DIR";

/// Get the logging service for CLI operations
///
/// Returns None if logging fails to initialize (shouldn't block operations)
pub fn get_logger() -> Option<LoggingService> {
    let data_dir = get_data_dir().ok()?;
    std::fs::create_dir_all(&data_dir).ok()?;
    LoggingService::new(&data_dir, EntryPoint::Cli, env!("CARGO_PKG_VERSION")).ok()
}

/// Log an event, ignoring any errors (logging should never break the app)
pub fn log_event(logger: &Option<LoggingService>, event: LogEvent) {
    if let Some(l) = logger {
        let _ = l.log(event);
    }
}

/// Get the data directory from environment or default
pub fn get_data_dir() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var(DATA_DIR_ENV) {
        return Ok(PathBuf::from(dir));
    }
    dirs::home_dir()
        .map(|home| home.join(".dailycontents"))
        .context("Could not find home directory")
}

/// Build the context for a command
pub fn get_context() -> Result<DailyContentsContext> {
    let data_dir = get_data_dir()?;

    std::fs::create_dir_all(&data_dir)
        .with_context(|| format!("Failed to create data directory: {:?}", data_dir))?;

    DailyContentsContext::new(&data_dir).context("Failed to initialize context")
}
