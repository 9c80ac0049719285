//! Daily Contents Core - users, posts and the "Add New User" form
//!
//! This crate follows hexagonal architecture:
//!
//! - **domain**: Record shapes (User, Post) and the closed set of field paths
//! - **ports**: Trait definitions for external dependencies (ContentSource)
//! - **services**: Merge engine, form session, directory, rendering, logging
//! - **adapters**: Concrete implementations (JSONPlaceholder HTTP, demo data)

pub mod adapters;
pub mod config;
pub mod domain;
pub mod log_migrations;
pub mod ports;
pub mod services;

use std::path::Path;

use anyhow::Result;

use config::Config;
use services::*;

// Re-export commonly used types at crate root
pub use domain::result::{Error, Submission};
pub use domain::{FieldPath, Post, User, UserData};
pub use services::{EntryPoint, LogEvent, LoggingService};

/// Main context for Daily Contents operations
///
/// Holds the configuration and the services built from it.
pub struct DailyContentsContext {
    pub config: Config,
    pub content_service: ContentService,
}

impl DailyContentsContext {
    pub fn new(data_dir: &Path) -> Result<Self> {
        let config = Config::load(data_dir)?;
        let content_service = ContentService::new(config.content_source()?);

        Ok(Self {
            config,
            content_service,
        })
    }
}
