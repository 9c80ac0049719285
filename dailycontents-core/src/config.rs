//! Configuration management
//!
//! Settings live in `settings.json` inside the data directory:
//! ```json
//! {
//!   "app": { "demoMode": false, "apiBaseUrl": "https://jsonplaceholder.typicode.com" }
//! }
//! ```
//! Keys this crate does not manage are preserved on save.

use std::collections::HashMap;
use std::path::Path;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::adapters::demo::DemoSource;
use crate::adapters::jsonplaceholder::{JsonPlaceholderSource, JSONPLACEHOLDER_URL};
use crate::ports::ContentSource;

/// Environment override for demo mode (for CI/testing)
pub const DEMO_MODE_ENV: &str = "DAILY_CONTENTS_DEMO_MODE";

/// Environment override for the API base URL
pub const API_URL_ENV: &str = "DAILY_CONTENTS_API_URL";

/// Raw settings.json structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SettingsFile {
    #[serde(default)]
    app: AppSettings,
    #[serde(flatten)]
    other: HashMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AppSettings {
    #[serde(default)]
    demo_mode: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    api_base_url: Option<String>,
    #[serde(flatten)]
    other: HashMap<String, serde_json::Value>,
}

/// Daily Contents configuration
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub demo_mode: bool,
    /// Base URL of the placeholder API; `None` means the public endpoint
    pub api_base_url: Option<String>,
}

pub(crate) fn parse_bool_env(value: Option<&str>) -> Option<bool> {
    match value {
        Some("true" | "1" | "yes" | "TRUE" | "YES") => Some(true),
        Some("false" | "0" | "no" | "FALSE" | "NO") => Some(false),
        _ => None,
    }
}

impl Config {
    /// Load config from the data directory
    ///
    /// Environment variables win over the settings file. A missing or
    /// unreadable settings file yields the defaults.
    pub fn load(data_dir: &Path) -> Result<Self> {
        let settings_path = data_dir.join("settings.json");

        let raw: SettingsFile = if settings_path.exists() {
            let content = std::fs::read_to_string(&settings_path)?;
            serde_json::from_str(&content).unwrap_or_default()
        } else {
            SettingsFile::default()
        };

        let demo_mode = Self::demo_mode_override().unwrap_or(raw.app.demo_mode);

        let api_base_url = std::env::var(API_URL_ENV)
            .ok()
            .filter(|url| !url.trim().is_empty())
            .or(raw.app.api_base_url);

        Ok(Self {
            demo_mode,
            api_base_url,
        })
    }

    /// Save config to the data directory, keeping unmanaged settings
    pub fn save(&self, data_dir: &Path) -> Result<()> {
        let settings_path = data_dir.join("settings.json");

        let mut settings = if settings_path.exists() {
            let content = std::fs::read_to_string(&settings_path)?;
            serde_json::from_str::<SettingsFile>(&content).unwrap_or_default()
        } else {
            SettingsFile::default()
        };

        settings.app.demo_mode = self.demo_mode;
        settings.app.api_base_url = self.api_base_url.clone();

        let content = serde_json::to_string_pretty(&settings)?;
        std::fs::write(&settings_path, content)?;
        Ok(())
    }

    pub fn enable_demo_mode(&mut self) {
        self.demo_mode = true;
    }

    pub fn disable_demo_mode(&mut self) {
        self.demo_mode = false;
    }

    /// Effective API base URL
    pub fn api_base_url(&self) -> &str {
        self.api_base_url.as_deref().unwrap_or(JSONPLACEHOLDER_URL)
    }

    /// Demo mode as forced by `DAILY_CONTENTS_DEMO_MODE`, if set
    pub fn demo_mode_override() -> Option<bool> {
        parse_bool_env(std::env::var(DEMO_MODE_ENV).ok().as_deref())
    }

    /// Build the content source this configuration selects
    pub fn content_source(&self) -> Result<Box<dyn ContentSource>> {
        if self.demo_mode {
            Ok(Box::new(DemoSource::new()))
        } else {
            Ok(Box::new(JsonPlaceholderSource::new(self.api_base_url())?))
        }
    }
}
