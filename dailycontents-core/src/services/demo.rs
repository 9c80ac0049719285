//! Demo service - manage demo mode
//!
//! Demo mode serves bundled users and posts instead of calling the
//! placeholder API, so the CLI works offline.

use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::Serialize;

use crate::config::Config;

/// Which content source commands will read from, and why
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DemoStatus {
    /// Effective demo mode, environment override included
    pub enabled: bool,
    /// Demo mode as stored in settings.json
    pub saved: bool,
    /// Value of `DAILY_CONTENTS_DEMO_MODE` when it is set
    pub env_override: Option<bool>,
    /// Name of the content source in use
    pub source: String,
    /// Base URL that would be fetched from; `None` in demo mode
    pub api_base_url: Option<String>,
}

/// Demo service for managing demo mode
pub struct DemoService {
    data_dir: PathBuf,
}

impl DemoService {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            data_dir: data_dir.to_path_buf(),
        }
    }

    /// Check if demo mode is currently enabled
    pub fn is_enabled(&self) -> Result<bool> {
        let config = Config::load(&self.data_dir)?;
        Ok(config.demo_mode)
    }

    pub fn enable(&self) -> Result<()> {
        self.save_demo_mode(true)
    }

    pub fn disable(&self) -> Result<()> {
        self.save_demo_mode(false)
    }

    /// Resolve the content source the current settings select
    pub fn status(&self) -> Result<DemoStatus> {
        let config = Config::load(&self.data_dir)?;
        let env_override = Config::demo_mode_override();
        let saved = match env_override {
            // Load already applied the override; strip it to see the file value
            Some(_) => self.saved_demo_mode(),
            None => config.demo_mode,
        };

        let source = config.content_source()?;
        Ok(DemoStatus {
            enabled: config.demo_mode,
            saved,
            env_override,
            source: source.name().to_string(),
            api_base_url: (!config.demo_mode).then(|| config.api_base_url().to_string()),
        })
    }

    fn saved_demo_mode(&self) -> bool {
        std::fs::read_to_string(self.data_dir.join("settings.json"))
            .ok()
            .and_then(|content| serde_json::from_str::<serde_json::Value>(&content).ok())
            .and_then(|settings| settings["app"]["demoMode"].as_bool())
            .unwrap_or(false)
    }

    fn save_demo_mode(&self, enabled: bool) -> Result<()> {
        let mut config = Config::load(&self.data_dir).unwrap_or_default();
        if enabled {
            config.enable_demo_mode();
        } else {
            config.disable_demo_mode();
        }
        config.save(&self.data_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    use crate::config::API_URL_ENV;

    /// Environment variables that would override what settings.json says
    fn env_decides() -> bool {
        Config::demo_mode_override().is_some() || std::env::var(API_URL_ENV).is_ok()
    }

    #[test]
    fn test_toggle_persists_to_settings() {
        let dir = tempdir().unwrap();
        let service = DemoService::new(dir.path());

        service.enable().unwrap();
        let saved = std::fs::read_to_string(dir.path().join("settings.json")).unwrap();
        assert!(saved.contains("\"demoMode\": true"));
        assert!(service.saved_demo_mode());

        service.disable().unwrap();
        let saved = std::fs::read_to_string(dir.path().join("settings.json")).unwrap();
        assert!(saved.contains("\"demoMode\": false"));
        assert!(!service.saved_demo_mode());
    }

    #[test]
    fn test_status_reports_active_source() {
        if env_decides() {
            return;
        }
        let dir = tempdir().unwrap();
        let service = DemoService::new(dir.path());

        service.enable().unwrap();
        let status = service.status().unwrap();
        assert!(status.enabled);
        assert!(status.saved);
        assert_eq!(status.source, "demo");
        assert_eq!(status.api_base_url, None);

        service.disable().unwrap();
        let status = service.status().unwrap();
        assert!(!status.enabled);
        assert_eq!(status.source, "jsonplaceholder");
        assert_eq!(
            status.api_base_url.as_deref(),
            Some(Config::default().api_base_url())
        );
    }

    #[test]
    fn test_status_shows_custom_base_url() {
        if env_decides() {
            return;
        }
        let dir = tempdir().unwrap();
        std::fs::write(
            dir.path().join("settings.json"),
            r#"{ "app": { "demoMode": false, "apiBaseUrl": "http://localhost:3000" } }"#,
        )
        .unwrap();

        let status = DemoService::new(dir.path()).status().unwrap();
        assert_eq!(status.api_base_url.as_deref(), Some("http://localhost:3000"));
    }
}
