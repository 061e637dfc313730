//! User configuration loaded from `config.toml`.
//!
//! Every key is optional. A missing file means defaults; the caller decides
//! what to do with a malformed one.

use crate::app::theme::Theme;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const APP_NAME: &str = "contactdesk";
pub const DEFAULT_LOG_FILTER: &str = "contactdesk=info,eframe=info,egui=warn,wgpu=warn,winit=warn";
const SEED_FILE_NAME: &str = "contacts.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Theme the window opens with
    pub theme: Theme,
    pub start_maximized: bool,
    /// Tracing filter directive; `RUST_LOG` still wins when set
    pub log_filter: Option<String>,
    /// JSON array of contacts to seed the in-memory book with
    pub seed_file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            theme: Theme::Light,
            start_maximized: true,
            log_filter: None,
            seed_file: None,
        }
    }
}

impl AppConfig {
    pub fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("com", "", APP_NAME)
    }

    pub fn default_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Load from the default location; a missing file yields defaults
    pub fn load() -> Result<Self> {
        match Self::default_path() {
            Some(path) if path.exists() => Self::load_from_file(path),
            _ => Ok(Self::default()),
        }
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config: AppConfig = toml::from_str(&content)
            .with_context(|| format!("Invalid config {}", path.display()))?;
        Ok(config)
    }

    pub fn log_filter(&self) -> &str {
        self.log_filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER)
    }

    /// Configured seed file, else `contacts.json` in the data dir if it exists
    pub fn seed_file(&self) -> Option<PathBuf> {
        if let Some(path) = &self.seed_file {
            return Some(path.clone());
        }
        Self::project_dirs()
            .map(|dirs| dirs.data_dir().join(SEED_FILE_NAME))
            .filter(|path| path.exists())
    }
}
