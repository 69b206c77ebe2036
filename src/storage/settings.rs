//! Client settings and configuration

use crate::protocol::DEFAULT_API_URL;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Environment variable overriding the backend base URL
pub const API_URL_ENV: &str = "CHEFMATE_API_URL";

/// Default directory for settings, local storage and logs
pub const DEFAULT_DATA_DIR: &str = "./app_data";

/// Client settings
///
/// Persistent configuration for the ChefMate client, stored as JSON.
/// Missing fields take their defaults, so older files keep loading.
///
/// # Example
/// ```rust,no_run
/// use chefmate::storage::Settings;
///
/// // Load settings (returns default if file doesn't exist)
/// let settings = Settings::load("settings.json")
///     .expect("Failed to load")
///     .with_env_override();
///
/// println!("Backend: {}", settings.api_url);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Backend base URL, without trailing slash
    pub api_url: String,
    /// Log file path
    pub log_path: String,
}

impl Settings {
    /// Load settings from a JSON file
    ///
    /// # Arguments
    /// * `path` - Path to the settings file
    ///
    /// # Returns
    /// The loaded settings, or default settings if the file doesn't exist or is empty
    pub fn load<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Ok(Self::default());
        }

        let data = std::fs::read_to_string(path)
            .map_err(|e| Error::Storage(format!("Failed to read settings: {}", e)))?;

        if data.trim().is_empty() {
            return Ok(Self::default());
        }

        let mut settings: Self = serde_json::from_str(&data)
            .map_err(|e| Error::Storage(format!("Failed to parse settings: {}", e)))?;
        settings.api_url = normalize_url(&settings.api_url);

        Ok(settings)
    }

    /// Save settings to a JSON file, creating the parent directory if needed
    pub fn save<P: AsRef<std::path::Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| Error::Storage(format!("Failed to create settings directory: {}", e)))?;
        }

        let json = serde_json::to_string_pretty(self)
            .map_err(|e| Error::Storage(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(path, json)
            .map_err(|e| Error::Storage(format!("Failed to write settings: {}", e)))?;

        Ok(())
    }

    /// Apply `CHEFMATE_API_URL` from the process environment
    pub fn with_env_override(self) -> Self {
        let value = std::env::var(API_URL_ENV).ok();
        self.with_api_url_override(value)
    }

    /// Replace the base URL when `value` is present and non-blank
    pub fn with_api_url_override(mut self, value: Option<String>) -> Self {
        if let Some(url) = value {
            if !url.trim().is_empty() {
                self.api_url = normalize_url(&url);
            }
        }
        self
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            log_path: format!("{}/chefmate.log", DEFAULT_DATA_DIR),
        }
    }
}

fn normalize_url(url: &str) -> String {
    let trimmed = url.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        DEFAULT_API_URL.to_string()
    } else {
        trimmed.to_string()
    }
}
