//! Client settings management
//!
//! Stores non-sensitive configuration in a plain JSON file.
//! Credentials are never written here; callers supply them at runtime.

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;
use url::Url;

use crate::credential::{AuthScheme, UsernamePolicy};
use crate::error::{CoreError, Result};

/// Challonge v1 API root
pub const DEFAULT_BASE_URL: &str = "https://api.challonge.com/v1/";

const SETTINGS_FILE: &str = "settings.json";

/// Client settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    /// Settings file version
    pub version: u32,
    /// API root, must end with '/' to be joined correctly
    pub base_url: String,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
    /// How credentials are attached to requests
    pub auth_scheme: AuthScheme,
    /// Whether key-only credentials are accepted
    pub username_policy: UsernamePolicy,
    /// User-Agent header sent with every request
    pub user_agent: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            version: 1,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
            auth_scheme: AuthScheme::Basic,
            username_policy: UsernamePolicy::Required,
            user_agent: concat!("challonge-client/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl Settings {
    /// Parsed base URL, normalised to end with '/'
    pub fn base_url(&self) -> Result<Url> {
        let mut raw = self.base_url.trim().to_string();
        if !raw.ends_with('/') {
            raw.push('/');
        }

        let url = Url::parse(&raw)
            .map_err(|e| CoreError::InvalidSettings(format!("base URL {}: {}", raw, e)))?;

        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(CoreError::InvalidSettings(format!(
                "unsupported URL scheme: {}",
                other
            ))),
        }
    }

    /// Validate settings before use
    pub fn validate(&self) -> Result<()> {
        self.base_url()?;

        if self.timeout_secs == 0 {
            return Err(CoreError::InvalidSettings(
                "timeout must be at least 1 second".to_string(),
            ));
        }

        if let AuthScheme::QueryKey { param } | AuthScheme::Header { name: param } =
            &self.auth_scheme
        {
            if param.trim().is_empty() {
                return Err(CoreError::InvalidSettings(
                    "auth scheme needs a parameter or header name".to_string(),
                ));
            }
        }

        if self.auth_scheme.requires_username() && self.username_policy == UsernamePolicy::Optional
        {
            debug!("Basic auth with optional usernames: key-only credentials will be rejected");
        }

        Ok(())
    }
}

/// Settings manager
pub struct SettingsManager {
    settings_file: PathBuf,
    settings: Settings,
}

impl SettingsManager {
    /// Create a settings manager backed by `<dir>/settings.json`
    pub fn new(config_dir: &Path) -> Result<Self> {
        let settings_file = config_dir.join(SETTINGS_FILE);
        let settings = Self::load_from_file(&settings_file)?;

        Ok(Self {
            settings_file,
            settings,
        })
    }

    /// Create a settings manager in the platform config directory
    pub fn from_default_dir() -> Result<Self> {
        Self::new(&Self::default_dir()?)
    }

    /// Platform config directory for this client
    pub fn default_dir() -> Result<PathBuf> {
        ProjectDirs::from("com", "challonge", "challonge-client")
            .map(|dirs| dirs.config_dir().to_path_buf())
            .ok_or(CoreError::NoConfigDir)
    }

    fn load_from_file(path: &Path) -> Result<Settings> {
        if !path.exists() {
            debug!("No settings file found, using defaults");
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(path)?;
        let settings: Settings = serde_json::from_str(&contents)?;
        settings.validate()?;
        debug!("Loaded settings from {:?}", path);
        Ok(settings)
    }

    /// Save settings to file
    pub async fn save(&self) -> Result<()> {
        self.settings.validate()?;
        let contents = serde_json::to_string_pretty(&self.settings)?;

        if let Some(parent) = self.settings_file.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        // Write atomically using temp file
        let temp_path = self.settings_file.with_extension("tmp");
        tokio::fs::write(&temp_path, &contents).await?;
        tokio::fs::rename(&temp_path, &self.settings_file).await?;

        debug!("Saved settings to {:?}", self.settings_file);
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.settings_file
    }

    /// Get current settings
    pub fn get(&self) -> &Settings {
        &self.settings
    }

    /// Get mutable settings
    pub fn get_mut(&mut self) -> &mut Settings {
        &mut self.settings
    }

    /// Replace settings and save
    pub async fn update(&mut self, settings: Settings) -> Result<()> {
        settings.validate()?;
        self.settings = settings;
        self.save().await
    }

    /// Reset settings to defaults and delete the settings file
    pub async fn reset(&mut self) -> Result<()> {
        self.settings = Settings::default();

        if self.settings_file.exists() {
            tokio::fs::remove_file(&self.settings_file).await?;
        }

        Ok(())
    }
}
