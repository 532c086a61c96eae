//! Configuration file handling for ~/.terralayer/config.ini.
//!
//! Loads and saves user configuration with sensible defaults. Missing
//! files load as defaults; invalid values fail with the offending
//! section and key named.

use super::fetch::{FetchConfig, DEFAULT_FETCH_TIMEOUT_SECS};
use crate::provider::{BingMapsStyle, ProviderConfig};
use ini::Ini;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Configuration file errors.
#[derive(Debug, Error)]
pub enum ConfigFileError {
    /// Failed to read config file
    #[error("Failed to read config file: {0}")]
    Read(#[from] ini::Error),

    /// Failed to write config file
    #[error("Failed to write config file: {0}")]
    Write(String),

    /// Invalid configuration value
    #[error("Invalid configuration: {section}.{key} = '{value}' - {reason}")]
    InvalidValue {
        section: String,
        key: String,
        value: String,
        reason: String,
    },

    /// Failed to create config directory
    #[error("Failed to create config directory: {0}")]
    Directory(std::io::Error),
}

impl ConfigFileError {
    fn invalid(section: &str, key: &str, value: &str, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            section: section.to_string(),
            key: key.to_string(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }
}

/// `[provider]` section settings.
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderSettings {
    /// Provider backend: "bing" or "xyz"
    pub provider_type: String,
    /// API key for keyed providers
    pub api_key: Option<String>,
    /// Bing map view style
    pub style: String,
    /// URL template for XYZ providers
    pub url_template: Option<String>,
    /// Maximum zoom level for XYZ providers
    pub max_zoom: u8,
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self {
            provider_type: "bing".to_string(),
            api_key: None,
            style: "aerial".to_string(),
            url_template: None,
            max_zoom: 19,
        }
    }
}

/// `[download]` section settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DownloadSettings {
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for DownloadSettings {
    fn default() -> Self {
        Self {
            timeout_secs: DEFAULT_FETCH_TIMEOUT_SECS,
        }
    }
}

/// User configuration persisted as an INI file.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ConfigFile {
    pub provider: ProviderSettings,
    pub download: DownloadSettings,
}

impl ConfigFile {
    /// Load configuration from the default path (~/.terralayer/config.ini).
    ///
    /// If the file doesn't exist, returns defaults.
    pub fn load() -> Result<Self, ConfigFileError> {
        let path = config_file_path();
        Self::load_from(&path)
    }

    /// Load configuration from a specific path.
    ///
    /// If the file doesn't exist, returns defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigFileError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let ini = Ini::load_from_file(path)?;
        Self::parse_ini(&ini)
    }

    /// Save configuration to the default path (~/.terralayer/config.ini).
    pub fn save(&self) -> Result<(), ConfigFileError> {
        let path = config_file_path();
        self.save_to(&path)
    }

    /// Save configuration to a specific path.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigFileError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(ConfigFileError::Directory)?;
        }

        let mut ini = Ini::new();
        ini.with_section(Some("provider"))
            .set("type", &self.provider.provider_type)
            .set("style", &self.provider.style)
            .set("max_zoom", self.provider.max_zoom.to_string());
        if let Some(api_key) = &self.provider.api_key {
            ini.set_to(Some("provider"), "api_key".to_string(), api_key.clone());
        }
        if let Some(url_template) = &self.provider.url_template {
            ini.set_to(
                Some("provider"),
                "url_template".to_string(),
                url_template.clone(),
            );
        }
        ini.with_section(Some("download"))
            .set("timeout", self.download.timeout_secs.to_string());

        ini.write_to_file(path)
            .map_err(|e| ConfigFileError::Write(e.to_string()))
    }

    /// Create the default config file if it doesn't exist.
    ///
    /// Returns the path to the config file.
    pub fn ensure_exists() -> Result<PathBuf, ConfigFileError> {
        let path = config_file_path();
        if !path.exists() {
            let config = Self::default();
            config.save_to(&path)?;
        }
        Ok(path)
    }

    /// Builds the provider configuration described by this file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigFileError::InvalidValue` for an unknown provider
    /// type, an unparseable style, or an XYZ provider without a URL
    /// template.
    pub fn to_provider_config(&self) -> Result<ProviderConfig, ConfigFileError> {
        match self.provider.provider_type.as_str() {
            "bing" => {
                let style: BingMapsStyle = self.provider.style.parse().map_err(|_| {
                    ConfigFileError::invalid(
                        "provider",
                        "style",
                        &self.provider.style,
                        "unknown Bing map style",
                    )
                })?;
                Ok(ProviderConfig::bing(
                    self.provider.api_key.clone().unwrap_or_default(),
                    style,
                ))
            }
            "xyz" => {
                let template = self.provider.url_template.as_ref().ok_or_else(|| {
                    ConfigFileError::invalid(
                        "provider",
                        "url_template",
                        "",
                        "required for xyz providers",
                    )
                })?;
                Ok(ProviderConfig::xyz(
                    "XYZ",
                    template.clone(),
                    self.provider.max_zoom,
                ))
            }
            other => Err(ConfigFileError::invalid(
                "provider",
                "type",
                other,
                "must be 'bing' or 'xyz'",
            )),
        }
    }

    /// Builds the fetch configuration described by this file.
    pub fn to_fetch_config(&self) -> FetchConfig {
        FetchConfig::new().with_timeout_secs(self.download.timeout_secs)
    }

    fn parse_ini(ini: &Ini) -> Result<Self, ConfigFileError> {
        let mut config = Self::default();

        if let Some(section) = ini.section(Some("provider")) {
            if let Some(provider_type) = section.get("type") {
                config.provider.provider_type = provider_type.to_string();
            }
            if let Some(api_key) = section.get("api_key") {
                config.provider.api_key = Some(api_key.to_string());
            }
            if let Some(style) = section.get("style") {
                config.provider.style = style.to_string();
            }
            if let Some(url_template) = section.get("url_template") {
                config.provider.url_template = Some(url_template.to_string());
            }
            if let Some(max_zoom) = section.get("max_zoom") {
                config.provider.max_zoom = max_zoom.parse().map_err(|_| {
                    ConfigFileError::invalid(
                        "provider",
                        "max_zoom",
                        max_zoom,
                        "must be an integer zoom level",
                    )
                })?;
            }
        }

        if let Some(section) = ini.section(Some("download")) {
            if let Some(timeout) = section.get("timeout") {
                config.download.timeout_secs = timeout.parse().map_err(|_| {
                    ConfigFileError::invalid(
                        "download",
                        "timeout",
                        timeout,
                        "must be a number of seconds",
                    )
                })?;
            }
        }

        Ok(config)
    }
}

/// Get the path to the config directory (~/.terralayer).
pub fn config_directory() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".terralayer")
}

/// Get the path to the config file (~/.terralayer/config.ini).
pub fn config_file_path() -> PathBuf {
    config_directory().join("config.ini")
}
