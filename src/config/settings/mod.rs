
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use url::Url;

/// Environment override for the record store location; wins over the value
/// in the config file.
pub const STORE_PATH_ENV: &str = "RFC_SCOUT_DB";

/// Placeholder interpolated with a record number when building document
/// links.
pub const NUMBER_PLACEHOLDER: &str = "{number}";

const DEFAULT_URL_TEMPLATE: &str = "https://www.rfc-editor.org/rfc/rfc{number}.html";
const DEFAULT_STORE_FILENAME: &str = "rfc_index.db";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub links: LinkConfig,
    #[serde(skip)]
    pub base_dir: PathBuf,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct StoreConfig {
    /// Explicit record store path. When absent, the store is expected beside
    /// the config file.
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LinkConfig {
    pub url_template: String,
}

impl Default for LinkConfig {
    #[inline]
    fn default() -> Self {
        Self {
            url_template: DEFAULT_URL_TEMPLATE.to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration directory not found or could not be created")]
    DirectoryError,
    #[error("URL template {0} is missing the {{number}} placeholder")]
    MissingPlaceholder(String),
    #[error("URL template renders to an invalid URL: {0}")]
    InvalidTemplate(String),
    #[error("Record store path cannot be empty")]
    EmptyStorePath,
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parsing error: {0}")]
    TomlParse(#[from] toml::de::Error),
    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl Config {
    #[inline]
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join("config.toml");

        if !config_path.exists() {
            return Ok(Self {
                store: StoreConfig::default(),
                links: LinkConfig::default(),
                base_dir: config_dir.as_ref().to_path_buf(),
            });
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;

        let mut config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", config_path.display()))?;
        config.base_dir = config_dir.as_ref().to_path_buf();

        config
            .validate()
            .with_context(|| "Configuration validation failed")?;

        Ok(config)
    }

    #[inline]
    pub fn save(&self) -> Result<()> {
        self.validate()
            .context("Configuration validation failed before saving")?;

        let config_dir = self.get_base_dir();

        fs::create_dir_all(config_dir).with_context(|| {
            format!(
                "Failed to create config directory: {}",
                config_dir.display()
            )
        })?;

        let config_path = self.config_file_path();
        let content = toml::to_string_pretty(self).context("Failed to serialize config to TOML")?;

        fs::write(&config_path, content)
            .with_context(|| format!("Failed to write config file: {}", config_path.display()))?;

        Ok(())
    }

    /// Get the base directory for the application
    #[inline]
    pub fn get_base_dir(&self) -> &Path {
        &self.base_dir
    }

    #[inline]
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.links.validate()?;

        if let Some(path) = &self.store.path {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::EmptyStorePath);
            }
        }

        Ok(())
    }

    #[inline]
    pub fn config_file_path(&self) -> PathBuf {
        self.get_base_dir().join("config.toml")
    }

    /// Resolves the record store path once, at lookup time: environment
    /// override first, then the configured path, then the default beside
    /// the config file.
    #[inline]
    pub fn store_path(&self) -> PathBuf {
        self.resolve_store_path(std::env::var_os(STORE_PATH_ENV))
    }

    fn resolve_store_path(&self, env_override: Option<OsString>) -> PathBuf {
        if let Some(value) = env_override {
            if !value.is_empty() {
                return PathBuf::from(value);
            }
        }

        self.store
            .path
            .clone()
            .unwrap_or_else(|| self.base_dir.join(DEFAULT_STORE_FILENAME))
    }
}

impl LinkConfig {
    #[inline]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.url_template.contains(NUMBER_PLACEHOLDER) {
            return Err(ConfigError::MissingPlaceholder(self.url_template.clone()));
        }

        let sample = self.url_template.replace(NUMBER_PLACEHOLDER, "7821");
        Url::parse(&sample).map_err(|_| ConfigError::InvalidTemplate(sample))?;

        Ok(())
    }

    #[inline]
    pub fn set_url_template(&mut self, template: String) -> Result<(), ConfigError> {
        let candidate = LinkConfig {
            url_template: template,
        };
        candidate.validate()?;
        self.url_template = candidate.url_template;
        Ok(())
    }
}
