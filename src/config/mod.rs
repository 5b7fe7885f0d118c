// Configuration management: TOML settings plus interactive setup.

pub mod interactive;
pub mod settings;

pub use interactive::{run_interactive_config, show_config};
pub use settings::{Config, ConfigError, LinkConfig, STORE_PATH_ENV, StoreConfig};

/// Get the configuration directory path
#[inline]
pub fn get_config_dir() -> Result<std::path::PathBuf, ConfigError> {
    dirs::config_dir()
        .map(|dir| dir.join("rfc-scout"))
        .ok_or(ConfigError::DirectoryError)
}
