//! Configuration management for jirafmt.
//!
//! Settings are read from `config.toml` in the platform configuration
//! directory (e.g. `~/.config/jirafmt/config.toml` on Linux). A missing file
//! is not an error and yields the default settings.

mod settings;

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

pub use settings::Settings;

/// Name of the configuration file.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Errors that can occur while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The platform configuration directory could not be determined.
    #[error("Could not determine configuration directory")]
    NoConfigDir,

    /// The configuration file could not be read.
    #[error("Failed to read configuration: {0}")]
    ReadError(#[from] std::io::Error),

    /// The configuration file is not valid TOML or has wrong value types.
    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] toml::de::Error),

    /// The configuration values are inconsistent.
    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Get the default configuration file path.
pub fn config_path() -> Result<PathBuf> {
    let base_dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
    Ok(base_dir.join("jirafmt").join(CONFIG_FILE_NAME))
}

/// Load settings from the default location.
pub fn load() -> Result<Settings> {
    load_from(&config_path()?)
}

/// Load settings from `path`, falling back to defaults if it does not exist.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read, parsed, or
/// validated.
pub fn load_from(path: &Path) -> Result<Settings> {
    if !path.exists() {
        debug!(path = %path.display(), "No configuration file, using defaults");
        return Ok(Settings::default());
    }

    let contents = std::fs::read_to_string(path)?;
    let settings: Settings = toml::from_str(&contents)?;
    settings.validate()?;

    debug!(path = %path.display(), "Loaded configuration");
    Ok(settings)
}
