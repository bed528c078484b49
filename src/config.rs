use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Configuration structure for the application.
/// Handles loading, saving, and managing application settings.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct Config {
    /// Path to the log file. If not specified, logs will be written to a default location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<String>,
}

/// Returns the platform-specific path for the config file.
///
/// # Returns
/// String containing the absolute path to the config file
///
/// # Notes
/// - Uses platform-specific config directory (e.g., ~/.config on Linux)
/// - Falls back to current directory if config directory is unavailable
pub fn get_config_path() -> String {
    dirs::config_dir()
        .unwrap_or_else(|| Path::new(".").to_path_buf())
        .join("name_display")
        .join("config.toml")
        .to_string_lossy()
        .to_string()
}

/// Returns the platform-specific path for the log directory.
///
/// # Returns
/// String containing the absolute path to the log directory
///
/// # Notes
/// - Uses platform-specific config directory (e.g., ~/.config on Linux)
/// - Falls back to current directory if config directory is unavailable
pub fn get_log_dir_path() -> String {
    dirs::config_dir()
        .unwrap_or_else(|| Path::new(".").to_path_buf())
        .join("name_display")
        .join("logs")
        .to_string_lossy()
        .to_string()
}

impl Config {
    /// Loads configuration from the default config file location.
    /// A missing config file yields the default configuration rather than
    /// an error. Environment variables override config file values.
    ///
    /// # Environment Variables
    /// - `NAME_DISPLAY_LOG_FILE` - Override log file path
    ///
    /// # Returns
    /// * `Ok(Config)` - Successfully loaded or defaulted configuration
    /// * `Err(AppError)` - Error occurred while reading or parsing
    pub fn load() -> Result<Self, AppError> {
        let mut config = Self::load_from_path(&get_config_path())?;

        if let Ok(log_file) = std::env::var("NAME_DISPLAY_LOG_FILE") {
            config.log_file_path = Some(log_file);
        }

        Ok(config)
    }

    /// Loads configuration from a specific file path, returning the default
    /// configuration when the file does not exist.
    pub fn load_from_path(path: &str) -> Result<Self, AppError> {
        if Path::new(path).exists() {
            let content = fs::read_to_string(path)?;
            Ok(toml::from_str(&content)?)
        } else {
            Ok(Config::default())
        }
    }

    /// Saves configuration to the default config file location, creating
    /// the config directory if needed.
    pub fn save(&self) -> Result<(), AppError> {
        self.save_to_path(&get_config_path())
    }

    /// Saves configuration to a specific file path.
    pub fn save_to_path(&self, path: &str) -> Result<(), AppError> {
        let path = Path::new(path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Prints the current configuration settings to stdout.
    pub fn display() -> Result<(), AppError> {
        let config = Self::load()?;
        println!("Config file: {}", get_config_path());
        match config.log_file_path {
            Some(path) => println!("Log file: {path}"),
            None => println!("Log file: (default) {}", get_log_dir_path()),
        }
        Ok(())
    }
}
