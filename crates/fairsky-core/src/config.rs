use anyhow::{Context, Result};
use chrono::FixedOffset;
use fairsky_weather::{format, UnitSystem};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// Largest UTC offset any real time zone uses
const MAX_UTC_OFFSET_SECONDS: i32 = 18 * 3600;

/// Configuration validation errors
#[derive(Debug, Clone)]
pub struct ConfigValidationError {
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Result of config validation
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    pub errors: Vec<ConfigValidationError>,
    pub warnings: Vec<ConfigValidationError>,
}

impl ValidationResult {
    /// Returns true if there are no errors (warnings are OK)
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn add_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.push(ConfigValidationError {
            field: field.into(),
            message: message.into(),
        });
    }

    pub fn add_warning(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.warnings.push(ConfigValidationError {
            field: field.into(),
            message: message.into(),
        });
    }

    /// Get a user-friendly message summarizing all errors
    pub fn error_summary(&self) -> String {
        self.errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join("; ")
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Weather settings
    #[serde(default)]
    pub weather: WeatherConfig,

    /// Chart and label settings
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// Metric or imperial
    #[serde(default)]
    pub units: UnitSystem,

    /// Heading printed above the current conditions
    #[serde(default = "default_location_title")]
    pub location_title: String,
}

fn default_location_title() -> String {
    "Current Location".to_string()
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            units: UnitSystem::default(),
            location_title: default_location_title(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Height a full hourly bar is drawn at
    #[serde(default = "default_bar_max_height")]
    pub bar_max_height: f64,

    /// Seconds east of UTC used when a forecast carries no offset
    #[serde(default)]
    pub utc_offset_seconds: Option<i32>,
}

fn default_bar_max_height() -> f64 {
    90.0
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            bar_max_height: default_bar_max_height(),
            utc_offset_seconds: None,
        }
    }
}

impl DisplayConfig {
    pub fn fallback_offset(&self) -> FixedOffset {
        self.utc_offset_seconds
            .map(format::offset_from_seconds)
            .unwrap_or_else(format::utc)
    }
}

impl Config {
    /// Load configuration from `path`, writing defaults there if it doesn't exist
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be read or parsed, or the defaults cannot be written.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::info!("No config at {}, writing defaults", path.display());
            let config = Self::default();
            config.save_to(path)?;
            return Ok(config);
        }

        let contents = std::fs::read_to_string(path).context("Failed to read config file")?;

        let config: Config = toml::from_str(&contents)
            .map_err(ConfigError::from)
            .context("Failed to parse config file")?;

        Ok(config)
    }

    /// Load configuration from `path`, falling back to defaults if it can't be loaded
    pub fn load_or_default_from(path: &Path) -> Self {
        match Self::load_from(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(
                    "Failed to load config from {}: {:#}. Using defaults",
                    path.display(),
                    e
                );
                Self::default()
            }
        }
    }

    /// Load configuration from the default location and validate it
    ///
    /// An unreadable or missing config falls back to defaults; warnings are logged.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if validation finds critical errors.
    pub fn load_validated() -> Result<(Self, ValidationResult), ConfigError> {
        match Self::config_path() {
            Ok(path) => Self::load_validated_from(&path),
            Err(e) => {
                tracing::warn!("{}. Using default configuration", e);
                Self::default().validated()
            }
        }
    }

    /// Same as [`Config::load_validated`], from `path`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if validation finds critical errors.
    pub fn load_validated_from(path: &Path) -> Result<(Self, ValidationResult), ConfigError> {
        Self::load_or_default_from(path).validated()
    }

    fn validated(self) -> Result<(Self, ValidationResult), ConfigError> {
        let validation = self.validate();

        if !validation.is_valid() {
            return Err(ConfigError::Invalid(validation.error_summary()));
        }

        for warning in &validation.warnings {
            tracing::warn!("Config warning: {}", warning);
        }

        Ok((self, validation))
    }

    pub fn validate(&self) -> ValidationResult {
        let mut result = ValidationResult::default();

        if !self.display.bar_max_height.is_finite() || self.display.bar_max_height <= 0.0 {
            result.add_error(
                "display.bar_max_height",
                "Bar height must be a positive number",
            );
        }

        if let Some(offset) = self.display.utc_offset_seconds {
            if offset.abs() > MAX_UTC_OFFSET_SECONDS {
                result.add_error(
                    "display.utc_offset_seconds",
                    format!("Offset {} is beyond +/-18 hours", offset),
                );
            }
        }

        if self.weather.location_title.trim().is_empty() {
            result.add_warning("weather.location_title", "Location title is empty");
        }

        result
    }

    /// # Errors
    ///
    /// Fails if the directory or file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;

        std::fs::write(path, contents).context("Failed to write config file")?;

        Ok(())
    }

    /// Get the path to the configuration file
    fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir()
            .ok_or(ConfigError::NoConfigDir)?
            .join("fairsky");

        Ok(config_dir.join("config.toml"))
    }
}
