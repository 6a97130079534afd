//! Centralized error types for fairsky.
//!
//! The forecast library itself is total; errors only arise around it, when
//! configuration or forecast snapshot files are read, or output is written.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error type.
///
/// Use `user_message()` to get a message suitable for display.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Input error: {0}")]
    Input(#[from] InputError),

    #[error("Output error: {0}")]
    Output(#[from] serde_json::Error),
}

impl AppError {
    /// Returns a short, non-technical message.
    pub fn user_message(&self) -> &'static str {
        match self {
            AppError::Config(e) => e.user_message(),
            AppError::Input(e) => e.user_message(),
            AppError::Output(_) => "The forecast data could not be printed.",
        }
    }
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration directory unavailable")]
    NoConfigDir,

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Configuration parse error: {0}")]
    ParseError(#[from] toml::de::Error),
}

impl ConfigError {
    pub fn user_message(&self) -> &'static str {
        match self {
            ConfigError::NoConfigDir => "No configuration directory found. Using defaults.",
            ConfigError::Invalid(_) => "Invalid configuration. Check your settings.",
            ConfigError::ParseError(_) => "Configuration file is malformed. Check your settings.",
        }
    }
}

/// Errors reading a forecast snapshot file.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed forecast data in {path}: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("No current conditions in {path}")]
    MissingCurrent { path: PathBuf },
}

impl InputError {
    pub fn user_message(&self) -> &'static str {
        match self {
            InputError::Read { .. } => "The forecast file could not be read.",
            InputError::Malformed { .. } => "The forecast file is not valid forecast data.",
            InputError::MissingCurrent { .. } => "The forecast file has no current conditions.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_messages_are_non_empty() {
        let errors = vec![
            AppError::Config(ConfigError::NoConfigDir),
            AppError::Config(ConfigError::Invalid("test".into())),
            AppError::Input(InputError::Read {
                path: PathBuf::from("missing.json"),
                source: std::io::Error::from(std::io::ErrorKind::NotFound),
            }),
            AppError::Input(InputError::MissingCurrent {
                path: PathBuf::from("today.json"),
            }),
            AppError::Output(serde_json::from_str::<serde_json::Value>("[").unwrap_err()),
        ];

        for e in errors {
            assert!(!e.user_message().is_empty());
            assert!(!e.to_string().is_empty());
        }
    }

    #[test]
    fn test_app_error_conversion() {
        let app_err: AppError = ConfigError::NoConfigDir.into();
        assert!(matches!(app_err, AppError::Config(ConfigError::NoConfigDir)));

        let app_err: AppError = ConfigError::Invalid("display.bar_max_height".into()).into();
        assert_eq!(
            app_err.user_message(),
            "Invalid configuration. Check your settings."
        );
        assert!(app_err.to_string().contains("display.bar_max_height"));
    }

    #[test]
    fn test_malformed_input_message() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = InputError::Malformed {
            path: PathBuf::from("today.json"),
            source,
        };
        assert!(err.to_string().contains("today.json"));
        assert_eq!(
            AppError::from(err).user_message(),
            "The forecast file is not valid forecast data."
        );
    }
}
