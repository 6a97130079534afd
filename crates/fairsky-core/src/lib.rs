pub mod config;
pub mod error;

pub use config::{Config, DisplayConfig, ValidationResult, WeatherConfig};
pub use error::{AppError, ConfigError, InputError};

use anyhow::Result;

/// Initialize logging. `RUST_LOG` overrides the default `info` filter.
///
/// # Errors
///
/// Does not fail at present.
pub fn init() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("fairsky core initialized");
    Ok(())
}
