//! Application configuration management
//!
//! Configuration covers only where output goes, how loudly to log, and how
//! to seed the generator. The experiment itself is fixed in `constants`.

use std::env;
use std::path::PathBuf;

use crate::constants::{DEFAULT_LOG_FILTER, DEFAULT_REPORT_PATH};

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub logging: LoggingConfig,
    pub report: ReportConfig,
    pub generator: GeneratorConfig,
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Filter used when RUST_LOG is not set for the subscriber
    pub rust_log: String,
}

/// Report output configuration
#[derive(Debug, Clone)]
pub struct ReportConfig {
    pub html_path: PathBuf,
    /// Optional JSON dump of the raw result set
    pub json_path: Option<PathBuf>,
}

/// Array generator configuration
#[derive(Debug, Clone, Default)]
pub struct GeneratorConfig {
    /// Fixed seed for reproducible arrays; entropy-seeded when absent
    pub seed: Option<u64>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            logging: LoggingConfig::from_lookup(&lookup),
            report: ReportConfig::from_lookup(&lookup)?,
            generator: GeneratorConfig::from_lookup(&lookup)?,
        })
    }
}

impl LoggingConfig {
    fn from_lookup<F: Fn(&str) -> Option<String>>(lookup: &F) -> Self {
        Self {
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
        }
    }
}

impl ReportConfig {
    fn from_lookup<F: Fn(&str) -> Option<String>>(lookup: &F) -> Result<Self, ConfigError> {
        let html_path = lookup("REPORT_PATH").unwrap_or_else(|| DEFAULT_REPORT_PATH.to_string());
        if html_path.trim().is_empty() {
            return Err(ConfigError::InvalidValue("REPORT_PATH".to_string()));
        }

        Ok(Self {
            html_path: PathBuf::from(html_path),
            json_path: lookup("REPORT_JSON_PATH")
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from),
        })
    }
}

impl GeneratorConfig {
    fn from_lookup<F: Fn(&str) -> Option<String>>(lookup: &F) -> Result<Self, ConfigError> {
        let seed = match lookup("GENERATOR_SEED") {
            Some(raw) => Some(
                raw.trim()
                    .parse()
                    .map_err(|_| ConfigError::InvalidValue("GENERATOR_SEED".to_string()))?,
            ),
            None => None,
        };

        Ok(Self { seed })
    }
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(String),
}
