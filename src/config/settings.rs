//! Application settings management
//!
//! This module defines the configuration structure and provides methods
//! for loading settings from TOML files and environment variables.

use serde::{Deserialize, Serialize};

/// Main application configuration structure
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    pub storage: StorageConfig,
    pub session: SessionConfig,
    pub filter: FilterConfig,
    pub catalog: CatalogConfig,
    pub logging: LoggingConfig,
}

/// Where the signed-in user blob is kept between runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    Memory,
    File,
    Redis,
}

/// Durable session slot configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageConfig {
    pub backend: StorageBackend,
    pub slot_key: String,
    pub file_dir: String,
    pub redis_url: Option<String>,
    pub redis_prefix: String,
}

/// Session store behaviour
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SessionConfig {
    /// Artificial delay applied before login, signup and profile updates resolve
    pub latency_ms: u64,
}

/// Filter engine switches
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FilterConfig {
    pub case_insensitive_location: bool,
}

/// Record store configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CatalogConfig {
    pub fixture_path: Option<String>,
    pub featured_events: usize,
    pub featured_users: usize,
    pub validate_references: bool,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
    pub file_path: Option<String>,
    pub json: bool,
}

impl Settings {
    /// Load settings from configuration file and environment variables
    ///
    /// Defaults are layered first, then `config.toml` (if present), then
    /// `SPORTSBUDDY__SECTION__KEY` environment variables.
    pub fn new() -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::Config::try_from(&Settings::default())?)
            .add_source(config::File::with_name("config").required(false))
            .add_source(
                config::Environment::with_prefix("SPORTSBUDDY")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Validate configuration settings
    pub fn validate(&self) -> Result<(), crate::utils::errors::SportsBuddyError> {
        super::validation::validate_settings(self)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            storage: StorageConfig {
                backend: StorageBackend::File,
                slot_key: "sportsBuddyUser".to_string(),
                file_dir: ".sportsbuddy".to_string(),
                redis_url: None,
                redis_prefix: "sportsbuddy:".to_string(),
            },
            session: SessionConfig { latency_ms: 1000 },
            filter: FilterConfig {
                case_insensitive_location: false,
            },
            catalog: CatalogConfig {
                fixture_path: None,
                featured_events: 3,
                featured_users: 4,
                validate_references: true,
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                file_path: None,
                json: false,
            },
        }
    }
}
