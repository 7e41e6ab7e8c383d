//! Configuration validation module
//!
//! This module provides validation functions for application configuration
//! to ensure all required settings are properly configured.

use crate::utils::errors::{SportsBuddyError, Result};
use super::{Settings, StorageBackend};

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_storage_config(&settings.storage)?;
    validate_catalog_config(&settings.catalog)?;
    validate_logging_config(&settings.logging)?;

    Ok(())
}

/// Validate session slot storage configuration
fn validate_storage_config(config: &super::StorageConfig) -> Result<()> {
    if config.slot_key.trim().is_empty() {
        return Err(SportsBuddyError::Config(
            "Session slot key is required".to_string()
        ));
    }

    match config.backend {
        StorageBackend::Memory => {}
        StorageBackend::File => {
            if config.file_dir.is_empty() {
                return Err(SportsBuddyError::Config(
                    "File storage directory is required".to_string()
                ));
            }
        }
        StorageBackend::Redis => {
            if config.redis_url.as_deref().map_or(true, str::is_empty) {
                return Err(SportsBuddyError::Config(
                    "Redis URL is required for the redis storage backend".to_string()
                ));
            }
        }
    }

    Ok(())
}

/// Validate record store configuration
fn validate_catalog_config(config: &super::CatalogConfig) -> Result<()> {
    if config.featured_events == 0 {
        return Err(SportsBuddyError::Config(
            "Featured events count must be greater than 0".to_string()
        ));
    }

    if config.featured_users == 0 {
        return Err(SportsBuddyError::Config(
            "Featured users count must be greater than 0".to_string()
        ));
    }

    if let Some(path) = &config.fixture_path {
        if path.is_empty() {
            return Err(SportsBuddyError::Config(
                "Fixture path must not be empty when set".to_string()
            ));
        }
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(SportsBuddyError::Config(
            "Log level is required".to_string()
        ));
    }

    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.level.as_str()) {
        return Err(SportsBuddyError::Config(
            format!("Invalid log level: {}. Valid levels: {:?}", config.level, valid_levels)
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_are_valid() {
        assert!(validate_settings(&Settings::default()).is_ok());
    }

    #[test]
    fn test_redis_backend_requires_url() {
        let mut settings = Settings::default();
        settings.storage.backend = StorageBackend::Redis;
        assert!(validate_settings(&settings).is_err());

        settings.storage.redis_url = Some("redis://localhost:6379".to_string());
        assert!(validate_settings(&settings).is_ok());
    }

    #[test]
    fn test_rejects_unknown_log_level() {
        let mut settings = Settings::default();
        settings.logging.level = "verbose".to_string();
        let err = validate_settings(&settings).unwrap_err();
        assert!(err.to_string().contains("Invalid log level"));
    }

    #[test]
    fn test_rejects_blank_slot_key() {
        let mut settings = Settings::default();
        settings.storage.slot_key = "   ".to_string();
        assert!(validate_settings(&settings).is_err());
    }
}
