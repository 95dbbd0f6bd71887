// SPDX-FileCopyrightText: 2026 Standup Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Validates semantic constraints that cannot be expressed via serde
//! attributes.

use crate::diagnostic::ConfigError;
use crate::model::StandupConfig;

const VALID_LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Validate a deserialized configuration for semantic correctness.
///
/// Returns `Ok(())` if all validations pass, or `Err(Vec<ConfigError>)`
/// with all collected validation errors (does not fail fast).
pub fn validate_config(config: &StandupConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    if !VALID_LOG_LEVELS.contains(&config.service.log_level.as_str()) {
        errors.push(ConfigError::Validation {
            message: format!(
                "service.log_level must be one of {}, got `{}`",
                VALID_LOG_LEVELS.join(", "),
                config.service.log_level
            ),
        });
    }

    if config.storage.database_path.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "storage.database_path must not be empty".to_string(),
        });
    }

    if config.scrum.default_time_zone.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "scrum.default_time_zone must not be empty".to_string(),
        });
    }

    if config.scrum.max_roster_size == 0 {
        errors.push(ConfigError::Validation {
            message: "scrum.max_roster_size must be at least 1".to_string(),
        });
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = StandupConfig::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn bad_log_level_is_rejected() {
        let mut config = StandupConfig::default();
        config.service.log_level = "verbose".to_string();
        let errors = validate_config(&config).expect_err("should fail");
        assert_eq!(errors.len(), 1);
        assert!(errors[0].to_string().contains("log_level"));
    }

    #[test]
    fn collects_all_errors() {
        let mut config = StandupConfig::default();
        config.service.log_level = "loud".to_string();
        config.storage.database_path = "   ".to_string();
        config.scrum.max_roster_size = 0;
        let errors = validate_config(&config).expect_err("should fail");
        assert_eq!(errors.len(), 3);
    }
}
