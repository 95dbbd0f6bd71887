// SPDX-FileCopyrightText: 2026 Standup Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for the Standup coordinator.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject
//! unrecognized config keys at startup.

use serde::{Deserialize, Serialize};

/// Top-level Standup configuration.
///
/// Loaded from TOML files following the XDG hierarchy, with environment
/// variable overrides. All sections are optional and default to
/// sensible values.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct StandupConfig {
    /// Service identity and logging settings.
    #[serde(default)]
    pub service: ServiceConfig,

    /// Storage backend settings.
    #[serde(default)]
    pub storage: StorageConfig,

    /// Scrum session defaults.
    #[serde(default)]
    pub scrum: ScrumConfig,
}

/// Service identity and logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ServiceConfig {
    /// Display name of the service.
    #[serde(default = "default_service_name")]
    pub name: String,

    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            name: default_service_name(),
            log_level: default_log_level(),
        }
    }
}

fn default_service_name() -> String {
    "standup".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Storage backend configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct StorageConfig {
    /// Path to the SQLite database file.
    #[serde(default = "default_database_path")]
    pub database_path: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            database_path: default_database_path(),
        }
    }
}

fn default_database_path() -> String {
    "standup.db".to_string()
}

/// Scrum session defaults.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ScrumConfig {
    /// Time zone applied to organizer configs created without one.
    #[serde(default = "default_time_zone")]
    pub default_time_zone: String,

    /// Upper bound on roster size accepted in an organizer config.
    #[serde(default = "default_max_roster_size")]
    pub max_roster_size: usize,
}

impl Default for ScrumConfig {
    fn default() -> Self {
        Self {
            default_time_zone: default_time_zone(),
            max_roster_size: default_max_roster_size(),
        }
    }
}

fn default_time_zone() -> String {
    "UTC".to_string()
}

fn default_max_roster_size() -> usize {
    50
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sensible() {
        let config = StandupConfig::default();
        assert_eq!(config.service.name, "standup");
        assert_eq!(config.service.log_level, "info");
        assert_eq!(config.storage.database_path, "standup.db");
        assert_eq!(config.scrum.default_time_zone, "UTC");
        assert_eq!(config.scrum.max_roster_size, 50);
    }

    #[test]
    fn round_trips_through_toml() {
        let config = StandupConfig::default();
        let serialized = toml::to_string(&config).expect("should serialize");
        let parsed: StandupConfig = toml::from_str(&serialized).expect("should deserialize");
        assert_eq!(parsed.service.name, config.service.name);
        assert_eq!(parsed.storage.database_path, config.storage.database_path);
    }
}
