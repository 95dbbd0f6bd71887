// SPDX-FileCopyrightText: 2026 Standup Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports the XDG hierarchy: `./standup.toml` >
//! `~/.config/standup/standup.toml` > `/etc/standup/standup.toml`,
//! with environment variable overrides via the `STANDUP_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};

use crate::model::StandupConfig;

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/standup/standup.toml` (system-wide)
/// 3. `~/.config/standup/standup.toml` (user XDG config)
/// 4. `./standup.toml` (local directory)
/// 5. `STANDUP_*` environment variables
pub fn load_config() -> Result<StandupConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(StandupConfig::default()))
        .merge(Toml::file("/etc/standup/standup.toml"))
        .merge(Toml::file(
            dirs::config_dir()
                .map(|d| d.join("standup/standup.toml"))
                .unwrap_or_default(),
        ))
        .merge(Toml::file("standup.toml"))
        .merge(env_provider())
        .extract()
}

/// Load configuration from an inline TOML string only (no XDG lookup).
///
/// Used for testing and explicit configuration.
pub fn load_config_from_str(toml_content: &str) -> Result<StandupConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(StandupConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<StandupConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(StandupConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Create the environment variable provider using explicit `map()` for
/// section-to-dot mapping.
///
/// Uses `Env::map()` rather than `Env::split("_")` to avoid ambiguity
/// with underscore-containing key names: `STANDUP_STORAGE_DATABASE_PATH`
/// must map to `storage.database_path`, not `storage.database.path`.
fn env_provider() -> Env {
    Env::prefixed("STANDUP_").map(|key| {
        let key_str = key.as_str();
        let mapped = key_str
            .replacen("service_", "service.", 1)
            .replacen("storage_", "storage.", 1)
            .replacen("scrum_", "scrum.", 1);
        mapped.into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inline_toml_overrides_defaults() {
        let config = load_config_from_str(
            r#"
            [service]
            log_level = "debug"

            [storage]
            database_path = "/var/lib/standup/standup.db"
            "#,
        )
        .expect("valid config should load");

        assert_eq!(config.service.log_level, "debug");
        assert_eq!(config.storage.database_path, "/var/lib/standup/standup.db");
        // Untouched sections keep their defaults.
        assert_eq!(config.scrum.default_time_zone, "UTC");
    }

    #[test]
    fn unknown_key_is_rejected() {
        let result = load_config_from_str(
            r#"
            [service]
            naem = "oops"
            "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn empty_toml_yields_defaults() {
        let config = load_config_from_str("").expect("empty config should load");
        assert_eq!(config.service.name, "standup");
    }
}
