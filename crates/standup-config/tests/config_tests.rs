// SPDX-FileCopyrightText: 2026 Standup Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for the Standup configuration system.

use standup_config::diagnostic::ConfigError;
use standup_config::{load_and_validate_str, load_config_from_str};

/// Valid TOML with all known fields deserializes successfully.
#[test]
fn valid_toml_deserializes_into_standup_config() {
    let toml = r#"
[service]
name = "standup-test"
log_level = "debug"

[storage]
database_path = "/tmp/standup-test.db"

[scrum]
default_time_zone = "Europe/Berlin"
max_roster_size = 12
"#;

    let config = load_config_from_str(toml).expect("valid TOML should deserialize");
    assert_eq!(config.service.name, "standup-test");
    assert_eq!(config.service.log_level, "debug");
    assert_eq!(config.storage.database_path, "/tmp/standup-test.db");
    assert_eq!(config.scrum.default_time_zone, "Europe/Berlin");
    assert_eq!(config.scrum.max_roster_size, 12);
}

/// A typo in a known section yields an UnknownKey diagnostic with a suggestion.
#[test]
fn typo_in_section_produces_suggestion() {
    let toml = r#"
[storage]
databse_path = "/tmp/x.db"
"#;

    let errors = load_and_validate_str(toml).expect_err("typo should fail");
    let ConfigError::UnknownKey {
        key, suggestion, ..
    } = &errors[0]
    else {
        panic!("expected UnknownKey, got {:?}", errors[0]);
    };
    assert_eq!(key, "databse_path");
    assert_eq!(suggestion.as_deref(), Some("database_path"));
}

/// Semantic validation runs after a successful parse.
#[test]
fn invalid_log_level_fails_validation() {
    let toml = r#"
[service]
log_level = "shouty"
"#;

    let errors = load_and_validate_str(toml).expect_err("bad level should fail");
    assert!(matches!(errors[0], ConfigError::Validation { .. }));
}

/// Empty input falls back to compiled defaults and validates cleanly.
#[test]
fn empty_config_validates() {
    let config = load_and_validate_str("").expect("defaults should validate");
    assert_eq!(config.service.name, "standup");
}
