// SPDX-FileCopyrightText: 2026 Standup Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `standup config` command implementation.
//!
//! The out-of-band settings flow: store or inspect an organizer's
//! roster configuration. Scrum defaults from the service configuration
//! fill in what the caller omits.

use standup_config::StandupConfig;
use standup_core::types::OrganizerConfig;
use standup_core::StandupError;
use standup_storage::{queries, Database};

/// Run `standup config set`.
///
/// Last write wins whole: re-running replaces the organizer's previous
/// configuration. The roster is comma-separated participant ids;
/// blanks are dropped.
pub async fn run_config_set(
    db: &Database,
    service_config: &StandupConfig,
    organizer_id: &str,
    team_id: &str,
    channel_id: &str,
    roster_csv: &str,
    time_zone: Option<&str>,
) -> Result<(), StandupError> {
    let roster = parse_roster(roster_csv);

    if roster.is_empty() {
        return Err(StandupError::Config("roster must not be empty".to_string()));
    }
    let max = service_config.scrum.max_roster_size;
    if roster.len() > max {
        return Err(StandupError::Config(format!(
            "roster has {} members, maximum is {max}",
            roster.len()
        )));
    }

    let config = OrganizerConfig {
        organizer_id: organizer_id.to_string(),
        team_id: team_id.to_string(),
        channel_id: channel_id.to_string(),
        time_zone: time_zone
            .unwrap_or(&service_config.scrum.default_time_zone)
            .to_string(),
        roster,
        is_active: true,
    };
    queries::configs::upsert_config(db, &config).await?;
    println!(
        "stored configuration for {} ({} members)",
        config.organizer_id,
        config.roster.len()
    );
    Ok(())
}

fn parse_roster(csv: &str) -> Vec<String> {
    csv.split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect()
}

/// Run `standup config show`.
pub async fn run_config_show(
    db: &Database,
    organizer_id: &str,
    json: bool,
) -> Result<(), StandupError> {
    let config = queries::configs::get_config(db, organizer_id)
        .await?
        .ok_or_else(|| StandupError::ConfigNotFound {
            organizer_id: organizer_id.to_string(),
        })?;

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&config)
                .map_err(|e| StandupError::Internal(format!("serialize config: {e}")))?
        );
        return Ok(());
    }

    println!(
        "organizer {}  team={}  channel={}  tz={}  active={}",
        config.organizer_id, config.team_id, config.channel_id, config.time_zone,
        config.is_active
    );
    for participant in &config.roster {
        println!("  {participant}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roster_parsing_trims_and_drops_blanks() {
        assert_eq!(
            parse_roster(" alice, bob ,,carol,"),
            vec!["alice", "bob", "carol"]
        );
        assert!(parse_roster("  ,  ").is_empty());
    }
}
