// SPDX-FileCopyrightText: 2026 Standup Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Organizer configuration queries.
//!
//! Configs are written by the out-of-band settings flow and read-only
//! to the coordinator. The partial unique index on (team_id,
//! channel_id) rejects a second active config for the same channel.

use rusqlite::params;
use standup_core::StandupError;

use crate::database::Database;
use crate::models::OrganizerConfig;

fn row_to_config(row: &rusqlite::Row<'_>) -> rusqlite::Result<OrganizerConfig> {
    let roster_json: String = row.get(4)?;
    let roster = serde_json::from_str(&roster_json).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(4, rusqlite::types::Type::Text, Box::new(e))
    })?;
    Ok(OrganizerConfig {
        organizer_id: row.get(0)?,
        team_id: row.get(1)?,
        channel_id: row.get(2)?,
        time_zone: row.get(3)?,
        roster,
        is_active: row.get(5)?,
    })
}

/// Create or replace an organizer's configuration.
pub async fn upsert_config(db: &Database, config: &OrganizerConfig) -> Result<(), StandupError> {
    let config = config.clone();
    let roster = serde_json::to_string(&config.roster).map_err(StandupError::storage)?;
    db.connection()
        .call(move |conn| {
            conn.execute(
                "INSERT INTO organizer_configs
                     (organizer_id, team_id, channel_id, time_zone, roster, is_active)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)
                 ON CONFLICT (organizer_id) DO UPDATE SET
                     team_id = excluded.team_id,
                     channel_id = excluded.channel_id,
                     time_zone = excluded.time_zone,
                     roster = excluded.roster,
                     is_active = excluded.is_active",
                params![
                    config.organizer_id,
                    config.team_id,
                    config.channel_id,
                    config.time_zone,
                    roster,
                    config.is_active,
                ],
            )?;
            Ok(())
        })
        .await
        .map_err(crate::database::map_tr_err)
}

/// Get an organizer's configuration by id.
pub async fn get_config(
    db: &Database,
    organizer_id: &str,
) -> Result<Option<OrganizerConfig>, StandupError> {
    let organizer_id = organizer_id.to_string();
    db.connection()
        .call(move |conn| {
            let mut stmt = conn.prepare(
                "SELECT organizer_id, team_id, channel_id, time_zone, roster, is_active
                 FROM organizer_configs WHERE organizer_id = ?1",
            )?;
            let result = stmt.query_row(params![organizer_id], row_to_config);
            match result {
                Ok(config) => Ok(Some(config)),
                Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                Err(e) => Err(e.into()),
            }
        })
        .await
        .map_err(crate::database::map_tr_err)
}
