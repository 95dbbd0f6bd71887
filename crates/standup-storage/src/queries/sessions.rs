// SPDX-FileCopyrightText: 2026 Standup Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Scrum session queries.
//!
//! `complete_session` is the serialization point for racing End calls:
//! the conditional UPDATE matches only an active row, so of two
//! concurrent completions exactly one observes a changed row.

use rusqlite::params;
use standup_core::StandupError;

use crate::database::Database;
use crate::models::ScrumSession;

const SESSION_COLUMNS: &str = "id, organizer_id, anchor_ref, summary_ref, members, \
     is_completed, thread_conversation_id, created_at";

fn row_to_session(row: &rusqlite::Row<'_>) -> rusqlite::Result<ScrumSession> {
    let members_json: String = row.get(4)?;
    let members = serde_json::from_str(&members_json).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(4, rusqlite::types::Type::Text, Box::new(e))
    })?;
    Ok(ScrumSession {
        id: row.get(0)?,
        organizer_id: row.get(1)?,
        anchor_ref: row.get(2)?,
        summary_ref: row.get(3)?,
        members,
        is_completed: row.get(5)?,
        thread_conversation_id: row.get(6)?,
        created_at: row.get(7)?,
    })
}

/// Persist a freshly started session.
///
/// The partial unique index on (organizer_id) WHERE is_completed = 0
/// backs up the coordinator's exclusivity guard at the store level.
pub async fn insert_session(db: &Database, session: &ScrumSession) -> Result<(), StandupError> {
    let session = session.clone();
    let members = serde_json::to_string(&session.members).map_err(StandupError::storage)?;
    db.connection()
        .call(move |conn| {
            conn.execute(
                "INSERT INTO scrum_sessions
                     (id, organizer_id, anchor_ref, summary_ref, members,
                      is_completed, thread_conversation_id, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
                params![
                    session.id,
                    session.organizer_id,
                    session.anchor_ref,
                    session.summary_ref,
                    members,
                    session.is_completed,
                    session.thread_conversation_id,
                    session.created_at,
                ],
            )?;
            Ok(())
        })
        .await
        .map_err(crate::database::map_tr_err)
}

/// Look up a session by its anchor message handle.
pub async fn get_session_by_anchor(
    db: &Database,
    anchor_ref: &str,
) -> Result<Option<ScrumSession>, StandupError> {
    let anchor_ref = anchor_ref.to_string();
    db.connection()
        .call(move |conn| {
            let mut stmt = conn.prepare(&format!(
                "SELECT {SESSION_COLUMNS} FROM scrum_sessions WHERE anchor_ref = ?1"
            ))?;
            let result = stmt.query_row(params![anchor_ref], row_to_session);
            match result {
                Ok(session) => Ok(Some(session)),
                Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                Err(e) => Err(e.into()),
            }
        })
        .await
        .map_err(crate::database::map_tr_err)
}

/// The organizer's currently running session, if any.
pub async fn get_active_session(
    db: &Database,
    organizer_id: &str,
) -> Result<Option<ScrumSession>, StandupError> {
    let organizer_id = organizer_id.to_string();
    db.connection()
        .call(move |conn| {
            let mut stmt = conn.prepare(&format!(
                "SELECT {SESSION_COLUMNS} FROM scrum_sessions
                 WHERE organizer_id = ?1 AND is_completed = 0"
            ))?;
            let result = stmt.query_row(params![organizer_id], row_to_session);
            match result {
                Ok(session) => Ok(Some(session)),
                Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                Err(e) => Err(e.into()),
            }
        })
        .await
        .map_err(crate::database::map_tr_err)
}

/// List sessions, newest first, optionally filtered by organizer.
pub async fn list_sessions(
    db: &Database,
    organizer_id: Option<&str>,
) -> Result<Vec<ScrumSession>, StandupError> {
    let organizer_id = organizer_id.map(|s| s.to_string());
    db.connection()
        .call(move |conn| {
            let mut sessions = Vec::new();
            match &organizer_id {
                Some(organizer) => {
                    let mut stmt = conn.prepare(&format!(
                        "SELECT {SESSION_COLUMNS} FROM scrum_sessions
                         WHERE organizer_id = ?1 ORDER BY created_at DESC"
                    ))?;
                    let rows = stmt.query_map(params![organizer], row_to_session)?;
                    for row in rows {
                        sessions.push(row?);
                    }
                }
                None => {
                    let mut stmt = conn.prepare(&format!(
                        "SELECT {SESSION_COLUMNS} FROM scrum_sessions
                         ORDER BY created_at DESC"
                    ))?;
                    let rows = stmt.query_map([], row_to_session)?;
                    for row in rows {
                        sessions.push(row?);
                    }
                }
            }
            Ok(sessions)
        })
        .await
        .map_err(crate::database::map_tr_err)
}

/// Flip a session from active to completed, stamping the thread
/// conversation identity.
///
/// Returns `false` when no active row matched, meaning a concurrent
/// caller already completed the session. The losing caller must report
/// "already completed", not overwrite the winner's stamp.
pub async fn complete_session(
    db: &Database,
    session_id: &str,
    thread_conversation_id: &str,
) -> Result<bool, StandupError> {
    let session_id = session_id.to_string();
    let thread_conversation_id = thread_conversation_id.to_string();
    db.connection()
        .call(move |conn| {
            let changed = conn.execute(
                "UPDATE scrum_sessions
                 SET is_completed = 1, thread_conversation_id = ?2
                 WHERE id = ?1 AND is_completed = 0",
                params![session_id, thread_conversation_id],
            )?;
            Ok(changed == 1)
        })
        .await
        .map_err(crate::database::map_tr_err)
}
