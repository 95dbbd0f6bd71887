// SPDX-FileCopyrightText: 2026 Standup Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `standup sessions` command implementation.
//!
//! Lists stored scrum sessions, newest first, optionally filtered to
//! one organizer. `--json` emits structured output for scripting.

use serde::Serialize;
use standup_core::types::ScrumSession;
use standup_core::StandupError;
use standup_coordinator::SessionState;
use standup_storage::{queries, Database};

/// One session row for `--json` mode.
#[derive(Debug, Serialize)]
pub struct SessionListing {
    pub id: String,
    pub organizer_id: String,
    pub anchor_ref: String,
    pub state: String,
    pub roster_size: usize,
    pub created_at: String,
}

impl From<&ScrumSession> for SessionListing {
    fn from(session: &ScrumSession) -> Self {
        Self {
            id: session.id.clone(),
            organizer_id: session.organizer_id.clone(),
            anchor_ref: session.anchor_ref.clone(),
            state: SessionState::of(Some(session)).to_string(),
            roster_size: session.members.len(),
            created_at: session.created_at.clone(),
        }
    }
}

/// Run the `standup sessions` command.
pub async fn run_sessions(
    db: &Database,
    organizer_id: Option<&str>,
    json: bool,
) -> Result<(), StandupError> {
    let sessions = queries::sessions::list_sessions(db, organizer_id).await?;
    let listings: Vec<SessionListing> = sessions.iter().map(SessionListing::from).collect();

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&listings)
                .map_err(|e| StandupError::Internal(format!("serialize listings: {e}")))?
        );
        return Ok(());
    }

    if listings.is_empty() {
        println!("no sessions recorded");
        return Ok(());
    }
    for listing in &listings {
        println!(
            "{}  {}  organizer={}  members={}  {}",
            listing.created_at, listing.state, listing.organizer_id, listing.roster_size,
            listing.anchor_ref
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn listing_reports_lifecycle_state() {
        let session = ScrumSession {
            id: "s1".to_string(),
            organizer_id: "org-1".to_string(),
            anchor_ref: "anchor-1".to_string(),
            summary_ref: "summary-1".to_string(),
            members: HashMap::from([("alice".to_string(), "h-a".to_string())]),
            is_completed: true,
            thread_conversation_id: Some("thread-1".to_string()),
            created_at: "2026-01-01T09:00:00.000Z".to_string(),
        };
        let listing = SessionListing::from(&session);
        assert_eq!(listing.state, "completed");
        assert_eq!(listing.roster_size, 1);
    }
}
