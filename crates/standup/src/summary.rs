// SPDX-FileCopyrightText: 2026 Standup Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `standup summary` command implementation.
//!
//! Recomputes the summary for a session by its anchor reference. Works
//! on completed sessions too.

use serde::Serialize;
use standup_core::StandupError;
use standup_coordinator::{SessionCoordinator, SessionState};

use crate::render::format_rows;

/// Structured output for `--json` mode.
#[derive(Debug, Serialize)]
struct SummaryResponse {
    session_id: String,
    organizer_id: String,
    state: String,
    submitted: usize,
    total: usize,
    rows: serde_json::Value,
}

/// Run the `standup summary` command.
pub async fn run_summary(
    coordinator: &SessionCoordinator,
    anchor_ref: &str,
    json: bool,
) -> Result<(), StandupError> {
    let details = coordinator.session_details(anchor_ref).await?;
    let state = SessionState::of(Some(&details.session));

    if json {
        let response = SummaryResponse {
            session_id: details.session.id.clone(),
            organizer_id: details.session.organizer_id.clone(),
            state: state.to_string(),
            submitted: details.summary.submitted,
            total: details.summary.total,
            rows: serde_json::to_value(&details.summary.rows)
                .map_err(|e| StandupError::Internal(format!("serialize summary: {e}")))?,
        };
        println!(
            "{}",
            serde_json::to_string_pretty(&response)
                .map_err(|e| StandupError::Internal(format!("serialize summary: {e}")))?
        );
        return Ok(());
    }

    println!(
        "session {} [{}] {}/{} submitted",
        details.session.id, state, details.summary.submitted, details.summary.total
    );
    print!("{}", format_rows(&details.summary));
    Ok(())
}
