// SPDX-FileCopyrightText: 2026 Standup Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Terminal render surface.
//!
//! `ConsoleSink` prints the summary board to stdout after every
//! lifecycle event, standing in for whatever chat surface a deployment
//! would wire up.

use async_trait::async_trait;
use standup_core::types::{RenderPayload, Summary};
use standup_core::{NotificationSink, StandupError};

/// Renders summary updates as plain text on stdout.
pub struct ConsoleSink;

#[async_trait]
impl NotificationSink for ConsoleSink {
    async fn render(&self, _target_ref: &str, payload: &RenderPayload) -> Result<(), StandupError> {
        println!("{}", format_board(payload));
        Ok(())
    }
}

/// Format a summary board for terminal output.
pub fn format_board(payload: &RenderPayload) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "[{}] session {} ({}/{} submitted)\n",
        payload.event, payload.session_id, payload.summary.submitted, payload.summary.total
    ));
    out.push_str(&format_rows(&payload.summary));
    out
}

pub fn format_rows(summary: &Summary) -> String {
    let mut out = String::new();
    for row in &summary.rows {
        match &row.entry {
            Some(entry) => {
                out.push_str(&format!("  {}\n", row.participant_id));
                out.push_str(&format!("    yesterday: {}\n", entry.yesterday));
                out.push_str(&format!("    today:     {}\n", entry.today));
                if let Some(blockers) = &entry.blockers {
                    out.push_str(&format!("    blockers:  {blockers}\n"));
                }
            }
            None => {
                out.push_str(&format!("  {} -- not submitted yet\n", row.participant_id));
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use standup_core::types::{RenderEvent, StatusEntry, SummaryRow};

    fn sample_payload() -> RenderPayload {
        RenderPayload {
            event: RenderEvent::StatusSubmitted,
            session_id: "s1".to_string(),
            organizer_id: "org-1".to_string(),
            summary: Summary {
                rows: vec![
                    SummaryRow {
                        participant_id: "alice".to_string(),
                        entry: Some(StatusEntry {
                            session_id: "s1".to_string(),
                            participant_id: "alice".to_string(),
                            submission_handle: "h-a".to_string(),
                            yesterday: "wrote tests".to_string(),
                            today: "write docs".to_string(),
                            blockers: Some("CI flaky".to_string()),
                            submitted_at: "2026-01-01T09:00:00.000Z".to_string(),
                        }),
                    },
                    SummaryRow {
                        participant_id: "bob".to_string(),
                        entry: None,
                    },
                ],
                submitted: 1,
                total: 2,
            },
        }
    }

    #[test]
    fn board_shows_counts_and_outstanding_members() {
        let board = format_board(&sample_payload());
        assert!(board.contains("(1/2 submitted)"));
        assert!(board.contains("blockers:  CI flaky"));
        assert!(board.contains("bob -- not submitted yet"));
    }

    #[test]
    fn board_omits_blockers_line_when_none() {
        let mut payload = sample_payload();
        payload.summary.rows[0].entry.as_mut().unwrap().blockers = None;
        let board = format_board(&payload);
        assert!(!board.contains("blockers:"));
    }
}
