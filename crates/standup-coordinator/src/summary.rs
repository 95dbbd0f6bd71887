// SPDX-FileCopyrightText: 2026 Standup Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Summary aggregation over durable per-participant records.
//!
//! [`summarize`] is a pure function: no caching, no memoization. It is
//! called fresh on every submission and on End, which is what lets the
//! system self-heal from lost or reordered notifications -- the next
//! event recomputes the view from ground truth.

use std::collections::HashMap;

use standup_core::types::{StatusEntry, Summary, SummaryRow};

/// Compute the aggregate view for one session.
///
/// Joins the participant map against the status entries: each roster
/// member gets either their latest entry or an outstanding marker
/// (`entry: None`). Entries for identities no longer in the roster are
/// ignored, not an error. The result does not depend on entry order;
/// rows come out in sorted participant order.
pub fn summarize(members: &HashMap<String, String>, entries: &[StatusEntry]) -> Summary {
    let by_participant: HashMap<&str, &StatusEntry> = entries
        .iter()
        .map(|entry| (entry.participant_id.as_str(), entry))
        .collect();

    let mut participant_ids: Vec<&String> = members.keys().collect();
    participant_ids.sort();

    let rows: Vec<SummaryRow> = participant_ids
        .into_iter()
        .map(|participant_id| SummaryRow {
            participant_id: participant_id.clone(),
            entry: by_participant
                .get(participant_id.as_str())
                .map(|entry| (*entry).clone()),
        })
        .collect();

    let submitted = rows.iter().filter(|row| row.entry.is_some()).count();
    let total = members.len();

    Summary {
        rows,
        submitted,
        total,
    }
}
