// SPDX-FileCopyrightText: 2026 Standup Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain record types shared across the Standup workspace.
//!
//! Records mirror the three durable collections: organizer
//! configurations, scrum sessions, and per-participant status entries.
//! Timestamps are RFC 3339 strings, matching their TEXT column type.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Per-organizer standup configuration.
///
/// Created and updated by an out-of-band settings flow; the coordinator
/// only ever reads it. At most one config may be active per
/// (team_id, channel_id) pair, enforced by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrganizerConfig {
    pub organizer_id: String,
    pub team_id: String,
    pub channel_id: String,
    pub time_zone: String,
    /// Participant identities configured for this organizer's standups.
    pub roster: Vec<String>,
    pub is_active: bool,
}

/// One scrum run, from Start to End. Retained as history after completion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrumSession {
    pub id: String,
    pub organizer_id: String,
    /// Opaque handle to the message that anchors the run.
    pub anchor_ref: String,
    /// Opaque handle to the render surface updated with each summary.
    pub summary_ref: String,
    /// Participant identity -> per-run submission handle. Membership in
    /// this map is the sole authorization gate for submit and end.
    pub members: HashMap<String, String>,
    pub is_completed: bool,
    /// Conversation identity stamped from the ending caller's context.
    pub thread_conversation_id: Option<String>,
    pub created_at: String,
}

impl ScrumSession {
    /// Look up the submission handle assigned to a participant, or
    /// `None` if the identity is not part of this run.
    pub fn submission_handle(&self, participant_id: &str) -> Option<&str> {
        self.members.get(participant_id).map(String::as_str)
    }
}

/// A participant's status for one session. Upserted, never appended:
/// resubmission overwrites the whole record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusEntry {
    pub session_id: String,
    pub participant_id: String,
    pub submission_handle: String,
    /// What the participant worked on since the last standup.
    pub yesterday: String,
    /// What the participant plans to work on next.
    pub today: String,
    pub blockers: Option<String>,
    pub submitted_at: String,
}

/// Per-participant slot in a [`Summary`]: either the latest entry or
/// still outstanding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryRow {
    pub participant_id: String,
    /// `None` marks the participant as outstanding.
    pub entry: Option<StatusEntry>,
}

/// Derived aggregate view over a session's roster and status entries.
///
/// Never persisted and never cached: always recomputed from the durable
/// store so a stale render is corrected by the next event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    /// One row per roster member, in stable (sorted) participant order.
    pub rows: Vec<SummaryRow>,
    pub submitted: usize,
    pub total: usize,
}

impl Summary {
    /// True once every roster member has submitted.
    pub fn is_complete(&self) -> bool {
        self.submitted == self.total
    }
}

/// The lifecycle event that triggered a render refresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, Serialize, Deserialize)]
#[strum(serialize_all = "snake_case")]
pub enum RenderEvent {
    SessionStarted,
    StatusSubmitted,
    SessionEnded,
}

/// Payload handed to the notification sink after a successful
/// coordinator operation. The coordinator never depends on what the
/// sink does with it, only on its success or failure signal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderPayload {
    pub event: RenderEvent,
    pub session_id: String,
    pub organizer_id: String,
    pub summary: Summary,
}
