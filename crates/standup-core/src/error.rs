// SPDX-FileCopyrightText: 2026 Standup Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Standup coordinator.

use thiserror::Error;

/// The primary error type used across the Standup workspace.
///
/// Every rejection the coordinator can produce is a distinct variant so
/// the transport layer can phrase user-facing messages without string
/// matching. All variants are locally recoverable; none are fatal to
/// the process.
#[derive(Debug, Error)]
pub enum StandupError {
    /// Configuration errors (invalid TOML, missing required fields, type mismatches).
    #[error("configuration error: {0}")]
    Config(String),

    /// No organizer configuration exists for the given organizer, or it is inactive.
    #[error("no active standup configuration for organizer {organizer_id}")]
    ConfigNotFound { organizer_id: String },

    /// No session matches the given anchor reference.
    #[error("no scrum session found for anchor {anchor_ref}")]
    SessionDoesNotExist { anchor_ref: String },

    /// The organizer already has a running session. Carries the running
    /// session's summary reference so the caller can point at the
    /// existing surface instead of posting a duplicate.
    #[error("a scrum session is already running for organizer {organizer_id}")]
    SessionAlreadyActive {
        organizer_id: String,
        summary_ref: String,
    },

    /// The session has already been completed; End is a one-shot transition.
    #[error("scrum session {session_id} has already been completed")]
    SessionAlreadyCompleted { session_id: String },

    /// The submitter is not in the session's participant map.
    #[error("{participant_id} is not a participant of the running scrum session")]
    NotAParticipant { participant_id: String },

    /// Status submission with blank required fields. Both flags may be
    /// set at once; nothing was persisted.
    #[error("status update is missing required fields")]
    Validation {
        missing_yesterday: bool,
        missing_today: bool,
    },

    /// Storage backend errors (database connection, query failure, serialization).
    #[error("storage error: {source}")]
    Storage {
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Notification sink failed to refresh a render surface.
    #[error("render failed for target {target_ref}: {message}")]
    Render {
        target_ref: String,
        message: String,
    },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}

impl StandupError {
    /// Wrap an arbitrary storage-layer error.
    pub fn storage<E>(source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        StandupError::Storage {
            source: Box::new(source),
        }
    }
}
