// SPDX-FileCopyrightText: 2026 Standup Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Session lifecycle state machine.
//!
//! Each organizer moves through states: NoActiveSession -> Active ->
//! Completed. Completed is terminal per session instance; a later Start
//! returns the organizer to Active via a fresh session record.
//!
//! The coordinator holds no mutable state between calls: every
//! operation reads current truth from the repository, computes, and
//! writes back a single atomic upsert. Concurrent participants race
//! only against the store's own per-key serialization.

use std::collections::HashMap;
use std::sync::Arc;

use standup_core::types::{
    RenderEvent, RenderPayload, ScrumSession, StatusEntry, Summary,
};
use standup_core::{NotificationSink, ScrumRepository, StandupError};
use tracing::{debug, info, warn};

use crate::summary::summarize;

/// States in the per-organizer session lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No session record with the completion flag unset.
    NoActiveSession,
    /// A session is running and accepting submissions.
    Active,
    /// The session has been ended; submissions are rejected.
    Completed,
}

impl std::fmt::Display for SessionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionState::NoActiveSession => write!(f, "no_active_session"),
            SessionState::Active => write!(f, "active"),
            SessionState::Completed => write!(f, "completed"),
        }
    }
}

impl SessionState {
    /// Derive the state from a durable session record, if any. State is
    /// never cached; it is always a view of what the store says now.
    pub fn of(session: Option<&ScrumSession>) -> Self {
        match session {
            None => SessionState::NoActiveSession,
            Some(s) if s.is_completed => SessionState::Completed,
            Some(_) => SessionState::Active,
        }
    }
}

/// A session together with its freshly computed summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionDetails {
    pub session: ScrumSession,
    pub summary: Summary,
}

/// Coordinates the scrum session lifecycle against a durable store and
/// a render surface.
///
/// Stateless with respect to process memory, and therefore horizontally
/// replicable: the repository is the only shared mutable resource.
pub struct SessionCoordinator {
    repository: Arc<dyn ScrumRepository>,
    sink: Arc<dyn NotificationSink>,
}

impl SessionCoordinator {
    pub fn new(repository: Arc<dyn ScrumRepository>, sink: Arc<dyn NotificationSink>) -> Self {
        Self { repository, sink }
    }

    /// Start a new scrum session for an organizer.
    ///
    /// The roster comes from the organizer's active configuration; each
    /// member is assigned a fresh submission handle for this run.
    /// `anchor_ref` is the message handle anchoring the run and
    /// `summary_ref` the render surface to keep updated.
    ///
    /// Fails with [`StandupError::ConfigNotFound`] when the organizer
    /// has no active configuration, and with
    /// [`StandupError::SessionAlreadyActive`] (carrying the running
    /// session's summary reference) when a run is already open.
    pub async fn start_session(
        &self,
        organizer_id: &str,
        anchor_ref: &str,
        summary_ref: &str,
    ) -> Result<ScrumSession, StandupError> {
        let config = self
            .repository
            .organizer_config(organizer_id)
            .await?
            .filter(|c| c.is_active)
            .ok_or_else(|| StandupError::ConfigNotFound {
                organizer_id: organizer_id.to_string(),
            })?;

        if let Some(running) = self.repository.active_session(organizer_id).await? {
            debug!(
                organizer_id,
                session_id = running.id.as_str(),
                "start rejected, session already active"
            );
            return Err(StandupError::SessionAlreadyActive {
                organizer_id: organizer_id.to_string(),
                summary_ref: running.summary_ref,
            });
        }

        let members: HashMap<String, String> = config
            .roster
            .iter()
            .map(|participant_id| (participant_id.clone(), uuid::Uuid::new_v4().to_string()))
            .collect();

        let session = ScrumSession {
            id: uuid::Uuid::new_v4().to_string(),
            organizer_id: organizer_id.to_string(),
            anchor_ref: anchor_ref.to_string(),
            summary_ref: summary_ref.to_string(),
            members,
            is_completed: false,
            thread_conversation_id: None,
            created_at: chrono::Utc::now().to_rfc3339(),
        };
        self.repository.insert_session(&session).await?;

        info!(
            organizer_id,
            session_id = session.id.as_str(),
            roster_size = session.members.len(),
            "scrum session started"
        );

        let summary = summarize(&session.members, &[]);
        self.render(&session, RenderEvent::SessionStarted, summary)
            .await;

        Ok(session)
    }

    /// Record a participant's status for the session anchored at
    /// `anchor_ref`.
    ///
    /// The participant gate runs before anything is persisted; it is
    /// the sole authorization check. Blank required fields (after
    /// trimming) reject the submission with field-level flags and
    /// persist nothing. A successful submission upserts the entry --
    /// last write wins whole, no merging of partial fields.
    pub async fn submit_status(
        &self,
        anchor_ref: &str,
        submitter_id: &str,
        yesterday: &str,
        today: &str,
        blockers: Option<&str>,
    ) -> Result<StatusEntry, StandupError> {
        let session = self.require_session(anchor_ref).await?;
        let submission_handle = validate_participant(&session, submitter_id)?;

        let yesterday = yesterday.trim();
        let today = today.trim();
        if yesterday.is_empty() || today.is_empty() {
            return Err(StandupError::Validation {
                missing_yesterday: yesterday.is_empty(),
                missing_today: today.is_empty(),
            });
        }

        let entry = StatusEntry {
            session_id: session.id.clone(),
            participant_id: submitter_id.to_string(),
            submission_handle,
            yesterday: yesterday.to_string(),
            today: today.to_string(),
            blockers: blockers
                .map(str::trim)
                .filter(|b| !b.is_empty())
                .map(str::to_string),
            submitted_at: chrono::Utc::now().to_rfc3339(),
        };
        self.repository.upsert_status_entry(&entry).await?;

        let summary = self.summarize_session(&session).await?;
        info!(
            session_id = session.id.as_str(),
            participant_id = submitter_id,
            submitted = summary.submitted,
            total = summary.total,
            "status recorded"
        );
        self.render(&session, RenderEvent::StatusSubmitted, summary)
            .await;

        Ok(entry)
    }

    /// End the session anchored at `anchor_ref`.
    ///
    /// Any roster member may end a running session, not just the
    /// organizer. The store's conditional update is the serialization
    /// point: when two participants race, exactly one transition wins
    /// and the loser reports [`StandupError::SessionAlreadyCompleted`].
    pub async fn end_session(
        &self,
        anchor_ref: &str,
        ender_id: &str,
        thread_conversation_id: &str,
    ) -> Result<ScrumSession, StandupError> {
        let mut session = self.require_session(anchor_ref).await?;
        validate_participant(&session, ender_id)?;

        let won = self
            .repository
            .complete_session(&session.id, thread_conversation_id)
            .await?;
        if !won {
            // A concurrent End landed first; the record is already
            // completed with the winner's thread stamp.
            debug!(
                session_id = session.id.as_str(),
                ender_id, "end lost the race to a concurrent completion"
            );
            return Err(StandupError::SessionAlreadyCompleted {
                session_id: session.id,
            });
        }

        session.is_completed = true;
        session.thread_conversation_id = Some(thread_conversation_id.to_string());

        let summary = self.summarize_session(&session).await?;
        info!(
            session_id = session.id.as_str(),
            ender_id,
            submitted = summary.submitted,
            total = summary.total,
            "scrum session ended"
        );
        self.render(&session, RenderEvent::SessionEnded, summary)
            .await;

        Ok(session)
    }

    /// Recompute the summary for the session anchored at `anchor_ref`.
    ///
    /// Works on completed sessions as well; history stays queryable.
    pub async fn get_summary(&self, anchor_ref: &str) -> Result<Summary, StandupError> {
        let session = self.require_session_any_state(anchor_ref).await?;
        self.summarize_session(&session).await
    }

    /// The session anchored at `anchor_ref` together with its summary.
    pub async fn session_details(&self, anchor_ref: &str) -> Result<SessionDetails, StandupError> {
        let session = self.require_session_any_state(anchor_ref).await?;
        let summary = self.summarize_session(&session).await?;
        Ok(SessionDetails { session, summary })
    }

    /// Resolve a session that must still accept lifecycle transitions.
    async fn require_session(&self, anchor_ref: &str) -> Result<ScrumSession, StandupError> {
        let session = self.require_session_any_state(anchor_ref).await?;
        if session.is_completed {
            return Err(StandupError::SessionAlreadyCompleted {
                session_id: session.id,
            });
        }
        Ok(session)
    }

    async fn require_session_any_state(
        &self,
        anchor_ref: &str,
    ) -> Result<ScrumSession, StandupError> {
        self.repository
            .session_by_anchor(anchor_ref)
            .await?
            .ok_or_else(|| StandupError::SessionDoesNotExist {
                anchor_ref: anchor_ref.to_string(),
            })
    }

    /// Recompute the summary from durable entries. Never cached.
    async fn summarize_session(&self, session: &ScrumSession) -> Result<Summary, StandupError> {
        let entries = self.repository.list_status_entries(&session.id).await?;
        Ok(summarize(&session.members, &entries))
    }

    /// Request a render-surface refresh. Failure is logged, never
    /// propagated and never retried: the next event recomputes from
    /// ground truth, and retry policy belongs to the transport layer.
    async fn render(&self, session: &ScrumSession, event: RenderEvent, summary: Summary) {
        let payload = RenderPayload {
            event,
            session_id: session.id.clone(),
            organizer_id: session.organizer_id.clone(),
            summary,
        };
        if let Err(e) = self.sink.render(&session.summary_ref, &payload).await {
            warn!(
                session_id = session.id.as_str(),
                summary_ref = session.summary_ref.as_str(),
                event = %event,
                error = %e,
                "render failed (non-fatal)"
            );
        }
    }
}

/// The sole authorization gate: membership in the session's participant
/// map. Returns the participant's submission handle for this run.
fn validate_participant(
    session: &ScrumSession,
    participant_id: &str,
) -> Result<String, StandupError> {
    session
        .submission_handle(participant_id)
        .map(str::to_string)
        .ok_or_else(|| StandupError::NotAParticipant {
            participant_id: participant_id.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_session(completed: bool) -> ScrumSession {
        let mut members = HashMap::new();
        members.insert("user-a".to_string(), "handle-a".to_string());
        ScrumSession {
            id: "s1".to_string(),
            organizer_id: "org-1".to_string(),
            anchor_ref: "anchor-1".to_string(),
            summary_ref: "summary-1".to_string(),
            members,
            is_completed: completed,
            thread_conversation_id: None,
            created_at: "2026-01-01T09:00:00.000Z".to_string(),
        }
    }

    #[test]
    fn session_state_display() {
        assert_eq!(SessionState::NoActiveSession.to_string(), "no_active_session");
        assert_eq!(SessionState::Active.to_string(), "active");
        assert_eq!(SessionState::Completed.to_string(), "completed");
    }

    #[test]
    fn session_state_derivation() {
        assert_eq!(SessionState::of(None), SessionState::NoActiveSession);
        assert_eq!(
            SessionState::of(Some(&make_session(false))),
            SessionState::Active
        );
        assert_eq!(
            SessionState::of(Some(&make_session(true))),
            SessionState::Completed
        );
    }

    #[test]
    fn participant_gate_returns_handle() {
        let session = make_session(false);
        assert_eq!(
            validate_participant(&session, "user-a").unwrap(),
            "handle-a"
        );
    }

    #[test]
    fn participant_gate_rejects_strangers() {
        let session = make_session(false);
        let err = validate_participant(&session, "intruder").unwrap_err();
        assert!(matches!(
            err,
            StandupError::NotAParticipant { participant_id } if participant_id == "intruder"
        ));
    }
}
