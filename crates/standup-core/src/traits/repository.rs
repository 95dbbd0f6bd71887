// SPDX-FileCopyrightText: 2026 Standup Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Repository trait mediating typed access to the durable store.

use async_trait::async_trait;

use crate::error::StandupError;
use crate::types::{OrganizerConfig, ScrumSession, StatusEntry};

/// Typed access to the three durable record collections.
///
/// All operations are potentially long-latency (network- or disk-backed
/// store) and must be awaited without holding any cross-request lock.
/// Each operation is a single atomic read or upsert; there is no
/// multi-step operation requiring compensation.
#[async_trait]
pub trait ScrumRepository: Send + Sync + 'static {
    /// Fetch an organizer's standup configuration, if one exists.
    async fn organizer_config(
        &self,
        organizer_id: &str,
    ) -> Result<Option<OrganizerConfig>, StandupError>;

    /// Persist a freshly started session.
    async fn insert_session(&self, session: &ScrumSession) -> Result<(), StandupError>;

    /// Look up a session by the message handle that anchors it.
    async fn session_by_anchor(
        &self,
        anchor_ref: &str,
    ) -> Result<Option<ScrumSession>, StandupError>;

    /// The organizer's currently running session, if any.
    async fn active_session(
        &self,
        organizer_id: &str,
    ) -> Result<Option<ScrumSession>, StandupError>;

    /// Atomically flip a session from active to completed, stamping the
    /// thread conversation identity.
    ///
    /// Returns `false` when the session was already completed: the
    /// store's conditional update is the serialization point for two
    /// racing End calls, so exactly one caller observes `true`.
    async fn complete_session(
        &self,
        session_id: &str,
        thread_conversation_id: &str,
    ) -> Result<bool, StandupError>;

    /// Upsert a participant's status entry, keyed by
    /// (session id, participant id). Last write wins in full; partial
    /// merges are not possible.
    async fn upsert_status_entry(&self, entry: &StatusEntry) -> Result<(), StandupError>;

    /// All status entries recorded for a session, in no particular
    /// order. Empty right after Start.
    async fn list_status_entries(
        &self,
        session_id: &str,
    ) -> Result<Vec<StatusEntry>, StandupError>;
}
