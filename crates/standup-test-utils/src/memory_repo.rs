// SPDX-FileCopyrightText: 2026 Standup Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-memory repository for coordinator unit tests.
//!
//! `MemoryRepository` implements `ScrumRepository` over mutex-guarded
//! maps, enforcing the same uniqueness rules the SQLite store enforces
//! with partial indexes: one session per anchor reference and an atomic
//! check-and-set completion transition.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use standup_core::types::{OrganizerConfig, ScrumSession, StatusEntry};
use standup_core::{ScrumRepository, StandupError};

#[derive(Default)]
struct State {
    configs: HashMap<String, OrganizerConfig>,
    sessions: HashMap<String, ScrumSession>,
    // Keyed by (session_id, participant_id).
    entries: HashMap<(String, String), StatusEntry>,
}

/// A `ScrumRepository` backed by process memory.
#[derive(Default)]
pub struct MemoryRepository {
    state: Mutex<State>,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed an organizer configuration.
    pub async fn put_config(&self, config: OrganizerConfig) {
        let mut state = self.state.lock().await;
        state.configs.insert(config.organizer_id.clone(), config);
    }

    /// Number of stored sessions, for assertions on record counts.
    pub async fn session_count(&self) -> usize {
        self.state.lock().await.sessions.len()
    }

    /// Number of stored entries, for asserting nothing partial leaked.
    pub async fn entry_count(&self) -> usize {
        self.state.lock().await.entries.len()
    }
}

#[async_trait]
impl ScrumRepository for MemoryRepository {
    async fn organizer_config(
        &self,
        organizer_id: &str,
    ) -> Result<Option<OrganizerConfig>, StandupError> {
        let state = self.state.lock().await;
        Ok(state.configs.get(organizer_id).cloned())
    }

    async fn insert_session(&self, session: &ScrumSession) -> Result<(), StandupError> {
        let mut state = self.state.lock().await;
        if state.sessions.values().any(|s| s.anchor_ref == session.anchor_ref) {
            return Err(StandupError::Internal(format!(
                "duplicate anchor_ref {}",
                session.anchor_ref
            )));
        }
        state.sessions.insert(session.id.clone(), session.clone());
        Ok(())
    }

    async fn session_by_anchor(
        &self,
        anchor_ref: &str,
    ) -> Result<Option<ScrumSession>, StandupError> {
        let state = self.state.lock().await;
        Ok(state
            .sessions
            .values()
            .find(|s| s.anchor_ref == anchor_ref)
            .cloned())
    }

    async fn active_session(
        &self,
        organizer_id: &str,
    ) -> Result<Option<ScrumSession>, StandupError> {
        let state = self.state.lock().await;
        Ok(state
            .sessions
            .values()
            .find(|s| s.organizer_id == organizer_id && !s.is_completed)
            .cloned())
    }

    async fn complete_session(
        &self,
        session_id: &str,
        thread_conversation_id: &str,
    ) -> Result<bool, StandupError> {
        let mut state = self.state.lock().await;
        match state.sessions.get_mut(session_id) {
            Some(session) if !session.is_completed => {
                session.is_completed = true;
                session.thread_conversation_id = Some(thread_conversation_id.to_string());
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn upsert_status_entry(&self, entry: &StatusEntry) -> Result<(), StandupError> {
        let mut state = self.state.lock().await;
        state.entries.insert(
            (entry.session_id.clone(), entry.participant_id.clone()),
            entry.clone(),
        );
        Ok(())
    }

    async fn list_status_entries(
        &self,
        session_id: &str,
    ) -> Result<Vec<StatusEntry>, StandupError> {
        let state = self.state.lock().await;
        Ok(state
            .entries
            .values()
            .filter(|e| e.session_id == session_id)
            .cloned()
            .collect())
    }
}
