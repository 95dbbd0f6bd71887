// SPDX-FileCopyrightText: 2026 Standup Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `ScrumRepository` implementation backed by SQLite.

use async_trait::async_trait;
use standup_core::traits::ScrumRepository;
use standup_core::types::{OrganizerConfig, ScrumSession, StatusEntry};
use standup_core::StandupError;

use crate::database::Database;
use crate::queries;

/// Repository over the WAL-mode SQLite database.
///
/// Holds no state beyond the connection handle: every call reads or
/// writes current truth through the single background writer thread.
#[derive(Clone)]
pub struct SqliteRepository {
    db: Database,
}

impl SqliteRepository {
    /// Wrap an opened database.
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// The underlying database handle.
    pub fn database(&self) -> &Database {
        &self.db
    }
}

#[async_trait]
impl ScrumRepository for SqliteRepository {
    async fn organizer_config(
        &self,
        organizer_id: &str,
    ) -> Result<Option<OrganizerConfig>, StandupError> {
        queries::configs::get_config(&self.db, organizer_id).await
    }

    async fn insert_session(&self, session: &ScrumSession) -> Result<(), StandupError> {
        queries::sessions::insert_session(&self.db, session).await
    }

    async fn session_by_anchor(
        &self,
        anchor_ref: &str,
    ) -> Result<Option<ScrumSession>, StandupError> {
        queries::sessions::get_session_by_anchor(&self.db, anchor_ref).await
    }

    async fn active_session(
        &self,
        organizer_id: &str,
    ) -> Result<Option<ScrumSession>, StandupError> {
        queries::sessions::get_active_session(&self.db, organizer_id).await
    }

    async fn complete_session(
        &self,
        session_id: &str,
        thread_conversation_id: &str,
    ) -> Result<bool, StandupError> {
        queries::sessions::complete_session(&self.db, session_id, thread_conversation_id).await
    }

    async fn upsert_status_entry(&self, entry: &StatusEntry) -> Result<(), StandupError> {
        queries::status::upsert_status_entry(&self.db, entry).await
    }

    async fn list_status_entries(
        &self,
        session_id: &str,
    ) -> Result<Vec<StatusEntry>, StandupError> {
        queries::status::list_status_entries(&self.db, session_id).await
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use tempfile::tempdir;

    async fn setup_repo() -> (SqliteRepository, tempfile::TempDir) {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("repo_test.db");
        let db = Database::open(db_path.to_str().unwrap()).await.unwrap();
        (SqliteRepository::new(db), dir)
    }

    #[tokio::test]
    async fn repository_exposes_all_collections() {
        let (repo, _dir) = setup_repo().await;

        let config = OrganizerConfig {
            organizer_id: "org-1".to_string(),
            team_id: "team-1".to_string(),
            channel_id: "chan-1".to_string(),
            time_zone: "UTC".to_string(),
            roster: vec!["user-a".to_string()],
            is_active: true,
        };
        queries::configs::upsert_config(repo.database(), &config)
            .await
            .unwrap();
        assert!(repo.organizer_config("org-1").await.unwrap().is_some());

        let mut members = HashMap::new();
        members.insert("user-a".to_string(), "handle-a".to_string());
        let session = ScrumSession {
            id: "s1".to_string(),
            organizer_id: "org-1".to_string(),
            anchor_ref: "anchor-1".to_string(),
            summary_ref: "summary-1".to_string(),
            members,
            is_completed: false,
            thread_conversation_id: None,
            created_at: "2026-01-01T09:00:00.000Z".to_string(),
        };
        repo.insert_session(&session).await.unwrap();
        assert!(repo.session_by_anchor("anchor-1").await.unwrap().is_some());
        assert!(repo.active_session("org-1").await.unwrap().is_some());

        let entry = StatusEntry {
            session_id: "s1".to_string(),
            participant_id: "user-a".to_string(),
            submission_handle: "handle-a".to_string(),
            yesterday: "shipped".to_string(),
            today: "more shipping".to_string(),
            blockers: None,
            submitted_at: "2026-01-01T09:05:00.000Z".to_string(),
        };
        repo.upsert_status_entry(&entry).await.unwrap();
        assert_eq!(repo.list_status_entries("s1").await.unwrap().len(), 1);

        assert!(repo.complete_session("s1", "thread-1").await.unwrap());
        assert!(!repo.complete_session("s1", "thread-2").await.unwrap());
        assert!(repo.active_session("org-1").await.unwrap().is_none());
    }
}
