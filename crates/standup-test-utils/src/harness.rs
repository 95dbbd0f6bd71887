// SPDX-FileCopyrightText: 2026 Standup Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test harness for end-to-end integration testing.
//!
//! `TestHarness` assembles a coordinator over a temp SQLite database
//! and a mock render sink, with helpers for seeding organizer
//! configurations.

use std::sync::Arc;

use standup_coordinator::SessionCoordinator;
use standup_core::types::OrganizerConfig;
use standup_core::StandupError;
use standup_storage::{Database, SqliteRepository};

use crate::mock_sink::MockSink;

/// A fully wired coordinator stack for integration tests.
///
/// The temp directory owns the database file and is removed when the
/// harness drops.
pub struct TestHarness {
    pub coordinator: SessionCoordinator,
    pub repository: Arc<SqliteRepository>,
    pub sink: Arc<MockSink>,
    _temp_dir: tempfile::TempDir,
}

impl TestHarness {
    /// Build a harness over a fresh migrated database.
    pub async fn new() -> Result<Self, StandupError> {
        let temp_dir = tempfile::TempDir::new()
            .map_err(|e| StandupError::Internal(format!("temp dir: {e}")))?;
        let db_path = temp_dir.path().join("standup.db");
        let db = Database::open(&db_path.to_string_lossy()).await?;

        let repository = Arc::new(SqliteRepository::new(db));
        let sink = Arc::new(MockSink::new());
        let coordinator = SessionCoordinator::new(repository.clone(), sink.clone());

        Ok(Self {
            coordinator,
            repository,
            sink,
            _temp_dir: temp_dir,
        })
    }

    /// Store an active organizer configuration with the given roster.
    pub async fn seed_config(
        &self,
        organizer_id: &str,
        roster: &[&str],
    ) -> Result<(), StandupError> {
        let config = OrganizerConfig {
            organizer_id: organizer_id.to_string(),
            team_id: "team-1".to_string(),
            channel_id: format!("channel-{organizer_id}"),
            time_zone: "UTC".to_string(),
            roster: roster.iter().map(|p| p.to_string()).collect(),
            is_active: true,
        };
        standup_storage::queries::configs::upsert_config(
            self.repository.database(),
            &config,
        )
        .await
    }
}
