// SPDX-FileCopyrightText: 2026 Standup Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Status entry queries.
//!
//! Entries are keyed by (session_id, participant_id) and written with a
//! single-statement upsert: a resubmission replaces the whole record,
//! so a racing double-submission can never produce a merged row.

use rusqlite::params;
use standup_core::StandupError;

use crate::database::Database;
use crate::models::StatusEntry;

fn row_to_entry(row: &rusqlite::Row<'_>) -> rusqlite::Result<StatusEntry> {
    Ok(StatusEntry {
        session_id: row.get(0)?,
        participant_id: row.get(1)?,
        submission_handle: row.get(2)?,
        yesterday: row.get(3)?,
        today: row.get(4)?,
        blockers: row.get(5)?,
        submitted_at: row.get(6)?,
    })
}

/// Upsert a participant's status entry. Last write wins in full.
pub async fn upsert_status_entry(db: &Database, entry: &StatusEntry) -> Result<(), StandupError> {
    let entry = entry.clone();
    db.connection()
        .call(move |conn| {
            conn.execute(
                "INSERT INTO status_entries
                     (session_id, participant_id, submission_handle,
                      yesterday, today, blockers, submitted_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
                 ON CONFLICT (session_id, participant_id) DO UPDATE SET
                     submission_handle = excluded.submission_handle,
                     yesterday = excluded.yesterday,
                     today = excluded.today,
                     blockers = excluded.blockers,
                     submitted_at = excluded.submitted_at",
                params![
                    entry.session_id,
                    entry.participant_id,
                    entry.submission_handle,
                    entry.yesterday,
                    entry.today,
                    entry.blockers,
                    entry.submitted_at,
                ],
            )?;
            Ok(())
        })
        .await
        .map_err(crate::database::map_tr_err)
}

/// All entries for a session. Order is not meaningful; the aggregator
/// must not rely on it.
pub async fn list_status_entries(
    db: &Database,
    session_id: &str,
) -> Result<Vec<StatusEntry>, StandupError> {
    let session_id = session_id.to_string();
    db.connection()
        .call(move |conn| {
            let mut stmt = conn.prepare(
                "SELECT session_id, participant_id, submission_handle,
                        yesterday, today, blockers, submitted_at
                 FROM status_entries WHERE session_id = ?1",
            )?;
            let rows = stmt.query_map(params![session_id], row_to_entry)?;
            let mut entries = Vec::new();
            for row in rows {
                entries.push(row?);
            }
            Ok(entries)
        })
        .await
        .map_err(crate::database::map_tr_err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    async fn setup_db() -> (Database, tempfile::TempDir) {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("test.db");
        let db = Database::open(db_path.to_str().unwrap()).await.unwrap();
        (db, dir)
    }

    fn make_entry(session_id: &str, participant_id: &str, yesterday: &str) -> StatusEntry {
        StatusEntry {
            session_id: session_id.to_string(),
            participant_id: participant_id.to_string(),
            submission_handle: format!("{participant_id}-handle"),
            yesterday: yesterday.to_string(),
            today: "continue feature work".to_string(),
            blockers: None,
            submitted_at: "2026-01-01T09:05:00.000Z".to_string(),
        }
    }

    #[tokio::test]
    async fn upsert_and_list_roundtrips() {
        let (db, _dir) = setup_db().await;
        let entry = make_entry("s1", "user-a", "fixed the build");

        upsert_status_entry(&db, &entry).await.unwrap();
        let entries = list_status_entries(&db, "s1").await.unwrap();
        assert_eq!(entries, vec![entry]);

        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn resubmission_overwrites_not_duplicates() {
        let (db, _dir) = setup_db().await;
        upsert_status_entry(&db, &make_entry("s1", "user-a", "first version"))
            .await
            .unwrap();

        let mut updated = make_entry("s1", "user-a", "second version");
        updated.blockers = Some("waiting on review".to_string());
        upsert_status_entry(&db, &updated).await.unwrap();

        let entries = list_status_entries(&db, "s1").await.unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].yesterday, "second version");
        assert_eq!(entries[0].blockers.as_deref(), Some("waiting on review"));

        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn entries_are_scoped_to_session() {
        let (db, _dir) = setup_db().await;
        upsert_status_entry(&db, &make_entry("s1", "user-a", "s1 work"))
            .await
            .unwrap();
        upsert_status_entry(&db, &make_entry("s2", "user-a", "s2 work"))
            .await
            .unwrap();

        let s1 = list_status_entries(&db, "s1").await.unwrap();
        assert_eq!(s1.len(), 1);
        assert_eq!(s1[0].yesterday, "s1 work");

        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn empty_session_lists_nothing() {
        let (db, _dir) = setup_db().await;
        let entries = list_status_entries(&db, "never-written").await.unwrap();
        assert!(entries.is_empty());
        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn concurrent_upserts_from_many_participants() {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("concurrent_test.db");
        let db = Database::open(db_path.to_str().unwrap()).await.unwrap();

        // Ten participants racing through the same single-writer
        // connection must all land without SQLITE_BUSY.
        let mut handles = Vec::new();
        for i in 0..10 {
            let db = db.clone();
            handles.push(tokio::spawn(async move {
                let entry = make_entry("s1", &format!("user-{i}"), "parallel work");
                upsert_status_entry(&db, &entry).await
            }));
        }
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        let entries = list_status_entries(&db, "s1").await.unwrap();
        assert_eq!(entries.len(), 10);

        db.close().await.unwrap();
    }
}
