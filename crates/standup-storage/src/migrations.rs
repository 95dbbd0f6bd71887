// SPDX-FileCopyrightText: 2026 Standup Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Embedded database migrations using refinery.
//!
//! SQL migration files are compiled into the binary at build time via
//! `embed_migrations!` and run automatically on database open.

use standup_core::StandupError;

mod embedded {
    use refinery::embed_migrations;
    embed_migrations!("migrations");
}

/// Run all pending migrations against the given connection.
///
/// Refinery tracks applied migrations in its own
/// `refinery_schema_history` table, so re-running on an up-to-date
/// database is a no-op.
pub fn run_migrations(conn: &mut rusqlite::Connection) -> Result<(), StandupError> {
    embedded::migrations::runner()
        .run(conn)
        .map_err(StandupError::storage)?;
    Ok(())
}
