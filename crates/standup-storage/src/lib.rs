// SPDX-FileCopyrightText: 2026 Standup Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! SQLite persistence layer for the Standup coordinator.
//!
//! Provides WAL-mode SQLite storage with embedded migrations, a
//! single-writer concurrency model via `tokio-rusqlite`, and typed
//! query modules for organizer configs, scrum sessions, and status
//! entries. [`SqliteRepository`] is the `ScrumRepository` handed to the
//! coordinator.

pub mod adapter;
pub mod database;
pub mod migrations;
pub mod models;
pub mod queries;

pub use adapter::SqliteRepository;
pub use database::Database;
pub use models::*;
