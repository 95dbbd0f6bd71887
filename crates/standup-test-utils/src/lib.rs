// SPDX-FileCopyrightText: 2026 Standup Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for Standup integration tests.
//!
//! Provides mock adapters and test harness infrastructure for fast,
//! deterministic, CI-runnable tests without external services.
//!
//! # Components
//!
//! - [`MockSink`] - Mock render surface with call capture and injectable failure
//! - [`MemoryRepository`] - In-memory `ScrumRepository` for coordinator unit tests
//! - [`TestHarness`] - Coordinator over a temp SQLite database

pub mod harness;
pub mod memory_repo;
pub mod mock_sink;

pub use harness::TestHarness;
pub use memory_repo::MemoryRepository;
pub use mock_sink::MockSink;
