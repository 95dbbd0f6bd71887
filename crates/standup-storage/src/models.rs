// SPDX-FileCopyrightText: 2026 Standup Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain model types for storage entities.
//!
//! The canonical types are defined in `standup-core::types` for use
//! across the repository trait boundary. This module re-exports them
//! for convenience within the storage crate.

pub use standup_core::types::{OrganizerConfig, ScrumSession, StatusEntry};
