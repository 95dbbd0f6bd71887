// SPDX-FileCopyrightText: 2026 Standup Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Scrum session coordination: the lifecycle state machine and the
//! summary aggregator.

pub mod coordinator;
pub mod summary;

pub use coordinator::{SessionCoordinator, SessionDetails, SessionState};
pub use summary::summarize;
