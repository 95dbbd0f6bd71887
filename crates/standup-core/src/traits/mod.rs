// SPDX-FileCopyrightText: 2026 Standup Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Collaborator trait definitions consumed by the session coordinator.
//!
//! Both traits use `#[async_trait]` for dynamic dispatch compatibility;
//! the coordinator holds them as `Arc<dyn Trait>`.

pub mod notify;
pub mod repository;

pub use notify::NotificationSink;
pub use repository::ScrumRepository;
