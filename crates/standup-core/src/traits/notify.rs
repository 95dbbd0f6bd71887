// SPDX-FileCopyrightText: 2026 Standup Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Notification sink trait for render-surface refreshes.

use async_trait::async_trait;

use crate::error::StandupError;
use crate::types::RenderPayload;

/// Abstract render surface the coordinator refreshes after successful
/// operations.
///
/// The coordinator treats a failed render as non-fatal: it logs and
/// moves on, never retries. Retry policy belongs to the transport
/// layer, and the next event recomputes the summary from ground truth
/// anyway.
#[async_trait]
pub trait NotificationSink: Send + Sync + 'static {
    /// Request a refresh of the surface identified by `target_ref` with
    /// a freshly computed summary payload.
    async fn render(&self, target_ref: &str, payload: &RenderPayload)
    -> Result<(), StandupError>;
}
