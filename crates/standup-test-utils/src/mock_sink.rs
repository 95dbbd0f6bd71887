// SPDX-FileCopyrightText: 2026 Standup Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock notification sink for deterministic testing.
//!
//! `MockSink` implements `NotificationSink` with captured render calls
//! for assertion in tests, plus an injectable failure switch.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use standup_core::types::RenderPayload;
use standup_core::{NotificationSink, StandupError};

/// A mock render surface for testing.
///
/// Every `render()` call is captured as a `(target_ref, payload)` pair
/// retrievable via `rendered()`. Calling `fail_next()` makes the next
/// render return an error, for exercising non-fatal render paths.
pub struct MockSink {
    rendered: Arc<Mutex<Vec<(String, RenderPayload)>>>,
    fail_next: Arc<Mutex<bool>>,
}

impl MockSink {
    /// Create a new mock sink with an empty capture log.
    pub fn new() -> Self {
        Self {
            rendered: Arc::new(Mutex::new(Vec::new())),
            fail_next: Arc::new(Mutex::new(false)),
        }
    }

    /// Get all captured render calls.
    pub async fn rendered(&self) -> Vec<(String, RenderPayload)> {
        self.rendered.lock().await.clone()
    }

    /// Get the count of captured render calls.
    pub async fn rendered_count(&self) -> usize {
        self.rendered.lock().await.len()
    }

    /// Clear the capture log.
    pub async fn clear(&self) {
        self.rendered.lock().await.clear();
    }

    /// Make the next `render()` call fail.
    pub async fn fail_next(&self) {
        *self.fail_next.lock().await = true;
    }
}

impl Default for MockSink {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NotificationSink for MockSink {
    async fn render(&self, target_ref: &str, payload: &RenderPayload) -> Result<(), StandupError> {
        let mut fail = self.fail_next.lock().await;
        if *fail {
            *fail = false;
            return Err(StandupError::Render {
                target_ref: target_ref.to_string(),
                message: "injected render failure".to_string(),
            });
        }
        self.rendered
            .lock()
            .await
            .push((target_ref.to_string(), payload.clone()));
        Ok(())
    }
}
