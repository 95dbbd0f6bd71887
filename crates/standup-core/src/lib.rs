// SPDX-FileCopyrightText: 2026 Standup Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Standup scrum coordinator.
//!
//! This crate provides the foundational trait definitions, error types,
//! and domain records used throughout the Standup workspace. The
//! storage and coordinator crates both depend only on what is defined
//! here.

pub mod error;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::StandupError;
pub use types::{
    OrganizerConfig, RenderEvent, RenderPayload, ScrumSession, StatusEntry, Summary, SummaryRow,
};

pub use traits::{NotificationSink, ScrumRepository};

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn make_session() -> ScrumSession {
        let mut members = HashMap::new();
        members.insert("user-a".to_string(), "handle-a".to_string());
        members.insert("user-b".to_string(), "handle-b".to_string());
        ScrumSession {
            id: "sess-1".to_string(),
            organizer_id: "org-1".to_string(),
            anchor_ref: "anchor-1".to_string(),
            summary_ref: "summary-1".to_string(),
            members,
            is_completed: false,
            thread_conversation_id: None,
            created_at: "2026-01-01T09:00:00.000Z".to_string(),
        }
    }

    #[test]
    fn submission_handle_lookup() {
        let session = make_session();
        assert_eq!(session.submission_handle("user-a"), Some("handle-a"));
        assert_eq!(session.submission_handle("stranger"), None);
    }

    #[test]
    fn summary_completeness() {
        let complete = Summary {
            rows: Vec::new(),
            submitted: 3,
            total: 3,
        };
        let partial = Summary {
            rows: Vec::new(),
            submitted: 1,
            total: 3,
        };
        assert!(complete.is_complete());
        assert!(!partial.is_complete());
    }

    #[test]
    fn render_event_round_trips() {
        use std::str::FromStr;

        let variants = [
            RenderEvent::SessionStarted,
            RenderEvent::StatusSubmitted,
            RenderEvent::SessionEnded,
        ];
        for variant in &variants {
            let s = variant.to_string();
            let parsed = RenderEvent::from_str(&s).expect("should parse back");
            assert_eq!(*variant, parsed);
        }
        assert_eq!(RenderEvent::SessionEnded.to_string(), "session_ended");
    }

    #[test]
    fn session_serializes_with_members_map() {
        let session = make_session();
        let json = serde_json::to_string(&session).expect("should serialize");
        let parsed: ScrumSession = serde_json::from_str(&json).expect("should deserialize");
        assert_eq!(session, parsed);
    }

    #[test]
    fn standup_error_has_all_variants() {
        // Verify every rejection in the taxonomy can be constructed.
        let _config = StandupError::Config("test".into());
        let _not_found = StandupError::ConfigNotFound {
            organizer_id: "org-1".into(),
        };
        let _missing = StandupError::SessionDoesNotExist {
            anchor_ref: "anchor-1".into(),
        };
        let _active = StandupError::SessionAlreadyActive {
            organizer_id: "org-1".into(),
            summary_ref: "summary-1".into(),
        };
        let _completed = StandupError::SessionAlreadyCompleted {
            session_id: "sess-1".into(),
        };
        let _not_participant = StandupError::NotAParticipant {
            participant_id: "user-x".into(),
        };
        let _validation = StandupError::Validation {
            missing_yesterday: true,
            missing_today: false,
        };
        let _storage = StandupError::storage(std::io::Error::other("test"));
        let _render = StandupError::Render {
            target_ref: "summary-1".into(),
            message: "test".into(),
        };
        let _internal = StandupError::Internal("test".into());
    }

    #[test]
    fn error_messages_name_the_actor() {
        let err = StandupError::NotAParticipant {
            participant_id: "user-x".into(),
        };
        assert!(err.to_string().contains("user-x"));

        let err = StandupError::SessionAlreadyActive {
            organizer_id: "org-1".into(),
            summary_ref: "summary-1".into(),
        };
        assert!(err.to_string().contains("org-1"));
    }

    #[test]
    fn collaborator_traits_are_object_safe() {
        fn _assert_repository(_: &dyn ScrumRepository) {}
        fn _assert_sink(_: &dyn NotificationSink) {}
    }
}
