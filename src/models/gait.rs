// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Wire types for the gait-recognition API.
//!
//! The gait profile itself is a server-side biometric embedding; the client
//! only sees its metadata and processing status.

use serde::{Deserialize, Serialize};

/// Processing state reported by `GET /gait/profile-status`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileState {
    NotFound,
    Processing,
    Completed,
    Failed,
    Error,
}

impl ProfileState {
    /// Terminal states halt the poll loop immediately.
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            ProfileState::Completed | ProfileState::Failed | ProfileState::Error
        )
    }
}

/// Status response from `GET /gait/profile-status`.
#[derive(Debug, Clone, Deserialize)]
pub struct ProfileStatus {
    pub status: ProfileState,
    #[serde(default)]
    pub message: Option<String>,
}

/// Profile metadata from `GET /gait/user-profile`.
#[derive(Debug, Clone, Deserialize)]
pub struct GaitProfile {
    pub id: String,
    pub created_at: String,
    pub embedding_dimension: u32,
}

/// Generic `{message}` response (upload confirmation, deletion confirmation).
#[derive(Debug, Clone, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_state_terminal() {
        assert!(ProfileState::Completed.is_terminal());
        assert!(ProfileState::Failed.is_terminal());
        assert!(ProfileState::Error.is_terminal());
        assert!(!ProfileState::Processing.is_terminal());
        assert!(!ProfileState::NotFound.is_terminal());
    }

    #[test]
    fn test_status_deserializes_snake_case() {
        let status: ProfileStatus =
            serde_json::from_str(r#"{"status": "not_found", "message": "No gait profile found"}"#)
                .unwrap();
        assert_eq!(status.status, ProfileState::NotFound);
        assert_eq!(status.message.as_deref(), Some("No gait profile found"));
    }
}
