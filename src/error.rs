// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application error types with consistent user-facing banners.

use serde::Serialize;

/// Application error type covering every failure the client surfaces.
///
/// None of these are fatal: each converts to a [`StatusBanner`] shown next
/// to the widget that triggered the call, and the UI stays interactive.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("No auth token available")]
    MissingAuthToken,

    #[error("Server returned non-JSON response: {0}")]
    NonJsonResponse(String),

    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Unsupported file type: {0}")]
    UnsupportedFileType(String),

    #[error("Polling timed out before processing finished")]
    PollTimeout,

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

/// Banner severity for status messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BannerKind {
    Success,
    Error,
}

/// User-visible status message shown near the triggering widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusBanner {
    pub kind: BannerKind,
    pub message: String,
}

impl StatusBanner {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: BannerKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: BannerKind::Error,
            message: message.into(),
        }
    }
}

impl AppError {
    /// Convert the error into the banner the UI displays.
    pub fn to_banner(&self) -> StatusBanner {
        let message = match self {
            AppError::MissingAuthToken => "Please log in to continue".to_string(),
            AppError::NonJsonResponse(_) => {
                "Server returned an unexpected response. Please try again.".to_string()
            }
            AppError::HttpStatus { status, .. } => {
                format!("Request failed (HTTP {}). Please try again.", status)
            }
            AppError::Network(_) => "Network error. Check your connection.".to_string(),
            AppError::UnsupportedFileType(_) => "Please upload a video file".to_string(),
            AppError::PollTimeout => {
                "Processing is taking longer than expected. Please refresh manually.".to_string()
            }
            AppError::Internal(err) => {
                tracing::error!(error = %err, "Internal error");
                "Something went wrong. Please try again.".to_string()
            }
        };

        StatusBanner::error(message)
    }
}

/// Result type alias used throughout the crate.
pub type Result<T> = std::result::Result<T, AppError>;
