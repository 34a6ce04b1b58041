// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Video upload flow: file selection guard, bounded status polling, and the
//! coordinator that supersedes stale poll chains.
//!
//! The poll loop is a sequential timer chain on the UI task, not a thread.
//! It takes an explicit cancellation token so that unmounting the page or
//! starting a new upload stops the old chain instead of leaving a dangling
//! timer polling with stale context.

use std::future::Future;
use std::time::Duration;

use tokio::sync::watch;

use crate::error::{AppError, StatusBanner};
use crate::models::{GaitProfile, ProfileState, ProfileStatus};
use crate::services::GaitClient;

/// Fixed interval between status checks.
pub const POLL_INTERVAL: Duration = Duration::from_secs(2);

/// Hard cap on status checks (~2 minutes at the fixed interval).
pub const MAX_POLL_ATTEMPTS: u32 = 60;

// ─────────────────────────────────────────────────────────────────────────────
// Cancellation token
// ─────────────────────────────────────────────────────────────────────────────

/// Sender half: cancels the poll chain it was paired with.
pub struct CancelHandle {
    tx: watch::Sender<bool>,
}

impl CancelHandle {
    pub fn cancel(&self) {
        let _ = self.tx.send(true);
    }
}

impl Drop for CancelHandle {
    fn drop(&mut self) {
        let _ = self.tx.send(true);
    }
}

/// Receiver half, carried by the poll loop.
#[derive(Clone)]
pub struct CancelToken {
    rx: watch::Receiver<bool>,
}

impl CancelToken {
    pub fn is_cancelled(&self) -> bool {
        *self.rx.borrow()
    }

    /// Resolves once the paired handle cancels (or is dropped).
    pub async fn cancelled(&mut self) {
        while !*self.rx.borrow() {
            if self.rx.changed().await.is_err() {
                return;
            }
        }
    }
}

/// Create a linked cancel handle/token pair.
pub fn cancel_pair() -> (CancelHandle, CancelToken) {
    let (tx, rx) = watch::channel(false);
    (CancelHandle { tx }, CancelToken { rx })
}

// ─────────────────────────────────────────────────────────────────────────────
// Poll loop
// ─────────────────────────────────────────────────────────────────────────────

/// How a poll chain ended.
#[derive(Debug, Clone)]
pub enum PollOutcome {
    /// A terminal status arrived (completed, failed, or error).
    Terminal(ProfileStatus),
    /// The chain was superseded or the page went away.
    Cancelled,
}

/// Run the bounded poll loop against an injected status fetch.
///
/// A failed fetch is treated as transient and retried on the next tick; a
/// successful response carrying a terminal status halts the chain at once.
/// Exhausting the attempt cap is a [`AppError::PollTimeout`].
pub async fn poll_with<F, Fut>(mut fetch: F, mut cancel: CancelToken) -> Result<PollOutcome, AppError>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<ProfileStatus, AppError>>,
{
    for attempt in 1..=MAX_POLL_ATTEMPTS {
        tokio::select! {
            _ = cancel.cancelled() => {
                tracing::debug!(attempt, "Poll chain cancelled");
                return Ok(PollOutcome::Cancelled);
            }
            _ = tokio::time::sleep(POLL_INTERVAL) => {}
        }

        match fetch(attempt).await {
            Ok(status) if status.status.is_terminal() => {
                tracing::info!(attempt, status = ?status.status, "Poll reached terminal status");
                return Ok(PollOutcome::Terminal(status));
            }
            Ok(status) => {
                tracing::debug!(attempt, status = ?status.status, "Still processing");
            }
            Err(e) => {
                // Transient: a single failed status fetch does not end the chain
                tracing::warn!(attempt, error = %e, "Status fetch failed, will retry");
            }
        }
    }

    Err(AppError::PollTimeout)
}

// ─────────────────────────────────────────────────────────────────────────────
// File selection
// ─────────────────────────────────────────────────────────────────────────────

/// A file the user picked for upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub mime_type: String,
    pub size_bytes: u64,
}

/// Upload form state: the current selection and the status banner.
#[derive(Debug, Default)]
pub struct UploadForm {
    pub selected_file: Option<SelectedFile>,
    pub status: Option<StatusBanner>,
}

impl UploadForm {
    /// Accept a picked file if it is a video; otherwise surface an error and
    /// leave the selection untouched.
    pub fn select_file(&mut self, name: &str, mime_type: &str, size_bytes: u64) {
        if !mime_type.starts_with("video/") {
            self.status =
                Some(AppError::UnsupportedFileType(mime_type.to_string()).to_banner());
            return;
        }

        self.selected_file = Some(SelectedFile {
            name: name.to_string(),
            mime_type: mime_type.to_string(),
            size_bytes,
        });
        self.status = None;
    }

    /// Clear the selection (the form's cancel button).
    pub fn clear(&mut self) {
        self.selected_file = None;
        self.status = None;
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Coordinator
// ─────────────────────────────────────────────────────────────────────────────

/// Drives upload + poll and guarantees at most one live poll chain: starting
/// a new upload cancels the previous chain before the new one begins.
pub struct UploadCoordinator {
    gait: GaitClient,
    active: Option<CancelHandle>,
}

impl UploadCoordinator {
    pub fn new(gait: GaitClient) -> Self {
        Self { gait, active: None }
    }

    /// Cancel any in-flight poll chain and hand out the token for a new one.
    pub fn begin_poll(&mut self) -> CancelToken {
        if let Some(prev) = self.active.take() {
            tracing::debug!("Superseding previous poll chain");
            prev.cancel();
        }
        let (handle, token) = cancel_pair();
        self.active = Some(handle);
        token
    }

    /// Stop whatever chain is running (page unmount).
    pub fn stop(&mut self) {
        if let Some(handle) = self.active.take() {
            handle.cancel();
        }
    }

    /// Upload the selected video and poll until processing finishes.
    ///
    /// Returns the banner to display and, when processing completed, the
    /// freshly re-fetched profile metadata.
    pub async fn upload_and_poll(
        &mut self,
        access_token: &str,
        file: &SelectedFile,
        bytes: Vec<u8>,
    ) -> (StatusBanner, Option<GaitProfile>) {
        let upload = self
            .gait
            .upload_video(access_token, &file.name, &file.mime_type, bytes)
            .await;

        let accepted = match upload {
            Ok(response) => response,
            Err(e) => return (e.to_banner(), None),
        };
        tracing::info!(
            message = accepted.message.as_deref().unwrap_or(""),
            "Upload accepted, polling status"
        );

        let token = self.begin_poll();
        let gait = self.gait.clone();
        let auth = access_token.to_string();
        let outcome = poll_with(move |_| {
            let gait = gait.clone();
            let auth = auth.clone();
            async move { gait.profile_status(&auth).await }
        }, token)
        .await;

        match outcome {
            Ok(PollOutcome::Terminal(status)) if status.status == ProfileState::Completed => {
                let profile = match self.gait.user_profile(access_token).await {
                    Ok(profile) => Some(profile),
                    Err(e) => {
                        tracing::warn!(error = %e, "Profile re-fetch after completion failed");
                        None
                    }
                };
                (
                    StatusBanner::success("✅ Profile completed! Your gait profile is ready."),
                    profile,
                )
            }
            Ok(PollOutcome::Terminal(_)) => (
                StatusBanner::error("Profile processing failed. Please try again."),
                None,
            ),
            Ok(PollOutcome::Cancelled) => (
                StatusBanner::success("Upload superseded by a newer one."),
                None,
            ),
            Err(e) => (e.to_banner(), None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BannerKind;

    #[test]
    fn test_select_file_rejects_non_video() {
        let mut form = UploadForm::default();
        form.select_file("notes.pdf", "application/pdf", 1024);

        assert!(form.selected_file.is_none());
        let status = form.status.expect("error banner expected");
        assert_eq!(status.kind, BannerKind::Error);
    }

    #[test]
    fn test_select_file_accepts_video_and_clears_banner() {
        let mut form = UploadForm::default();
        form.select_file("notes.pdf", "application/pdf", 1024);
        form.select_file("walk.mp4", "video/mp4", 2048);

        let file = form.selected_file.expect("selection expected");
        assert_eq!(file.name, "walk.mp4");
        assert!(form.status.is_none());
    }

    #[test]
    fn test_clear_resets_form() {
        let mut form = UploadForm::default();
        form.select_file("walk.mp4", "video/mp4", 2048);
        form.clear();
        assert!(form.selected_file.is_none());
        assert!(form.status.is_none());
    }

    #[tokio::test]
    async fn test_cancel_token_observes_handle_drop() {
        let (handle, mut token) = cancel_pair();
        assert!(!token.is_cancelled());
        drop(handle);
        token.cancelled().await;
        assert!(token.is_cancelled());
    }
}
