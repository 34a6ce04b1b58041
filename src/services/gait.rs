// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Gait API client.
//!
//! Handles:
//! - Profile status and metadata fetches
//! - Profile deletion
//! - Multipart video upload (field `file`)
//!
//! The processing pipeline behind these endpoints is entirely server-side;
//! the client only uploads and watches the status.

use crate::error::AppError;
use crate::models::{GaitProfile, MessageResponse, ProfileStatus};
use crate::services::http::{check_json, TUNNEL_SKIP_HEADER};

/// Gait API client.
#[derive(Clone)]
pub struct GaitClient {
    http: reqwest::Client,
    base_url: String,
}

impl GaitClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Get the processing status of the user's gait profile.
    pub async fn profile_status(&self, access_token: &str) -> Result<ProfileStatus, AppError> {
        let url = format!("{}/gait/profile-status", self.base_url);
        let response = self
            .get(&url, access_token)
            .send()
            .await
            .map_err(|e| AppError::Network(e.to_string()))?;
        check_json(response).await
    }

    /// Get the user's gait profile metadata.
    pub async fn user_profile(&self, access_token: &str) -> Result<GaitProfile, AppError> {
        let url = format!("{}/gait/user-profile", self.base_url);
        let response = self
            .get(&url, access_token)
            .send()
            .await
            .map_err(|e| AppError::Network(e.to_string()))?;
        check_json(response).await
    }

    /// Delete the user's gait profile.
    pub async fn delete_profile(&self, access_token: &str) -> Result<MessageResponse, AppError> {
        let url = format!("{}/gait/user-profile", self.base_url);
        let response = self
            .http
            .delete(&url)
            .bearer_auth(access_token)
            .header(TUNNEL_SKIP_HEADER.0, TUNNEL_SKIP_HEADER.1)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| AppError::Network(e.to_string()))?;
        check_json(response).await
    }

    /// Upload a gait video for processing.
    pub async fn upload_video(
        &self,
        access_token: &str,
        file_name: &str,
        mime_type: &str,
        bytes: Vec<u8>,
    ) -> Result<MessageResponse, AppError> {
        let url = format!("{}/gait/upload-user-video", self.base_url);

        let part = reqwest::multipart::Part::bytes(bytes)
            .file_name(file_name.to_string())
            .mime_str(mime_type)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Invalid MIME type: {}", e)))?;
        let form = reqwest::multipart::Form::new().part("file", part);

        tracing::info!(file = %file_name, "Uploading gait video");

        let response = self
            .http
            .post(&url)
            .bearer_auth(access_token)
            .header(TUNNEL_SKIP_HEADER.0, TUNNEL_SKIP_HEADER.1)
            .header(reqwest::header::ACCEPT, "application/json")
            .multipart(form)
            .send()
            .await
            .map_err(|e| AppError::Network(e.to_string()))?;

        check_json(response).await
    }

    fn get(&self, url: &str, access_token: &str) -> reqwest::RequestBuilder {
        self.http
            .get(url)
            .bearer_auth(access_token)
            .header(TUNNEL_SKIP_HEADER.0, TUNNEL_SKIP_HEADER.1)
            .header(reqwest::header::ACCEPT, "application/json")
    }
}
