// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Wellness API client.
//!
//! Fetches the server-computed forest snapshot. The user view fetches one
//! snapshot; the admin view fetches every user's. Same layout, different
//! data source.

use crate::error::AppError;
use crate::models::WellnessSnapshot;
use crate::services::http::{check_json, TUNNEL_SKIP_HEADER};

/// Wellness API client.
#[derive(Clone)]
pub struct WellnessClient {
    http: reqwest::Client,
    base_url: String,
}

impl WellnessClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Get the signed-in user's wellness snapshot.
    pub async fn get_forest(&self, access_token: &str) -> Result<WellnessSnapshot, AppError> {
        let url = format!("{}/wellness/forest", self.base_url);
        self.get_json(&url, access_token).await
    }

    /// List all users' snapshots (admin view).
    pub async fn list_forests(&self, access_token: &str) -> Result<Vec<WellnessSnapshot>, AppError> {
        let url = format!("{}/wellness/forests", self.base_url);
        self.get_json(&url, access_token).await
    }

    async fn get_json<T: for<'de> serde::Deserialize<'de>>(
        &self,
        url: &str,
        access_token: &str,
    ) -> Result<T, AppError> {
        let response = self
            .http
            .get(url)
            .bearer_auth(access_token)
            .header(TUNNEL_SKIP_HEADER.0, TUNNEL_SKIP_HEADER.1)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| AppError::Network(e.to_string()))?;

        check_json(response).await
    }
}
