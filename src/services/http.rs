// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared response handling for the API clients.

use serde::Deserialize;

use crate::error::AppError;

/// Header that bypasses the tunneling proxy's browser interstitial.
pub(crate) const TUNNEL_SKIP_HEADER: (&str, &str) = ("ngrok-skip-browser-warning", "true");

/// Check the response status and parse the JSON body.
///
/// Maps the failure modes onto the client error taxonomy: non-2xx becomes
/// [`AppError::HttpStatus`], a body that is not JSON becomes
/// [`AppError::NonJsonResponse`].
pub(crate) async fn check_json<T: for<'de> Deserialize<'de>>(
    response: reqwest::Response,
) -> Result<T, AppError> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        tracing::warn!(status = %status, "API request failed");
        return Err(AppError::HttpStatus {
            status: status.as_u16(),
            body,
        });
    }

    let is_json = response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ct| ct.contains("application/json"));
    if !is_json {
        let body = response.text().await.unwrap_or_default();
        return Err(AppError::NonJsonResponse(truncate(&body)));
    }

    let body = response
        .text()
        .await
        .map_err(|e| AppError::Network(e.to_string()))?;
    serde_json::from_str(&body).map_err(|_| AppError::NonJsonResponse(truncate(&body)))
}

fn truncate(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() <= MAX {
        body.to_string()
    } else {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        body[..end].to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_respects_char_boundaries() {
        let short = truncate("hello");
        assert_eq!(short, "hello");

        let long = "é".repeat(150);
        let cut = truncate(&long);
        assert!(cut.len() <= 200);
        assert!(cut.chars().all(|c| c == 'é'));
    }
}
