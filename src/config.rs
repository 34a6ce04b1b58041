//! Application configuration loaded from environment variables.
//!
//! The auth token is optional at startup: the client can render the local
//! (offline) forest approximation without one, and every API call that needs
//! a token surfaces its absence as a banner instead.

use std::env;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the wellness/gait API (no trailing slash)
    pub api_base_url: String,
    /// Bearer token for API calls, if the user is signed in
    pub auth_token: Option<String>,
    /// Maximum eco score used for the local health approximation
    pub max_eco_score: u32,
}

impl Default for Config {
    /// Default config for testing only.
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:8000".to_string(),
            auth_token: None,
            max_eco_score: 100,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        Ok(Self {
            api_base_url: env::var("API_BASE_URL")
                .map(|v| v.trim_end_matches('/').to_string())
                .map_err(|_| ConfigError::Missing("API_BASE_URL"))?,
            auth_token: env::var("AUTH_TOKEN")
                .ok()
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty()),
            max_eco_score: env::var("MAX_ECO_SCORE")
                .unwrap_or_else(|_| "100".to_string())
                .parse()
                .unwrap_or(100),
        })
    }

    /// The bearer token, or the missing-token error for call sites to surface.
    pub fn require_token(&self) -> Result<&str, crate::error::AppError> {
        self.auth_token
            .as_deref()
            .ok_or(crate::error::AppError::MissingAuthToken)
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_env() {
        env::set_var("API_BASE_URL", "https://api.example.com/");
        env::set_var("AUTH_TOKEN", "  token-123  ");

        let config = Config::from_env().expect("Config should load");

        assert_eq!(config.api_base_url, "https://api.example.com");
        assert_eq!(config.auth_token.as_deref(), Some("token-123"));
        assert_eq!(config.max_eco_score, 100);
    }

    #[test]
    fn test_require_token_missing() {
        let config = Config::default();
        assert!(config.require_token().is_err());
    }
}
