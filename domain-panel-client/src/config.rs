//! Client configuration

use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str = "http://localhost:5000/api";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

/// Connection settings for the REST client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Bearer token; usually injected from the token store after login
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            token: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ClientConfig {
    /// Base URL with any trailing slash removed
    #[must_use]
    pub fn base(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    /// Server origin without the API prefix, for the auth endpoints
    /// which live under their own `/api/auth` path.
    #[must_use]
    pub fn origin(&self) -> &str {
        self.base().trim_end_matches("/api")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_on_empty_config() {
        let config: ClientConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout_secs, 10);
        assert_eq!(config.token, None);
    }

    #[test]
    fn base_strips_trailing_slash() {
        let config = ClientConfig {
            base_url: "https://panel.example.com/api/".to_string(),
            ..ClientConfig::default()
        };
        assert_eq!(config.base(), "https://panel.example.com/api");
        assert_eq!(config.origin(), "https://panel.example.com");
    }

    #[test]
    fn origin_handles_bases_without_api_suffix() {
        let config = ClientConfig {
            base_url: "https://panel.example.com".to_string(),
            ..ClientConfig::default()
        };
        assert_eq!(config.origin(), "https://panel.example.com");
    }
}
