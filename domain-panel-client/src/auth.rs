//! `AuthApi` implementation
//!
//! The auth endpoints live under `{origin}/api/auth`, outside the panel
//! API prefix.

use std::time::Duration;

use async_trait::async_trait;
use domain_panel_core::traits::AuthApi;
use domain_panel_core::types::{AuthResponse, LoginRequest, RegisterRequest};
use domain_panel_core::{PanelError, PanelResult};

use crate::config::ClientConfig;
use crate::http;

pub struct RestAuthApi {
    client: reqwest::Client,
    origin: String,
}

impl RestAuthApi {
    pub fn new(config: &ClientConfig) -> PanelResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| PanelError::NetworkError(e.to_string()))?;

        Ok(Self {
            client,
            origin: config.origin().to_string(),
        })
    }

    fn auth_url(&self, action: &str) -> String {
        format!("{}/api/auth/{action}", self.origin)
    }

    /// Posts the body and resolves the token envelope.
    ///
    /// A 2xx response without any token field is still a failure; the
    /// server message (when present) becomes the error text.
    async fn post_credentials<B: serde::Serialize>(
        &self,
        action: &str,
        body: &B,
        fallback: &str,
    ) -> PanelResult<String> {
        let url = self.auth_url(action);
        let request = self.client.post(&url).json(body);
        let (status, text) = http::execute_request(request, "POST", &url).await?;

        let response: AuthResponse = http::parse_json(&text).unwrap_or_default();
        if !(200..300).contains(&status) {
            let message = response.message.unwrap_or_else(|| fallback.to_string());
            return Err(PanelError::AuthError(message));
        }

        match response.token() {
            Some(token) => Ok(token.to_string()),
            None => Err(PanelError::AuthError(
                response.message.unwrap_or_else(|| fallback.to_string()),
            )),
        }
    }
}

#[async_trait]
impl AuthApi for RestAuthApi {
    async fn login(&self, request: &LoginRequest) -> PanelResult<String> {
        self.post_credentials("login", request, "Login failed").await
    }

    async fn register(&self, request: &RegisterRequest) -> PanelResult<String> {
        self.post_credentials("register", request, "Registration failed")
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_urls_sit_outside_api_prefix() {
        let api = RestAuthApi::new(&ClientConfig::default()).unwrap();
        assert_eq!(api.auth_url("login"), "http://localhost:5000/api/auth/login");

        let api = RestAuthApi::new(&ClientConfig {
            base_url: "https://panel.example.com/api".to_string(),
            ..ClientConfig::default()
        })
        .unwrap();
        assert_eq!(
            api.auth_url("register"),
            "https://panel.example.com/api/auth/register"
        );
    }
}
