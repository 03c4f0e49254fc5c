//! Authentication session
//!
//! Wraps the auth API and token store behind a single entry point so the
//! frontend never touches tokens directly.

use std::sync::Arc;

use log::{info, warn};

use crate::error::{PanelError, PanelResult};
use crate::traits::{AuthApi, TokenStore};
use crate::types::{LoginRequest, RegisterRequest};

pub struct Session {
    api: Arc<dyn AuthApi>,
    store: Arc<dyn TokenStore>,
}

impl Session {
    pub fn new(api: Arc<dyn AuthApi>, store: Arc<dyn TokenStore>) -> Self {
        Self { api, store }
    }

    /// Returns the persisted token, if any
    pub async fn token(&self) -> PanelResult<Option<String>> {
        self.store.load().await
    }

    /// Logs in and persists the returned token.
    ///
    /// A failed persist does not fail the login; the session still holds
    /// a valid token for this run.
    pub async fn login(&self, email: &str, password: &str) -> PanelResult<String> {
        if email.trim().is_empty() || password.is_empty() {
            return Err(PanelError::ValidationError(
                "Email and password are required".to_string(),
            ));
        }

        let request = LoginRequest {
            email: email.trim().to_string(),
            password: password.to_string(),
        };
        let token = self.api.login(&request).await?;

        if let Err(e) = self.store.save(&token).await {
            warn!("Failed to persist token: {e}");
        }
        info!("Logged in as {}", request.email);
        Ok(token)
    }

    /// Registers a new account and persists the returned token
    pub async fn register(
        &self,
        first_name: &str,
        last_name: &str,
        email: &str,
        password: &str,
    ) -> PanelResult<String> {
        if first_name.trim().is_empty() || email.trim().is_empty() || password.is_empty() {
            return Err(PanelError::ValidationError(
                "Name, email and password are required".to_string(),
            ));
        }

        let request = RegisterRequest {
            first_name: first_name.trim().to_string(),
            last_name: last_name.trim().to_string(),
            email: email.trim().to_string(),
            password: password.to_string(),
        };
        let token = self.api.register(&request).await?;

        if let Err(e) = self.store.save(&token).await {
            warn!("Failed to persist token: {e}");
        }
        info!("Registered {}", request.email);
        Ok(token)
    }

    /// Clears the persisted token
    pub async fn logout(&self) -> PanelResult<()> {
        self.store.clear().await?;
        info!("Logged out");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{MockAuthApi, MockTokenStore};

    #[tokio::test]
    async fn login_persists_token() {
        let store = Arc::new(MockTokenStore::new());
        let session = Session::new(Arc::new(MockAuthApi::succeeding("jwt-123")), store.clone());

        let token = session.login("user@example.com", "pw").await.unwrap();
        assert_eq!(token, "jwt-123");
        assert_eq!(store.load().await.unwrap().as_deref(), Some("jwt-123"));
    }

    #[tokio::test]
    async fn login_rejects_empty_fields() {
        let session = Session::new(
            Arc::new(MockAuthApi::succeeding("jwt-123")),
            Arc::new(MockTokenStore::new()),
        );

        let err = session.login("  ", "pw").await.unwrap_err();
        assert!(matches!(err, PanelError::ValidationError(_)));
        let err = session.login("user@example.com", "").await.unwrap_err();
        assert!(matches!(err, PanelError::ValidationError(_)));
    }

    #[tokio::test]
    async fn login_failure_does_not_touch_store() {
        let store = Arc::new(MockTokenStore::new());
        store.save("old-token").await.unwrap();
        let session = Session::new(
            Arc::new(MockAuthApi::failing(PanelError::AuthError(
                "Invalid credentials".to_string(),
            ))),
            store.clone(),
        );

        let err = session.login("user@example.com", "wrong").await.unwrap_err();
        assert!(matches!(err, PanelError::AuthError(_)));
        assert_eq!(store.load().await.unwrap().as_deref(), Some("old-token"));
    }

    #[tokio::test]
    async fn register_persists_token() {
        let store = Arc::new(MockTokenStore::new());
        let session = Session::new(Arc::new(MockAuthApi::succeeding("jwt-reg")), store.clone());

        let token = session
            .register("Ada", "Lovelace", "ada@example.com", "pw")
            .await
            .unwrap();
        assert_eq!(token, "jwt-reg");
        assert_eq!(store.load().await.unwrap().as_deref(), Some("jwt-reg"));
    }

    #[tokio::test]
    async fn logout_clears_token() {
        let store = Arc::new(MockTokenStore::new());
        store.save("jwt-123").await.unwrap();
        let session = Session::new(Arc::new(MockAuthApi::succeeding("x")), store.clone());

        session.logout().await.unwrap();
        assert_eq!(store.load().await.unwrap(), None);
    }
}
