//! Token storage
//!
//! Persists the bearer token as a JSON file in the user config dir.
//! Implements the `TokenStore` trait from domain-panel-core.

use async_trait::async_trait;
use domain_panel_core::{PanelError, PanelResult, TokenStore};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tokio::fs;
use tokio::sync::Mutex;

use super::config_dir;

fn token_file() -> PathBuf {
    config_dir().join("token.json")
}

#[derive(Debug, Serialize, Deserialize)]
struct StoredToken {
    token: String,
}

/// JSON-file backed token store
pub struct JsonTokenStore {
    /// In-memory cache, filled on first load
    cache: Mutex<Option<String>>,
}

impl JsonTokenStore {
    pub fn new() -> Self {
        Self {
            cache: Mutex::new(None),
        }
    }

    async fn ensure_config_dir() -> PanelResult<()> {
        let dir = config_dir();
        if !dir.exists() {
            fs::create_dir_all(&dir)
                .await
                .map_err(|e| PanelError::StorageError(e.to_string()))?;
        }
        Ok(())
    }

    async fn load_from_file() -> PanelResult<Option<String>> {
        let path = token_file();

        if !path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&path)
            .await
            .map_err(|e| PanelError::StorageError(e.to_string()))?;

        let stored: StoredToken = serde_json::from_str(&content)
            .map_err(|e| PanelError::SerializationError(e.to_string()))?;

        Ok(Some(stored.token))
    }
}

impl Default for JsonTokenStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TokenStore for JsonTokenStore {
    async fn load(&self) -> PanelResult<Option<String>> {
        {
            let cache = self.cache.lock().await;
            if cache.is_some() {
                return Ok(cache.clone());
            }
        }

        let token = Self::load_from_file().await?;

        *self.cache.lock().await = token.clone();

        Ok(token)
    }

    async fn save(&self, token: &str) -> PanelResult<()> {
        Self::ensure_config_dir().await?;

        let content = serde_json::to_string_pretty(&StoredToken {
            token: token.to_string(),
        })
        .map_err(|e| PanelError::SerializationError(e.to_string()))?;

        fs::write(token_file(), content)
            .await
            .map_err(|e| PanelError::StorageError(e.to_string()))?;

        *self.cache.lock().await = Some(token.to_string());

        Ok(())
    }

    async fn clear(&self) -> PanelResult<()> {
        let path = token_file();
        if path.exists() {
            fs::remove_file(&path)
                .await
                .map_err(|e| PanelError::StorageError(e.to_string()))?;
        }

        *self.cache.lock().await = None;

        Ok(())
    }
}
