//! Client configuration file
//!
//! Reads `config.json` from the user config dir; a missing or broken
//! file falls back to the defaults so the panel still starts.

use domain_panel_client::ClientConfig;
use std::path::PathBuf;
use tokio::fs;

use super::config_dir;

fn config_file() -> PathBuf {
    config_dir().join("config.json")
}

pub async fn load_client_config() -> ClientConfig {
    let path = config_file();

    if !path.exists() {
        return ClientConfig::default();
    }

    let content = match fs::read_to_string(&path).await {
        Ok(content) => content,
        Err(e) => {
            log::warn!("Failed to read {}: {e}", path.display());
            return ClientConfig::default();
        }
    };

    match serde_json::from_str(&content) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("Invalid config file {}: {e}", path.display());
            ClientConfig::default()
        }
    }
}
