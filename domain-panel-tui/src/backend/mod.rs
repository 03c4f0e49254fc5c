//! Backend layer: storage, configuration and the notifier bridge

mod config;
mod notifier;
mod token_store;

pub use config::load_client_config;
pub use notifier::{UiEvent, UiNotifier};
pub use token_store::JsonTokenStore;

use std::path::PathBuf;

/// Config directory for the panel, created on first write
pub(crate) fn config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("domain-panel")
}
