//! Domain Panel TUI
//!
//! Elm-style architecture:
//! - **Model**: application state (`model/`)
//! - **Message**: events as data (`message/`)
//! - **Update**: state transitions (`update/`)
//! - **View**: rendering (`view/`)
//! - **Event**: input handling (`event/`)
//! - **Backend**: config, token storage, notifier bridge (`backend/`)
//!
//! The business layer lives in `domain-panel-core` behind injected
//! traits; this binary wires it to the REST client and the terminal.

mod app;
mod backend;
mod event;
mod message;
mod model;
mod update;
mod util;
mod view;

use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::runtime::Runtime;

use domain_panel_client::{RestAuthApi, RestDomainApi};
use domain_panel_core::{PanelController, Session, TokenStore};

use backend::{JsonTokenStore, UiNotifier};
use model::{App, Page};
use util::{init_terminal, restore_terminal};

fn main() -> Result<()> {
    let runtime = Runtime::new().context("failed to start async runtime")?;

    let store = Arc::new(JsonTokenStore::new());
    let token = runtime.block_on(store.load()).unwrap_or(None);

    let mut config = runtime.block_on(backend::load_client_config());
    config.token = token.clone();

    let api = Arc::new(RestDomainApi::new(&config).context("failed to build API client")?);
    let auth_api = Arc::new(RestAuthApi::new(&config).context("failed to build auth client")?);
    let notifier = Arc::new(UiNotifier::new());

    let mut controller = PanelController::new(api.clone(), notifier.clone());
    let session = Session::new(auth_api, store);

    // A stored token skips the login page; a stale one surfaces as an
    // API error on the first load.
    let page = if token.is_some() {
        let _ = runtime.block_on(controller.load_domains());
        Page::Panel
    } else {
        Page::Login
    };

    let mut app = App::new(runtime, controller, session, api, notifier, page);

    let mut terminal = init_terminal()?;
    let result = app::run(&mut terminal, &mut app);
    restore_terminal(&mut terminal)?;

    result
}
