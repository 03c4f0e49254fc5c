//! Application state root

use std::sync::Arc;
use std::time::Instant;

use domain_panel_client::RestDomainApi;
use domain_panel_core::{PanelController, Session};
use tokio::runtime::Runtime;

use crate::backend::{UiEvent, UiNotifier};

use super::state::{
    DomainListState, LoginForm, ModalState, NameserverFormState, NotificationState, RecordsState,
    SettingsTabState,
};
use super::{DetailTab, FocusPanel, Page};

pub struct App {
    pub should_quit: bool,

    pub page: Page,
    pub focus: FocusPanel,
    pub tab: DetailTab,

    // === Panel state ===
    pub domain_list: DomainListState,
    pub records: RecordsState,
    pub nameservers: NameserverFormState,
    pub settings: SettingsTabState,
    pub login: LoginForm,
    pub modal: ModalState,
    pub notifications: NotificationState,

    // === Business layer ===
    pub controller: PanelController,
    pub session: Session,
    /// Kept to inject a fresh token after login
    pub api: Arc<RestDomainApi>,
    pub notifier: Arc<UiNotifier>,
    pub runtime: Runtime,
}

impl App {
    pub fn new(
        runtime: Runtime,
        controller: PanelController,
        session: Session,
        api: Arc<RestDomainApi>,
        notifier: Arc<UiNotifier>,
        page: Page,
    ) -> Self {
        Self {
            should_quit: false,
            page,
            focus: FocusPanel::default(),
            tab: DetailTab::default(),
            domain_list: DomainListState::new(),
            records: RecordsState::new(),
            nameservers: NameserverFormState::new(),
            settings: SettingsTabState::new(),
            login: LoginForm::new(),
            modal: ModalState::new(),
            notifications: NotificationState::new(),
            controller,
            session,
            api,
            notifier,
            runtime,
        }
    }

    /// Whether any modal (UI-owned or the record editor) is open
    pub fn modal_is_open(&self) -> bool {
        self.modal.is_open() || self.controller.modal().is_open()
    }

    /// Moves queued notifier events into the status bar and drops the
    /// expired ones; called once per frame.
    pub fn sync_notifications(&mut self) {
        for event in self.notifier.drain() {
            match event {
                UiEvent::Success(text) => self.notifications.push_success(text),
                UiEvent::Error(text) => self.notifications.push_error(text),
            }
        }
        self.notifications.prune(Instant::now());
    }
}
