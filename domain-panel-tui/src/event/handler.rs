//! Event handler

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, ContentMessage, LoginMessage, ModalMessage, SearchMessage};
use crate::model::{App, DetailTab, Page};

pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app),
        // Resize redraws on the next frame
        _ => AppMessage::Noop,
    }
}

fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // Press only; Release/Repeat cause double input on some terminals
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    if DefaultKeymap::FORCE_QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    if app.page == Page::Login {
        return handle_login_keys(key);
    }

    if app.modal_is_open() {
        return handle_modal_keys(key, app);
    }

    if app.domain_list.search_active {
        return handle_search_keys(key);
    }

    if DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }
    if DefaultKeymap::REFRESH.matches(&key) {
        return AppMessage::Refresh;
    }
    if DefaultKeymap::BACK.matches(&key) {
        return AppMessage::GoBack;
    }
    if key.modifiers.is_empty() && key.code == KeyCode::Tab {
        return AppMessage::ToggleFocus;
    }

    if app.focus.is_domain_list() {
        handle_domain_list_keys(key)
    } else {
        handle_detail_keys(key, app)
    }
}

fn handle_login_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::SWITCH_MODE.matches(&key) {
        return AppMessage::Login(LoginMessage::SwitchMode);
    }

    match key.code {
        KeyCode::Esc => AppMessage::Quit,
        KeyCode::Tab | KeyCode::Down => AppMessage::Login(LoginMessage::NextField),
        KeyCode::BackTab | KeyCode::Up => AppMessage::Login(LoginMessage::PrevField),
        KeyCode::Enter => AppMessage::Login(LoginMessage::Submit),
        KeyCode::Backspace => AppMessage::Login(LoginMessage::Backspace),
        KeyCode::Char(ch) if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT => {
            AppMessage::Login(LoginMessage::Input(ch))
        }
        _ => AppMessage::Noop,
    }
}

fn handle_domain_list_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::SEARCH.matches(&key) {
        return AppMessage::Search(SearchMessage::Start);
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => AppMessage::Content(ContentMessage::SelectPrevious),
        KeyCode::Down | KeyCode::Char('j') => AppMessage::Content(ContentMessage::SelectNext),
        KeyCode::Home => AppMessage::Content(ContentMessage::SelectFirst),
        KeyCode::End => AppMessage::Content(ContentMessage::SelectLast),
        KeyCode::Enter => AppMessage::Content(ContentMessage::Confirm),
        _ => AppMessage::Noop,
    }
}

fn handle_detail_keys(key: KeyEvent, app: &App) -> AppMessage {
    if DefaultKeymap::TOGGLE_LOCK.matches(&key) {
        return AppMessage::Content(ContentMessage::ToggleLock);
    }
    if DefaultKeymap::TOGGLE_AUTO_RENEWAL.matches(&key) {
        return AppMessage::Content(ContentMessage::ToggleAutoRenewal);
    }

    match app.tab {
        DetailTab::DnsRecords => {
            if DefaultKeymap::ACTION_ADD.matches(&key) {
                return AppMessage::Content(ContentMessage::Add);
            }
            if DefaultKeymap::ACTION_EDIT.matches(&key) {
                return AppMessage::Content(ContentMessage::Edit);
            }
            if DefaultKeymap::ACTION_DELETE.matches(&key) {
                return AppMessage::Content(ContentMessage::Delete);
            }
        }
        DetailTab::Nameservers | DetailTab::Settings => {
            // Text entry tabs take plain characters before tab switching
            match key.code {
                KeyCode::Char(ch)
                    if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT =>
                {
                    return AppMessage::Content(ContentMessage::Input(ch));
                }
                KeyCode::Backspace => return AppMessage::Content(ContentMessage::Backspace),
                _ => {}
            }
        }
        DetailTab::Overview => {}
    }

    match key.code {
        KeyCode::Left => AppMessage::PrevTab,
        KeyCode::Right => AppMessage::NextTab,
        KeyCode::Up | KeyCode::Char('k') => AppMessage::Content(ContentMessage::SelectPrevious),
        KeyCode::Down | KeyCode::Char('j') => AppMessage::Content(ContentMessage::SelectNext),
        KeyCode::Home => AppMessage::Content(ContentMessage::SelectFirst),
        KeyCode::End => AppMessage::Content(ContentMessage::SelectLast),
        KeyCode::Enter => AppMessage::Content(ContentMessage::Confirm),
        _ => AppMessage::Noop,
    }
}

fn handle_search_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        KeyCode::Esc => AppMessage::Search(SearchMessage::Cancel),
        KeyCode::Enter => AppMessage::Search(SearchMessage::Apply),
        KeyCode::Backspace => AppMessage::Search(SearchMessage::Backspace),
        KeyCode::Char(ch) if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT => {
            AppMessage::Search(SearchMessage::Input(ch))
        }
        _ => AppMessage::Noop,
    }
}

fn handle_modal_keys(key: KeyEvent, app: &App) -> AppMessage {
    match (key.modifiers, key.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) | (KeyModifiers::NONE, KeyCode::Esc) => {
            return AppMessage::Modal(ModalMessage::Close);
        }
        _ => {}
    }

    if app.modal.is_open() {
        // Delete guard
        return match key.code {
            KeyCode::Tab | KeyCode::Left | KeyCode::Right => {
                AppMessage::Modal(ModalMessage::ToggleDeleteFocus)
            }
            KeyCode::Enter => AppMessage::Modal(ModalMessage::Confirm),
            _ => AppMessage::Noop,
        };
    }

    // Record editor
    match key.code {
        KeyCode::Tab | KeyCode::Down => AppMessage::Modal(ModalMessage::NextField),
        KeyCode::BackTab | KeyCode::Up => AppMessage::Modal(ModalMessage::PrevField),
        KeyCode::Left | KeyCode::Right => {
            if app.modal.record_field == 1 {
                AppMessage::Modal(ModalMessage::CycleType)
            } else {
                AppMessage::Noop
            }
        }
        KeyCode::Enter => AppMessage::Modal(ModalMessage::Confirm),
        KeyCode::Backspace => AppMessage::Modal(ModalMessage::Backspace),
        KeyCode::Char(ch) if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT => {
            AppMessage::Modal(ModalMessage::Input(ch))
        }
        _ => AppMessage::Noop,
    }
}
