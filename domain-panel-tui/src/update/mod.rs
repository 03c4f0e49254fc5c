//! Update layer: the only place that mutates the model
//!
//! Async controller calls are bridged by blocking on the app-owned
//! runtime; the event loop serializes user actions, so each call
//! completes before the next message is handled.

mod content;
mod login;
mod modal;
mod search;

use crate::message::AppMessage;
use crate::model::{App, FocusPanel};

pub fn update(app: &mut App, msg: AppMessage) {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
        }

        AppMessage::ToggleFocus => {
            if !app.modal_is_open() {
                app.focus = app.focus.toggle();
            }
        }

        AppMessage::NextTab => {
            if app.focus.is_detail() {
                app.tab = app.tab.next();
            }
        }

        AppMessage::PrevTab => {
            if app.focus.is_detail() {
                app.tab = app.tab.prev();
            }
        }

        AppMessage::Content(content_msg) => {
            content::update(app, content_msg);
        }

        AppMessage::Modal(modal_msg) => {
            modal::update(app, modal_msg);
        }

        AppMessage::Search(search_msg) => {
            search::update(app, search_msg);
        }

        AppMessage::Login(login_msg) => {
            login::update(app, login_msg);
        }

        AppMessage::GoBack => {
            if app.modal.is_open() {
                app.modal.close();
            } else if app.controller.modal().is_open() {
                app.controller.close_modal();
            } else if app.domain_list.search_active {
                search::update(app, crate::message::SearchMessage::Cancel);
            } else if app.focus.is_detail() {
                app.focus = FocusPanel::DomainList;
            }
        }

        AppMessage::Refresh => {
            let _ = app.runtime.block_on(app.controller.load_domains());
            app.domain_list
                .clamp(app.controller.filtered_domains().count());
            app.records.clamp(app.controller.records().len());
        }

        AppMessage::Noop => {}
    }
}
