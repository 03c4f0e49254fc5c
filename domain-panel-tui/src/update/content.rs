//! Content panel message handling

use crate::message::ContentMessage;
use crate::model::state::SettingsItem;
use crate::model::{App, DetailTab, FocusPanel};

pub fn update(app: &mut App, msg: ContentMessage) {
    if app.focus.is_domain_list() {
        update_domain_list(app, msg);
    } else {
        match app.tab {
            DetailTab::Overview => update_overview(app, msg),
            DetailTab::DnsRecords => update_records(app, msg),
            DetailTab::Nameservers => update_nameservers(app, msg),
            DetailTab::Settings => update_settings(app, msg),
        }
    }
}

fn update_domain_list(app: &mut App, msg: ContentMessage) {
    let len = app.controller.filtered_domains().count();
    match msg {
        ContentMessage::SelectPrevious => app.domain_list.select_previous(),
        ContentMessage::SelectNext => app.domain_list.select_next(len),
        ContentMessage::SelectFirst => app.domain_list.select_first(),
        ContentMessage::SelectLast => app.domain_list.select_last(len),
        ContentMessage::Confirm => {
            let id = app
                .controller
                .filtered_domains()
                .nth(app.domain_list.selected)
                .map(|d| d.id);
            if let Some(id) = id {
                if app
                    .runtime
                    .block_on(app.controller.select_domain(id))
                    .is_ok()
                {
                    app.focus = FocusPanel::Detail;
                    app.records.selected = 0;
                }
            }
        }
        _ => {}
    }
}

fn update_overview(app: &mut App, msg: ContentMessage) {
    match msg {
        ContentMessage::ToggleLock => {
            let _ = app.runtime.block_on(app.controller.toggle_domain_lock());
        }
        ContentMessage::ToggleAutoRenewal => {
            let _ = app.runtime.block_on(app.controller.toggle_auto_renewal());
        }
        _ => {}
    }
}

fn update_records(app: &mut App, msg: ContentMessage) {
    let len = app.controller.records().len();
    match msg {
        ContentMessage::SelectPrevious => app.records.select_previous(),
        ContentMessage::SelectNext => app.records.select_next(len),
        ContentMessage::SelectFirst => app.records.selected = 0,
        ContentMessage::SelectLast => {
            if len > 0 {
                app.records.selected = len - 1;
            }
        }
        ContentMessage::Add => {
            app.controller.open_add_modal();
            app.modal.record_field = 0;
        }
        ContentMessage::Edit | ContentMessage::Confirm => {
            let id = app
                .controller
                .records()
                .get(app.records.selected)
                .map(|r| r.id);
            if let Some(id) = id {
                if app
                    .runtime
                    .block_on(app.controller.open_edit_modal(id))
                    .is_ok()
                {
                    app.modal.record_field = 0;
                }
            }
        }
        ContentMessage::Delete => {
            if let Some(record) = app.controller.records().get(app.records.selected) {
                app.modal.show_confirm_delete(record.id);
            }
        }
        _ => {}
    }
}

fn update_nameservers(app: &mut App, msg: ContentMessage) {
    match msg {
        ContentMessage::SelectPrevious => app.nameservers.prev_field(),
        ContentMessage::SelectNext => app.nameservers.next_field(),
        ContentMessage::Input(ch) => app.nameservers.input(ch),
        ContentMessage::Backspace => app.nameservers.backspace(),
        ContentMessage::Confirm => {
            let rows = app.nameservers.to_rows();
            let _ = app
                .runtime
                .block_on(app.controller.submit_nameservers(&rows));
        }
        _ => {}
    }
}

fn update_settings(app: &mut App, msg: ContentMessage) {
    match msg {
        ContentMessage::SelectPrevious => app.settings.select_previous(),
        ContentMessage::SelectNext => app.settings.select_next(),
        ContentMessage::Input(ch) => app.settings.input(ch),
        ContentMessage::Backspace => app.settings.backspace(),
        ContentMessage::Confirm => match app.settings.selected_item() {
            SettingsItem::TransferLock => {
                let _ = app.runtime.block_on(app.controller.toggle_domain_lock());
            }
            SettingsItem::AutoRenewal => {
                let _ = app.runtime.block_on(app.controller.toggle_auto_renewal());
            }
            SettingsItem::RenewalDays => {
                let enabled = app
                    .controller
                    .current_domain()
                    .is_some_and(|d| d.auto_renewal_enabled);
                let days = app.settings.days_input.clone();
                let _ = app
                    .runtime
                    .block_on(app.controller.submit_settings(enabled, &days));
            }
        },
        ContentMessage::ToggleLock => {
            let _ = app.runtime.block_on(app.controller.toggle_domain_lock());
        }
        ContentMessage::ToggleAutoRenewal => {
            let _ = app.runtime.block_on(app.controller.toggle_auto_renewal());
        }
        _ => {}
    }
}
