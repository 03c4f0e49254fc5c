//! Modal message handling
//!
//! Routes to the UI-owned delete guard first, then to the record editor
//! owned by the controller.

use domain_panel_core::RecordModal;

use crate::message::ModalMessage;
use crate::model::state::UiModal;
use crate::model::App;

pub fn update(app: &mut App, msg: ModalMessage) {
    if app.modal.is_open() {
        update_confirm_delete(app, msg);
    } else if app.controller.modal().is_open() {
        update_record_editor(app, msg);
    }
}

fn update_confirm_delete(app: &mut App, msg: ModalMessage) {
    let Some(UiModal::ConfirmDelete {
        record_id,
        delete_selected,
    }) = app.modal.active
    else {
        return;
    };

    match msg {
        ModalMessage::Close => app.modal.close(),
        ModalMessage::ToggleDeleteFocus => {
            app.modal.active = Some(UiModal::ConfirmDelete {
                record_id,
                delete_selected: !delete_selected,
            });
        }
        ModalMessage::Confirm => {
            app.modal.close();
            if delete_selected {
                let _ = app.runtime.block_on(app.controller.delete_record(record_id));
                app.records.clamp(app.controller.records().len());
            }
        }
        _ => {}
    }
}

fn update_record_editor(app: &mut App, msg: ModalMessage) {
    match msg {
        ModalMessage::Close => {
            app.controller.close_modal();
        }
        ModalMessage::NextField => {
            let count = editor_field_count(app);
            app.modal.record_field = (app.modal.record_field + 1) % count;
        }
        ModalMessage::PrevField => {
            let count = editor_field_count(app);
            app.modal.record_field = (app.modal.record_field + count - 1) % count;
        }
        ModalMessage::CycleType => {
            if app.modal.record_field == 1 {
                if let Some(form) = app.controller.modal_form_mut() {
                    form.cycle_type();
                }
                let count = editor_field_count(app);
                app.modal.record_field = app.modal.record_field.min(count - 1);
            }
        }
        ModalMessage::Input(ch) => {
            let field = app.modal.record_field;
            if let Some(form) = app.controller.modal_form_mut() {
                match field {
                    0 => form.name.push(ch),
                    2 => form.value.push(ch),
                    3 if ch.is_ascii_digit() => form.ttl.push(ch),
                    4 if ch.is_ascii_digit() => form.priority.push(ch),
                    _ => {}
                }
            }
        }
        ModalMessage::Backspace => {
            let field = app.modal.record_field;
            if let Some(form) = app.controller.modal_form_mut() {
                match field {
                    0 => {
                        form.name.pop();
                    }
                    2 => {
                        form.value.pop();
                    }
                    3 => {
                        form.ttl.pop();
                    }
                    4 => {
                        form.priority.pop();
                    }
                    _ => {}
                }
            }
        }
        ModalMessage::Confirm => {
            let _ = app.runtime.block_on(app.controller.submit_record());
            app.records.clamp(app.controller.records().len());
        }
        ModalMessage::ToggleDeleteFocus => {}
    }
}

/// name, type, value, ttl, plus priority when the type carries one
fn editor_field_count(app: &App) -> usize {
    match app.controller.modal() {
        RecordModal::Open { form, .. } if form.record_type.requires_priority() => 5,
        _ => 4,
    }
}
