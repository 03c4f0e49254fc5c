//! Login page handling

use crate::message::LoginMessage;
use crate::model::state::LoginMode;
use crate::model::{App, Page};

pub fn update(app: &mut App, msg: LoginMessage) {
    match msg {
        LoginMessage::NextField => app.login.next_field(),
        LoginMessage::PrevField => app.login.prev_field(),
        LoginMessage::Input(ch) => app.login.input(ch),
        LoginMessage::Backspace => app.login.backspace(),
        LoginMessage::SwitchMode => app.login.switch_mode(),
        LoginMessage::Submit => submit(app),
    }
}

fn submit(app: &mut App) {
    let result = match app.login.mode {
        LoginMode::Login => app
            .runtime
            .block_on(app.session.login(&app.login.email, &app.login.password)),
        LoginMode::Register => app.runtime.block_on(app.session.register(
            &app.login.first_name,
            &app.login.last_name,
            &app.login.email,
            &app.login.password,
        )),
    };

    match result {
        Ok(token) => {
            app.runtime.block_on(app.api.set_token(Some(token)));
            app.login.password.clear();
            app.login.error = None;
            app.page = Page::Panel;
            let _ = app.runtime.block_on(app.controller.load_domains());
        }
        Err(e) => {
            app.login.error = Some(e.to_string());
        }
    }
}
