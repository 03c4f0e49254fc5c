//! Search prompt handling
//!
//! The filter is live: every keystroke re-runs the controller search.

use crate::message::SearchMessage;
use crate::model::App;

pub fn update(app: &mut App, msg: SearchMessage) {
    match msg {
        SearchMessage::Start => {
            app.domain_list.search_active = true;
        }
        SearchMessage::Input(ch) => {
            app.domain_list.search_input.push(ch);
            apply(app);
        }
        SearchMessage::Backspace => {
            app.domain_list.search_input.pop();
            apply(app);
        }
        SearchMessage::Apply => {
            app.domain_list.search_active = false;
        }
        SearchMessage::Cancel => {
            app.domain_list.search_active = false;
            app.domain_list.search_input.clear();
            apply(app);
        }
    }
}

fn apply(app: &mut App) {
    let query = app.domain_list.search_input.clone();
    app.controller.search(&query);
    app.domain_list.selected = 0;
}
