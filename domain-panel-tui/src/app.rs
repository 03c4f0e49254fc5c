//! Application main loop

use std::time::Duration;

use anyhow::Result;

use crate::event;
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

/// Runs the main loop: draw, poll, dispatch, update.
///
/// The 100ms poll timeout doubles as the redraw tick for notification
/// expiry and the busy indicator.
pub fn run(terminal: &mut Term, app: &mut App) -> Result<()> {
    loop {
        app.sync_notifications();

        terminal.draw(|frame| {
            view::render(app, frame);
        })?;

        if app.should_quit {
            break;
        }

        if let Some(event) = event::poll_event(Duration::from_millis(100))? {
            let msg = event::handle_event(event, app);
            update::update(app, msg);
        }
    }

    Ok(())
}
