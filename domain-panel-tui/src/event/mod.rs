//! Event layer: input polling and key-to-message translation

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
