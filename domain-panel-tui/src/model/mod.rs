//! Model layer: application state

mod app;
mod focus;
mod page;
pub mod state;

pub use app::App;
pub use focus::FocusPanel;
pub use page::{DetailTab, Page};
