//! Message layer: the bridge between Event and Update
//!
//! Every user action becomes a message; the update layer consumes
//! messages and is the only place that mutates the model.

mod app;
mod content;
mod login;
mod modal;
mod search;

pub use app::AppMessage;
pub use content::ContentMessage;
pub use login::LoginMessage;
pub use modal::ModalMessage;
pub use search::SearchMessage;
