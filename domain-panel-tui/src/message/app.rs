//! Top-level message enum

use super::{ContentMessage, LoginMessage, ModalMessage, SearchMessage};

#[derive(Debug, Clone)]
pub enum AppMessage {
    /// Quit the application
    Quit,

    /// Toggle focus between domain list and detail panel
    ToggleFocus,

    /// Switch detail tab
    NextTab,
    PrevTab,

    /// Content panel messages
    Content(ContentMessage),

    /// Modal messages (record editor, delete guard)
    Modal(ModalMessage),

    /// Search prompt messages
    Search(SearchMessage),

    /// Login page messages
    Login(LoginMessage),

    /// Escape: close modal / leave search / back to the list
    GoBack,

    /// Reload domains and records
    Refresh,

    /// No-op for unhandled events
    Noop,
}
