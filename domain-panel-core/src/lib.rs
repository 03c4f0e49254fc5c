//! Domain Panel Core Library
//!
//! Provides the business logic for the domain management panel:
//! - Domain list, selection and search (Panel Controller)
//! - DNS record editing with a modal state machine
//! - Nameserver and renewal settings updates
//! - Authentication session with token persistence
//!
//! The library is frontend-independent: the API, token storage and user
//! feedback are abstracted through traits, so the controller can be driven
//! by a terminal UI or by tests alike.

pub mod controller;
pub mod error;
pub mod session;
pub mod traits;
pub mod types;
pub mod utils;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use controller::{PanelController, RecordForm, RecordModal};
pub use error::{PanelError, PanelResult};
pub use session::Session;
pub use traits::{AuthApi, DomainApi, Notifier, TokenStore};
