//! Per-panel UI state

mod domain_list;
mod login;
mod modal;
mod nameservers;
mod notifications;
mod records;
mod settings_tab;

pub use domain_list::DomainListState;
pub use login::{LoginForm, LoginMode};
pub use modal::{ModalState, UiModal};
pub use nameservers::{NameserverFormState, NS_ROWS};
pub use notifications::{NoticeKind, NotificationState};
pub use records::RecordsState;
pub use settings_tab::{SettingsItem, SettingsTabState};
