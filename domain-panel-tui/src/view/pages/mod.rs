//! Page renderers

pub mod dns_records;
pub mod domains;
pub mod login;
pub mod nameservers;
pub mod overview;
pub mod settings;
