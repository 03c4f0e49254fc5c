//! REST client for the Domain Panel
//!
//! Implements the `DomainApi` and `AuthApi` ports from `domain-panel-core`
//! against the panel's REST/JSON contract.

pub mod auth;
pub mod config;
mod http;
pub mod rest;

pub use auth::RestAuthApi;
pub use config::ClientConfig;
pub use rest::RestDomainApi;
