//! Core data type definitions

mod auth;
mod dns;
mod domain;
mod response;
mod settings;

pub use auth::{AuthResponse, LoginRequest, RegisterRequest};
pub use dns::{DnsRecord, RecordPayload, RecordType, DEFAULT_TTL};
pub use domain::{Domain, DomainStatus};
pub use response::{ApiMessage, DomainListResponse, RecordListResponse};
pub use settings::{
    AutoRenewalUpdateRequest, LockUpdateRequest, Nameserver, NameserverUpdateRequest,
    RenewalSettings, DEFAULT_AUTO_RENEWAL_DAYS,
};
