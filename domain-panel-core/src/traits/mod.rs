//! Port definitions implemented by the frontend and the API client

use crate::error::PanelResult;
use crate::types::{
    DnsRecord, Domain, LoginRequest, Nameserver, RecordPayload, RegisterRequest, RenewalSettings,
};
use async_trait::async_trait;

/// Domain API port.
///
/// The client keeps an active-domain context: [`DomainApi::set_active_domain`]
/// scopes every subsequent record, nameserver and settings call.
#[async_trait]
pub trait DomainApi: Send + Sync {
    async fn list_domains(&self) -> PanelResult<Vec<Domain>>;

    /// Sets the domain that scopes all domain-level calls below
    async fn set_active_domain(&self, name: &str) -> PanelResult<()>;

    async fn list_records(&self) -> PanelResult<Vec<DnsRecord>>;

    async fn get_record(&self, id: u64) -> PanelResult<DnsRecord>;

    async fn create_record(&self, payload: &RecordPayload) -> PanelResult<()>;

    async fn update_record(&self, id: u64, payload: &RecordPayload) -> PanelResult<()>;

    async fn delete_record(&self, id: u64) -> PanelResult<()>;

    /// Replaces the full nameserver set for the active domain
    async fn update_nameservers(&self, nameservers: &[Nameserver]) -> PanelResult<()>;

    async fn update_settings(&self, settings: &RenewalSettings) -> PanelResult<()>;

    async fn set_domain_lock(&self, enabled: bool) -> PanelResult<()>;

    async fn set_auto_renewal(&self, enabled: bool) -> PanelResult<()>;
}

/// Authentication API port; both calls resolve to a bearer token
#[async_trait]
pub trait AuthApi: Send + Sync {
    async fn login(&self, request: &LoginRequest) -> PanelResult<String>;

    async fn register(&self, request: &RegisterRequest) -> PanelResult<String>;
}

/// Token persistence port
#[async_trait]
pub trait TokenStore: Send + Sync {
    async fn load(&self) -> PanelResult<Option<String>>;

    async fn save(&self, token: &str) -> PanelResult<()>;

    async fn clear(&self) -> PanelResult<()>;
}

/// User-feedback port implemented by the frontend.
///
/// Calls are synchronous and must not block; the frontend records them
/// and renders on its next frame.
pub trait Notifier: Send + Sync {
    fn success(&self, message: &str);

    fn error(&self, message: &str);

    /// Fired only on idle/busy transitions, never on nested calls
    fn busy_changed(&self, busy: bool);
}
