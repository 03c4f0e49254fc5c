//! Test helper module
//!
//! Provides mock port implementations and convenient factory methods.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::NaiveDate;
use tokio::sync::RwLock;

use crate::error::{PanelError, PanelResult};
use crate::traits::{AuthApi, DomainApi, Notifier, TokenStore};
use crate::types::{
    DnsRecord, Domain, DomainStatus, LoginRequest, Nameserver, RecordPayload, RecordType,
    RegisterRequest, RenewalSettings,
};

// ===== MockDomainApi =====

pub struct MockDomainApi {
    pub domains: RwLock<Vec<Domain>>,
    pub records: RwLock<Vec<DnsRecord>>,
    pub active_domain: RwLock<Option<String>>,
    pub nameservers: RwLock<Vec<Nameserver>>,
    pub settings: RwLock<Option<RenewalSettings>>,
    /// If Some, the next call returns this error (consumed on use)
    pub fail_next: RwLock<Option<PanelError>>,
}

impl MockDomainApi {
    pub fn new() -> Self {
        Self {
            domains: RwLock::new(Vec::new()),
            records: RwLock::new(Vec::new()),
            active_domain: RwLock::new(None),
            nameservers: RwLock::new(Vec::new()),
            settings: RwLock::new(None),
            fail_next: RwLock::new(None),
        }
    }

    pub async fn set_fail_next(&self, err: PanelError) {
        *self.fail_next.write().await = Some(err);
    }

    async fn take_failure(&self) -> PanelResult<()> {
        if let Some(err) = self.fail_next.write().await.take() {
            return Err(err);
        }
        Ok(())
    }
}

#[async_trait]
impl DomainApi for MockDomainApi {
    async fn list_domains(&self) -> PanelResult<Vec<Domain>> {
        self.take_failure().await?;
        Ok(self.domains.read().await.clone())
    }

    async fn set_active_domain(&self, name: &str) -> PanelResult<()> {
        self.take_failure().await?;
        *self.active_domain.write().await = Some(name.to_string());
        Ok(())
    }

    async fn list_records(&self) -> PanelResult<Vec<DnsRecord>> {
        self.take_failure().await?;
        Ok(self.records.read().await.clone())
    }

    async fn get_record(&self, id: u64) -> PanelResult<DnsRecord> {
        self.take_failure().await?;
        self.records
            .read()
            .await
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or_else(|| PanelError::RecordNotFound(id.to_string()))
    }

    async fn create_record(&self, payload: &RecordPayload) -> PanelResult<()> {
        self.take_failure().await?;
        let mut records = self.records.write().await;
        let id = records.iter().map(|r| r.id).max().unwrap_or(0) + 1;
        records.push(DnsRecord {
            id,
            name: payload.name.clone(),
            record_type: payload.record_type,
            value: payload.value.clone(),
            ttl: payload.ttl,
            priority: payload.priority,
        });
        Ok(())
    }

    async fn update_record(&self, id: u64, payload: &RecordPayload) -> PanelResult<()> {
        self.take_failure().await?;
        let mut records = self.records.write().await;
        let record = records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| PanelError::RecordNotFound(id.to_string()))?;
        record.name = payload.name.clone();
        record.record_type = payload.record_type;
        record.value = payload.value.clone();
        record.ttl = payload.ttl;
        record.priority = payload.priority;
        Ok(())
    }

    async fn delete_record(&self, id: u64) -> PanelResult<()> {
        self.take_failure().await?;
        let mut records = self.records.write().await;
        let before = records.len();
        records.retain(|r| r.id != id);
        if records.len() == before {
            return Err(PanelError::RecordNotFound(id.to_string()));
        }
        Ok(())
    }

    async fn update_nameservers(&self, nameservers: &[Nameserver]) -> PanelResult<()> {
        self.take_failure().await?;
        *self.nameservers.write().await = nameservers.to_vec();
        Ok(())
    }

    async fn update_settings(&self, settings: &RenewalSettings) -> PanelResult<()> {
        self.take_failure().await?;
        *self.settings.write().await = Some(settings.clone());
        Ok(())
    }

    async fn set_domain_lock(&self, _enabled: bool) -> PanelResult<()> {
        self.take_failure().await
    }

    async fn set_auto_renewal(&self, _enabled: bool) -> PanelResult<()> {
        self.take_failure().await
    }
}

// ===== MockAuthApi =====

pub struct MockAuthApi {
    pub token: String,
    pub fail_with: Option<PanelError>,
}

impl MockAuthApi {
    pub fn succeeding(token: &str) -> Self {
        Self {
            token: token.to_string(),
            fail_with: None,
        }
    }

    pub fn failing(err: PanelError) -> Self {
        Self {
            token: String::new(),
            fail_with: Some(err),
        }
    }
}

#[async_trait]
impl AuthApi for MockAuthApi {
    async fn login(&self, _request: &LoginRequest) -> PanelResult<String> {
        match &self.fail_with {
            Some(err) => Err(err.clone()),
            None => Ok(self.token.clone()),
        }
    }

    async fn register(&self, _request: &RegisterRequest) -> PanelResult<String> {
        match &self.fail_with {
            Some(err) => Err(err.clone()),
            None => Ok(self.token.clone()),
        }
    }
}

// ===== MockTokenStore =====

pub struct MockTokenStore {
    pub token: RwLock<Option<String>>,
}

impl MockTokenStore {
    pub fn new() -> Self {
        Self {
            token: RwLock::new(None),
        }
    }
}

#[async_trait]
impl TokenStore for MockTokenStore {
    async fn load(&self) -> PanelResult<Option<String>> {
        Ok(self.token.read().await.clone())
    }

    async fn save(&self, token: &str) -> PanelResult<()> {
        *self.token.write().await = Some(token.to_string());
        Ok(())
    }

    async fn clear(&self) -> PanelResult<()> {
        *self.token.write().await = None;
        Ok(())
    }
}

// ===== RecordingNotifier =====

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    Success(String),
    Error(String),
    Busy(bool),
}

/// Captures every notifier call for assertions
pub struct RecordingNotifier {
    pub events: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self {
            events: Mutex::new(Vec::new()),
        }
    }

    pub fn errors(&self) -> Vec<String> {
        self.events
            .lock()
            .unwrap()
            .iter()
            .filter_map(|e| match e {
                Notification::Error(msg) => Some(msg.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn successes(&self) -> Vec<String> {
        self.events
            .lock()
            .unwrap()
            .iter()
            .filter_map(|e| match e {
                Notification::Success(msg) => Some(msg.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn busy_transitions(&self) -> Vec<bool> {
        self.events
            .lock()
            .unwrap()
            .iter()
            .filter_map(|e| match e {
                Notification::Busy(b) => Some(*b),
                _ => None,
            })
            .collect()
    }
}

impl Notifier for RecordingNotifier {
    fn success(&self, message: &str) {
        self.events
            .lock()
            .unwrap()
            .push(Notification::Success(message.to_string()));
    }

    fn error(&self, message: &str) {
        self.events
            .lock()
            .unwrap()
            .push(Notification::Error(message.to_string()));
    }

    fn busy_changed(&self, busy: bool) {
        self.events
            .lock()
            .unwrap()
            .push(Notification::Busy(busy));
    }
}

// ===== Factory methods =====

pub fn test_domain(id: u64, name: &str) -> Domain {
    Domain {
        id,
        name: name.to_string(),
        status: DomainStatus::Active,
        expiration_date: NaiveDate::from_ymd_opt(2026, 12, 15).unwrap(),
        registration_date: NaiveDate::from_ymd_opt(2020, 12, 15).unwrap(),
        tld: name.rsplit('.').next().unwrap_or("com").to_string(),
        lock_enabled: false,
        auto_renewal_enabled: false,
    }
}

pub fn test_record(id: u64, name: &str, value: &str) -> DnsRecord {
    DnsRecord {
        id,
        name: name.to_string(),
        record_type: RecordType::A,
        value: value.to_string(),
        ttl: 3600,
        priority: None,
    }
}

/// Creates a controller wired to fresh mocks
pub fn create_test_controller() -> (
    crate::controller::PanelController,
    Arc<MockDomainApi>,
    Arc<RecordingNotifier>,
) {
    let api = Arc::new(MockDomainApi::new());
    let notifier = Arc::new(RecordingNotifier::new());
    let controller = crate::controller::PanelController::new(api.clone(), notifier.clone());
    (controller, api, notifier)
}
