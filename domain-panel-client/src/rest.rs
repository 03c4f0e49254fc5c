//! `DomainApi` implementation over the panel REST contract
//!
//! Keeps the active-domain context set by `set_active_domain`; every
//! domain-scoped endpoint is built under `{base}/domains/{domain}/`.

use std::time::Duration;

use async_trait::async_trait;
use domain_panel_core::traits::DomainApi;
use domain_panel_core::types::{
    AutoRenewalUpdateRequest, DnsRecord, Domain, DomainListResponse, LockUpdateRequest, Nameserver,
    NameserverUpdateRequest, RecordListResponse, RecordPayload, RenewalSettings,
};
use domain_panel_core::{PanelError, PanelResult};
use reqwest::RequestBuilder;
use tokio::sync::RwLock;

use crate::config::ClientConfig;
use crate::http;

pub struct RestDomainApi {
    client: reqwest::Client,
    base: String,
    token: RwLock<Option<String>>,
    active_domain: RwLock<Option<String>>,
}

impl RestDomainApi {
    pub fn new(config: &ClientConfig) -> PanelResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| PanelError::NetworkError(e.to_string()))?;

        Ok(Self {
            client,
            base: config.base().to_string(),
            token: RwLock::new(config.token.clone()),
            active_domain: RwLock::new(None),
        })
    }

    /// Swaps the bearer token, e.g. after a fresh login
    pub async fn set_token(&self, token: Option<String>) {
        *self.token.write().await = token;
    }

    fn domains_url(&self) -> String {
        format!("{}/domains", self.base)
    }

    async fn scoped_url(&self, suffix: &str) -> PanelResult<String> {
        let guard = self.active_domain.read().await;
        let domain = guard.as_deref().ok_or(PanelError::NoDomainSelected)?;
        Ok(format!("{}/domains/{domain}/{suffix}", self.base))
    }

    async fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match self.token.read().await.as_deref() {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }
}

#[async_trait]
impl DomainApi for RestDomainApi {
    async fn list_domains(&self) -> PanelResult<Vec<Domain>> {
        let url = self.domains_url();
        let request = self.authorize(self.client.get(&url)).await;
        let body = http::execute_checked(request, "GET", &url).await?;
        let response: DomainListResponse = http::parse_json(&body)?;
        Ok(response.domains)
    }

    async fn set_active_domain(&self, name: &str) -> PanelResult<()> {
        *self.active_domain.write().await = Some(name.to_string());
        Ok(())
    }

    async fn list_records(&self) -> PanelResult<Vec<DnsRecord>> {
        let url = self.scoped_url("dns-records").await?;
        let request = self.authorize(self.client.get(&url)).await;
        let body = http::execute_checked(request, "GET", &url).await?;
        let response: RecordListResponse = http::parse_json(&body)?;
        Ok(response.records)
    }

    async fn get_record(&self, id: u64) -> PanelResult<DnsRecord> {
        let url = self.scoped_url(&format!("dns-records/{id}")).await?;
        let request = self.authorize(self.client.get(&url)).await;
        let body = http::execute_checked(request, "GET", &url).await?;
        http::parse_json(&body)
    }

    async fn create_record(&self, payload: &RecordPayload) -> PanelResult<()> {
        let url = self.scoped_url("dns-records").await?;
        let request = self.authorize(self.client.post(&url)).await.json(payload);
        http::execute_checked(request, "POST", &url).await?;
        Ok(())
    }

    async fn update_record(&self, id: u64, payload: &RecordPayload) -> PanelResult<()> {
        let url = self.scoped_url(&format!("dns-records/{id}")).await?;
        let request = self.authorize(self.client.put(&url)).await.json(payload);
        http::execute_checked(request, "PUT", &url).await?;
        Ok(())
    }

    async fn delete_record(&self, id: u64) -> PanelResult<()> {
        let url = self.scoped_url(&format!("dns-records/{id}")).await?;
        let request = self.authorize(self.client.delete(&url)).await;
        http::execute_checked(request, "DELETE", &url).await?;
        Ok(())
    }

    async fn update_nameservers(&self, nameservers: &[Nameserver]) -> PanelResult<()> {
        let url = self.scoped_url("nameservers").await?;
        let body = NameserverUpdateRequest {
            nameservers: nameservers.to_vec(),
        };
        let request = self.authorize(self.client.put(&url)).await.json(&body);
        http::execute_checked(request, "PUT", &url).await?;
        Ok(())
    }

    async fn update_settings(&self, settings: &RenewalSettings) -> PanelResult<()> {
        let url = self.scoped_url("settings").await?;
        let request = self.authorize(self.client.put(&url)).await.json(settings);
        http::execute_checked(request, "PUT", &url).await?;
        Ok(())
    }

    async fn set_domain_lock(&self, enabled: bool) -> PanelResult<()> {
        let url = self.scoped_url("lock").await?;
        let body = LockUpdateRequest {
            lock_enabled: enabled,
        };
        let request = self.authorize(self.client.put(&url)).await.json(&body);
        http::execute_checked(request, "PUT", &url).await?;
        Ok(())
    }

    async fn set_auto_renewal(&self, enabled: bool) -> PanelResult<()> {
        let url = self.scoped_url("auto-renewal").await?;
        let body = AutoRenewalUpdateRequest {
            auto_renewal_enabled: enabled,
        };
        let request = self.authorize(self.client.put(&url)).await.json(&body);
        http::execute_checked(request, "PUT", &url).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_api() -> RestDomainApi {
        RestDomainApi::new(&ClientConfig::default()).unwrap()
    }

    #[tokio::test]
    async fn domains_url_uses_configured_base() {
        let api = RestDomainApi::new(&ClientConfig {
            base_url: "https://panel.example.com/api/".to_string(),
            ..ClientConfig::default()
        })
        .unwrap();
        assert_eq!(api.domains_url(), "https://panel.example.com/api/domains");
    }

    #[tokio::test]
    async fn scoped_url_requires_active_domain() {
        let api = test_api();
        let err = api.scoped_url("dns-records").await.unwrap_err();
        assert!(matches!(err, PanelError::NoDomainSelected));
    }

    #[tokio::test]
    async fn scoped_url_embeds_active_domain() {
        let api = test_api();
        api.set_active_domain("example.com").await.unwrap();
        assert_eq!(
            api.scoped_url("dns-records/7").await.unwrap(),
            "http://localhost:5000/api/domains/example.com/dns-records/7"
        );
        assert_eq!(
            api.scoped_url("auto-renewal").await.unwrap(),
            "http://localhost:5000/api/domains/example.com/auto-renewal"
        );
    }

    #[tokio::test]
    async fn switching_active_domain_rescopes_urls() {
        let api = test_api();
        api.set_active_domain("example.com").await.unwrap();
        api.set_active_domain("other.org").await.unwrap();
        assert_eq!(
            api.scoped_url("lock").await.unwrap(),
            "http://localhost:5000/api/domains/other.org/lock"
        );
    }
}
