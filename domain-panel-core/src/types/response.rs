//! API response envelopes

use super::{DnsRecord, Domain};
use serde::Deserialize;

/// Envelope for `GET /domains`
#[derive(Debug, Clone, Deserialize)]
pub struct DomainListResponse {
    #[serde(default)]
    pub domains: Vec<Domain>,
}

/// Envelope for `GET /domains/{domain}/dns-records`
#[derive(Debug, Clone, Deserialize)]
pub struct RecordListResponse {
    #[serde(default)]
    pub records: Vec<DnsRecord>,
}

/// Generic message body used by mutation endpoints and error responses
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiMessage {
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_envelope_yields_empty_list() {
        let resp: DomainListResponse = serde_json::from_str("{}").unwrap();
        assert!(resp.domains.is_empty());

        let resp: RecordListResponse = serde_json::from_str("{}").unwrap();
        assert!(resp.records.is_empty());
    }
}
