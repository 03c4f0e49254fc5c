//! Domain related types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Domain lifecycle status as reported by the API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DomainStatus {
    Active,
    Inactive,
}

impl DomainStatus {
    #[must_use]
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Inactive => "Inactive",
        }
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active)
    }
}

/// A managed domain
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Domain {
    pub id: u64,
    pub name: String,
    pub status: DomainStatus,
    /// Expiration date (date only, interpreted in UTC)
    pub expiration_date: NaiveDate,
    pub registration_date: NaiveDate,
    /// Top-level domain suffix, e.g. "com"
    pub tld: String,
    /// Transfer lock flag
    #[serde(default)]
    pub lock_enabled: bool,
    #[serde(default)]
    pub auto_renewal_enabled: bool,
}

impl Domain {
    /// Case-insensitive substring match against the domain name
    #[must_use]
    pub fn matches_query(&self, query: &str) -> bool {
        self.name.to_lowercase().contains(query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_wire_format_is_lowercase() {
        let json = serde_json::to_string(&DomainStatus::Active).unwrap();
        assert_eq!(json, "\"active\"");
        let parsed: DomainStatus = serde_json::from_str("\"inactive\"").unwrap();
        assert_eq!(parsed, DomainStatus::Inactive);
    }

    #[test]
    fn domain_deserializes_with_missing_flags() {
        let json = r#"{
            "id": 1,
            "name": "example.com",
            "status": "active",
            "expiration_date": "2026-12-15",
            "registration_date": "2020-12-15",
            "tld": "com"
        }"#;
        let d: Domain = serde_json::from_str(json).unwrap();
        assert!(!d.lock_enabled);
        assert!(!d.auto_renewal_enabled);
        assert_eq!(d.tld, "com");
    }

    #[test]
    fn matches_query_is_substring() {
        let d: Domain = serde_json::from_str(
            r#"{"id":1,"name":"Example.COM","status":"active",
                "expiration_date":"2026-12-15","registration_date":"2020-12-15","tld":"com"}"#,
        )
        .unwrap();
        assert!(d.matches_query("ample"));
        assert!(d.matches_query("example.com"));
        assert!(!d.matches_query("example.net"));
    }
}
