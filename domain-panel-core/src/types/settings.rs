//! Nameserver and renewal settings types

use serde::{Deserialize, Serialize};

/// Auto-renewal lead time used when the form value is empty or unparsable
pub const DEFAULT_AUTO_RENEWAL_DAYS: u32 = 60;

/// A single nameserver entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Nameserver {
    pub name: String,
    /// Glue address, only sent when provided
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip: Option<String>,
}

/// Request body for replacing a domain's nameserver set
#[derive(Debug, Clone, Serialize)]
pub struct NameserverUpdateRequest {
    pub nameservers: Vec<Nameserver>,
}

/// Domain renewal settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenewalSettings {
    pub auto_renewal_enabled: bool,
    pub auto_renewal_days: u32,
}

impl RenewalSettings {
    /// Builds settings from raw form input, falling back to the default
    /// lead time when the days field is empty or not a number.
    #[must_use]
    pub fn from_form(enabled: bool, days_raw: &str) -> Self {
        Self {
            auto_renewal_enabled: enabled,
            auto_renewal_days: days_raw
                .trim()
                .parse()
                .unwrap_or(DEFAULT_AUTO_RENEWAL_DAYS),
        }
    }
}

/// Request body for the transfer-lock toggle
#[derive(Debug, Clone, Serialize)]
pub struct LockUpdateRequest {
    pub lock_enabled: bool,
}

/// Request body for the auto-renewal toggle
#[derive(Debug, Clone, Serialize)]
pub struct AutoRenewalUpdateRequest {
    pub auto_renewal_enabled: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nameserver_omits_missing_ip() {
        let ns = Nameserver {
            name: "ns1.example.com".to_string(),
            ip: None,
        };
        let json = serde_json::to_value(&ns).unwrap();
        assert!(json.get("ip").is_none());
    }

    #[test]
    fn settings_fall_back_to_default_days() {
        assert_eq!(
            RenewalSettings::from_form(true, "").auto_renewal_days,
            DEFAULT_AUTO_RENEWAL_DAYS
        );
        assert_eq!(
            RenewalSettings::from_form(true, "abc").auto_renewal_days,
            DEFAULT_AUTO_RENEWAL_DAYS
        );
        assert_eq!(RenewalSettings::from_form(false, " 30 ").auto_renewal_days, 30);
    }
}
