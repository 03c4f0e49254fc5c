//! DNS record types

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Default TTL applied when the form field is empty or unparsable
pub const DEFAULT_TTL: u32 = 3600;

/// Supported DNS record types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecordType {
    A,
    AAAA,
    CNAME,
    MX,
    TXT,
    NS,
    SRV,
}

impl RecordType {
    /// All supported types, in the order they cycle in the editor
    pub const ALL: [Self; 7] = [
        Self::A,
        Self::AAAA,
        Self::CNAME,
        Self::MX,
        Self::TXT,
        Self::NS,
        Self::SRV,
    ];

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::A => "A",
            Self::AAAA => "AAAA",
            Self::CNAME => "CNAME",
            Self::MX => "MX",
            Self::TXT => "TXT",
            Self::NS => "NS",
            Self::SRV => "SRV",
        }
    }

    /// Short hint shown next to the value field in the record editor
    #[must_use]
    pub fn help_text(&self) -> &'static str {
        match self {
            Self::A => "IPv4 address, e.g. 192.0.2.1",
            Self::AAAA => "IPv6 address, e.g. 2001:db8::1",
            Self::CNAME => "Canonical hostname",
            Self::MX => "Mail server hostname (priority required)",
            Self::TXT => "Free-form text",
            Self::NS => "Authoritative nameserver hostname",
            Self::SRV => "Service target",
        }
    }

    /// Only MX records carry a priority on the wire
    #[must_use]
    pub fn requires_priority(&self) -> bool {
        matches!(self, Self::MX)
    }

    /// Next type in the cycle order, wrapping at the end
    #[must_use]
    pub fn next(&self) -> Self {
        let idx = Self::ALL
            .iter()
            .position(|t| t == self)
            .unwrap_or_default();
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecordType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "A" => Ok(Self::A),
            "AAAA" => Ok(Self::AAAA),
            "CNAME" => Ok(Self::CNAME),
            "MX" => Ok(Self::MX),
            "TXT" => Ok(Self::TXT),
            "NS" => Ok(Self::NS),
            "SRV" => Ok(Self::SRV),
            _ => Err(format!("Unknown record type: {s}")),
        }
    }
}

fn default_ttl() -> u32 {
    DEFAULT_TTL
}

/// A DNS record as returned by the API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DnsRecord {
    pub id: u64,
    /// Record name relative to the zone; empty means the apex
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type")]
    pub record_type: RecordType,
    pub value: String,
    #[serde(default = "default_ttl")]
    pub ttl: u32,
    /// Only present for MX records
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<u16>,
}

impl DnsRecord {
    /// Name shown in the UI; the zone apex renders as "@"
    #[must_use]
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            "@"
        } else {
            &self.name
        }
    }
}

/// Request body for creating or updating a DNS record
#[derive(Debug, Clone, Serialize)]
pub struct RecordPayload {
    pub name: String,
    #[serde(rename = "type")]
    pub record_type: RecordType,
    pub value: String,
    pub ttl: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<u16>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_type_round_trip() {
        for t in RecordType::ALL {
            assert_eq!(t.as_str().parse::<RecordType>().unwrap(), t);
        }
        assert!("PTR".parse::<RecordType>().is_err());
        assert_eq!("cname".parse::<RecordType>().unwrap(), RecordType::CNAME);
    }

    #[test]
    fn next_cycles_and_wraps() {
        assert_eq!(RecordType::A.next(), RecordType::AAAA);
        assert_eq!(RecordType::SRV.next(), RecordType::A);
    }

    #[test]
    fn record_defaults_apply() {
        let json = r#"{"id": 3, "type": "A", "value": "192.0.2.1"}"#;
        let r: DnsRecord = serde_json::from_str(json).unwrap();
        assert_eq!(r.name, "");
        assert_eq!(r.display_name(), "@");
        assert_eq!(r.ttl, DEFAULT_TTL);
        assert_eq!(r.priority, None);
    }

    #[test]
    fn payload_omits_priority_when_absent() {
        let payload = RecordPayload {
            name: "www".to_string(),
            record_type: RecordType::A,
            value: "192.0.2.1".to_string(),
            ttl: 300,
            priority: None,
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert!(json.get("priority").is_none());
        assert_eq!(json["type"], "A");
    }

    #[test]
    fn payload_includes_priority_for_mx() {
        let payload = RecordPayload {
            name: String::new(),
            record_type: RecordType::MX,
            value: "mail.example.com".to_string(),
            ttl: DEFAULT_TTL,
            priority: Some(10),
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["priority"], 10);
    }
}
