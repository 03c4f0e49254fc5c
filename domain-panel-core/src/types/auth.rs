//! Authentication request and response types

use serde::{Deserialize, Serialize};

/// Login request body
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Registration request body
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

/// Token envelope returned by the auth endpoints.
///
/// Backends disagree on the field name, so all known spellings are
/// accepted and [`AuthResponse::token`] picks the first present one.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub jwt: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl AuthResponse {
    /// Bearer token, preferring `token`, then `accessToken`, then `jwt`
    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.token
            .as_deref()
            .or(self.access_token.as_deref())
            .or(self.jwt.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requests_serialize_camel_case() {
        let req = RegisterRequest {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            password: "secret".to_string(),
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["email"], "ada@example.com");
        assert_eq!(json["firstName"], "Ada");
        assert_eq!(json["lastName"], "Lovelace");
        assert!(json.get("first_name").is_none());
    }

    #[test]
    fn token_prefers_token_field() {
        let resp: AuthResponse = serde_json::from_str(
            r#"{"token": "t1", "accessToken": "t2", "jwt": "t3"}"#,
        )
        .unwrap();
        assert_eq!(resp.token(), Some("t1"));
    }

    #[test]
    fn token_falls_back_to_access_token_then_jwt() {
        let resp: AuthResponse =
            serde_json::from_str(r#"{"accessToken": "t2", "jwt": "t3"}"#).unwrap();
        assert_eq!(resp.token(), Some("t2"));

        let resp: AuthResponse = serde_json::from_str(r#"{"jwt": "t3"}"#).unwrap();
        assert_eq!(resp.token(), Some("t3"));

        let resp: AuthResponse = serde_json::from_str(r#"{"message": "ok"}"#).unwrap();
        assert_eq!(resp.token(), None);
    }
}
