//! Unified error type definition

use thiserror::Error;

/// Panel layer error type
#[derive(Error, Debug, Clone)]
pub enum PanelError {
    /// Selected domain id is absent from the loaded list
    #[error("Domain not found: {0}")]
    DomainNotFound(String),

    /// Record not found
    #[error("Record not found: {0}")]
    RecordNotFound(String),

    /// A domain-scoped call was made before any domain was selected
    #[error("No domain selected")]
    NoDomainSelected,

    /// Network-level failure (connection refused, DNS failure, etc.)
    #[error("Network error: {0}")]
    NetworkError(String),

    /// The HTTP request timed out
    #[error("Request timeout: {0}")]
    Timeout(String),

    /// Non-2xx API response, carrying the server message when present
    #[error("API error ({status}): {message}")]
    ApiError { status: u16, message: String },

    /// Failed to parse an API response
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Failed to serialize a request body
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Validation error
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Authentication failure (login/register rejected, token missing)
    #[error("{0}")]
    AuthError(String),

    /// Storage layer error (token file, config)
    #[error("Storage error: {0}")]
    StorageError(String),
}

impl PanelError {
    /// Whether this is expected behavior (user input, resource does not
    /// exist, etc.), used for log level selection.
    ///
    /// Use `warn` when this returns `true` and `error` otherwise.
    /// **Update this method when adding variants.**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            Self::DomainNotFound(_)
                | Self::RecordNotFound(_)
                | Self::NoDomainSelected
                | Self::ValidationError(_)
                | Self::AuthError(_)
        )
    }
}

/// Panel layer Result type alias
pub type PanelResult<T> = std::result::Result<T, PanelError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_domain_not_found() {
        let e = PanelError::DomainNotFound("42".to_string());
        assert_eq!(e.to_string(), "Domain not found: 42");
    }

    #[test]
    fn display_api_error() {
        let e = PanelError::ApiError {
            status: 422,
            message: "invalid ttl".to_string(),
        };
        assert_eq!(e.to_string(), "API error (422): invalid ttl");
    }

    #[test]
    fn expected_variants() {
        assert!(PanelError::DomainNotFound("x".into()).is_expected());
        assert!(PanelError::RecordNotFound("1".into()).is_expected());
        assert!(PanelError::NoDomainSelected.is_expected());
        assert!(PanelError::AuthError("bad password".into()).is_expected());
        assert!(!PanelError::NetworkError("refused".into()).is_expected());
        assert!(!PanelError::ParseError("bad json".into()).is_expected());
    }
}
