//! Shared HTTP request handling
//!
//! One place for sending requests, logging, status classification and
//! JSON parsing, so the endpoint methods stay declarative.

use domain_panel_core::types::ApiMessage;
use domain_panel_core::{PanelError, PanelResult};
use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;

/// Sends the request and returns `(status, body)`.
///
/// Transport failures are classified as timeout vs. network; status
/// handling is left to the caller.
pub async fn execute_request(
    request: RequestBuilder,
    method: &str,
    url: &str,
) -> PanelResult<(u16, String)> {
    log::debug!("{method} {url}");

    let response = request.send().await.map_err(|e| {
        if e.is_timeout() {
            PanelError::Timeout(e.to_string())
        } else {
            PanelError::NetworkError(e.to_string())
        }
    })?;

    let status = response.status().as_u16();
    log::debug!("Response Status: {status}");

    let body = response
        .text()
        .await
        .map_err(|e| PanelError::NetworkError(format!("Failed to read response body: {e}")))?;

    Ok((status, body))
}

/// Sends the request and fails on any non-2xx status, extracting the
/// server's `message` field for the error when the body carries one.
pub async fn execute_checked(
    request: RequestBuilder,
    method: &str,
    url: &str,
) -> PanelResult<String> {
    let (status, body) = execute_request(request, method, url).await?;
    if (200..300).contains(&status) {
        Ok(body)
    } else {
        Err(api_error(status, &body))
    }
}

/// Maps a non-2xx response to `ApiError`, preferring the body's message
pub fn api_error(status: u16, body: &str) -> PanelError {
    let message = serde_json::from_str::<ApiMessage>(body)
        .ok()
        .and_then(|m| m.message)
        .unwrap_or_else(|| format!("Request failed with status {status}"));
    PanelError::ApiError { status, message }
}

/// Parses a JSON response body, logging the raw text on failure
pub fn parse_json<T: DeserializeOwned>(body: &str) -> PanelResult<T> {
    serde_json::from_str(body).map_err(|e| {
        log::error!("JSON parse failed: {e}");
        log::error!("Raw response: {body}");
        PanelError::ParseError(e.to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_uses_server_message() {
        let err = api_error(404, r#"{"message": "Domain not found"}"#);
        match err {
            PanelError::ApiError { status, message } => {
                assert_eq!(status, 404);
                assert_eq!(message, "Domain not found");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn api_error_falls_back_on_bad_body() {
        let err = api_error(500, "<html>oops</html>");
        match err {
            PanelError::ApiError { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message, "Request failed with status 500");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn parse_json_reports_parse_error() {
        let result: PanelResult<ApiMessage> = parse_json("not json");
        assert!(matches!(result, Err(PanelError::ParseError(_))));
    }
}
