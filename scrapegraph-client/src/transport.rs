//! HTTP transport
//!
//! One request, one response, one timing measurement. The transport is a
//! trait so the job lifecycle can be driven offline in tests, and so callers
//! can swap in a canned implementation without touching the poller.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::Method;
use serde_json::Value;
use tracing::debug;

use crate::error::{ClientError, Result};

/// Header carrying the API key on every outbound request.
pub const API_KEY_HEADER: &str = "SGAI-APIKEY";

/// A parsed JSON payload plus the wall-clock time the round trip took.
#[derive(Debug, Clone)]
pub struct TimedResponse {
    pub body: Value,
    pub elapsed_ms: u64,
}

/// One HTTP round trip against the API.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Perform a single request within the configured time budget.
    ///
    /// `url` is absolute. A JSON content type is only attached when a body
    /// is present; GET requests carry none.
    async fn send(&self, method: Method, url: &str, body: Option<&Value>)
    -> Result<TimedResponse>;
}

/// Production transport backed by reqwest.
pub struct HttpTransport {
    http: reqwest::Client,
    api_key: String,
    timeout: Duration,
}

impl HttpTransport {
    /// Create a transport that signs requests with `api_key` and aborts any
    /// single request after `timeout`.
    pub fn new(api_key: impl Into<String>, timeout: Duration) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key: api_key.into(),
            timeout,
        }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(
        &self,
        method: Method,
        url: &str,
        body: Option<&Value>,
    ) -> Result<TimedResponse> {
        debug!(%method, url, body = ?body, "sending request");

        let start = Instant::now();
        let mut request = self
            .http
            .request(method, url)
            .header(API_KEY_HEADER, &self.api_key)
            .timeout(self.timeout);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let detail = response
                .json::<Value>()
                .await
                .ok()
                .and_then(|err_body| detail_text(&err_body));
            let message = error_message(status.as_u16(), detail.as_deref());
            debug!(status = status.as_u16(), %message, "request failed");
            return Err(ClientError::Http {
                status: status.as_u16(),
                message,
            });
        }

        let body: Value = response.json().await?;
        let elapsed_ms = start.elapsed().as_millis() as u64;
        debug!(status = status.as_u16(), elapsed_ms, "received response");

        Ok(TimedResponse { body, elapsed_ms })
    }
}

/// Human-readable category for a non-2xx status, with the server's `detail`
/// text appended when the error body was parseable JSON.
fn error_message(status: u16, detail: Option<&str>) -> String {
    let category = match status {
        401 => "Invalid or missing API key".to_string(),
        402 => "Insufficient credits - purchase more at https://dashboard.scrapegraphai.com"
            .to_string(),
        422 => "Invalid parameters - check your request".to_string(),
        429 => "Rate limited - slow down and retry".to_string(),
        500 => "Server error - try again later".to_string(),
        other => format!("HTTP {other}"),
    };

    match detail {
        Some(detail) => format!("{category}: {detail}"),
        None => category,
    }
}

/// `detail` field of an error body, stringified when it is not already a
/// string.
fn detail_text(err_body: &Value) -> Option<String> {
    let detail = err_body.get("detail")?;
    if detail.is_null() {
        return None;
    }
    match detail.as_str() {
        Some(s) => Some(s.to_string()),
        None => Some(detail.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_error_message_categories() {
        assert!(error_message(401, None).contains("API key"));
        assert!(error_message(402, None).contains("Insufficient credits"));
        assert!(error_message(422, None).contains("Invalid parameters"));
        assert!(error_message(429, None).contains("Rate limited"));
        assert!(error_message(500, None).contains("Server error"));
        assert_eq!(error_message(418, None), "HTTP 418");
    }

    #[test]
    fn test_error_message_appends_detail() {
        let message = error_message(402, Some("quota exceeded"));
        assert!(message.contains("Insufficient credits"));
        assert!(message.ends_with(": quota exceeded"));
    }

    #[test]
    fn test_detail_text_extraction() {
        assert_eq!(
            detail_text(&json!({"detail": "bad input"})).as_deref(),
            Some("bad input")
        );
        // non-string details are stringified, matching the raw body
        assert_eq!(
            detail_text(&json!({"detail": {"field": "url"}})).as_deref(),
            Some(r#"{"field":"url"}"#)
        );
        assert_eq!(detail_text(&json!({"detail": null})), None);
        assert_eq!(detail_text(&json!({"message": "x"})), None);
    }
}
