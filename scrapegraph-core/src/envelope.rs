//! Uniform result envelope
//!
//! Every public client call resolves to an [`ApiResponse`] rather than a bare
//! `Result`, so callers always receive a tagged outcome with timing attached
//! and never a raised fault.

use serde::{Deserialize, Serialize};

/// Outcome tag of an [`ApiResponse`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    Success,
    Error,
}

/// Tagged outcome of an API call.
///
/// Exactly one of `data` and `error` is populated. `elapsed_ms` is the summed
/// wall-clock time of every HTTP round trip behind the call on success, and
/// zero on error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub status: ResponseStatus,
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub elapsed_ms: u64,
}

impl<T> ApiResponse<T> {
    /// Wrap a resolved payload and its elapsed time.
    pub fn success(data: T, elapsed_ms: u64) -> Self {
        Self {
            status: ResponseStatus::Success,
            data: Some(data),
            error: None,
            elapsed_ms,
        }
    }

    /// Wrap a failure message.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            status: ResponseStatus::Error,
            data: None,
            error: Some(message.into()),
            elapsed_ms: 0,
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == ResponseStatus::Success
    }

    pub fn is_error(&self) -> bool {
        self.status == ResponseStatus::Error
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_envelope() {
        let resp = ApiResponse::success(json!({"html": "<p>hi</p>"}), 42);
        assert!(resp.is_success());
        assert_eq!(resp.elapsed_ms, 42);
        assert!(resp.data.is_some());
        assert!(resp.error.is_none());
    }

    #[test]
    fn test_failure_envelope() {
        let resp: ApiResponse<serde_json::Value> = ApiResponse::failure("boom");
        assert!(resp.is_error());
        assert_eq!(resp.elapsed_ms, 0);
        assert!(resp.data.is_none());
        assert_eq!(resp.error.as_deref(), Some("boom"));
    }

    #[test]
    fn test_envelope_serialization() {
        let resp = ApiResponse::success(json!({"ok": true}), 7);
        let value = serde_json::to_value(&resp).unwrap();
        assert_eq!(value["status"], "success");
        assert_eq!(value["elapsed_ms"], 7);
        assert!(value.get("error").is_none());

        let resp: ApiResponse<serde_json::Value> = ApiResponse::failure("nope");
        let value = serde_json::to_value(&resp).unwrap();
        assert_eq!(value["status"], "error");
        assert_eq!(value["data"], serde_json::Value::Null);
        assert_eq!(value["error"], "nope");
    }
}
