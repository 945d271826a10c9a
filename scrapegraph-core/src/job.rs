//! Job lifecycle types
//!
//! Status classification and result normalization shared between the client's
//! submit path and its polling loop.

use serde_json::Value;

/// Statuses the API reports for a job that finished successfully.
const SUCCESS_STATUSES: [&str; 3] = ["completed", "done", "success"];

/// Statuses the API reports for a job that will never finish.
const FAILURE_STATUSES: [&str; 1] = ["failed"];

/// Fields that mark a `result` sub-object as a job payload of its own.
const RESULT_MARKERS: [&str; 3] = ["status", "pages", "crawled_urls"];

/// Terminal-state classification of a job status token.
///
/// The status vocabulary is open on the server side; the literal sets above
/// mirror observed API behavior and live only in this module so new tokens
/// can be added in one place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    Succeeded,
    Failed,
    Pending,
}

impl Completion {
    /// Classify a raw status string.
    ///
    /// Anything outside the success and failure sets, including the empty
    /// string, is still pending.
    pub fn of(status: &str) -> Self {
        if SUCCESS_STATUSES.contains(&status) {
            Completion::Succeeded
        } else if FAILURE_STATUSES.contains(&status) {
            Completion::Failed
        } else {
            Completion::Pending
        }
    }

    /// Whether this status will not change on subsequent polls.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Completion::Pending)
    }
}

/// Read the `status` field of a raw job payload.
///
/// Absent or non-string statuses come back as the empty string, which
/// classifies as pending.
pub fn status_of(payload: &Value) -> &str {
    payload.get("status").and_then(Value::as_str).unwrap_or("")
}

/// Server-supplied error message from a raw job payload, if any.
pub fn error_of(payload: &Value) -> Option<&str> {
    payload.get("error").and_then(Value::as_str)
}

/// String identifier stored under `field` in a raw job payload, if any.
pub fn id_of<'a>(payload: &'a Value, field: &str) -> Option<&'a str> {
    payload.get(field).and_then(Value::as_str)
}

/// Hoist a nested `result` sub-object to the top level when it looks
/// job-shaped.
///
/// Different job kinds return their terminal data either flat or wrapped one
/// level deeper under `result`; hoisting presents one consistent shape to
/// callers regardless of which. A sub-object counts as job-shaped when it
/// carries a non-null `status`, `pages`, or `crawled_urls` field, with its
/// `status` coerced to the sub-object's own status when present, else the
/// outer payload's.
///
/// The heuristic is a pattern-match on observed response shapes, not a
/// documented server contract. It is intentionally shallow: applied at most
/// once per job and never recursive, so deeper nesting or new marker fields
/// pass through unchanged.
pub fn normalize(payload: Value) -> Value {
    let Some(inner) = payload.get("result") else {
        return payload;
    };
    if !inner.is_object() {
        return payload;
    }
    if !RESULT_MARKERS
        .iter()
        .any(|m| inner.get(*m).is_some_and(|v| !v.is_null()))
    {
        return payload;
    }

    let status = inner
        .get("status")
        .and_then(Value::as_str)
        .unwrap_or_else(|| status_of(&payload))
        .to_string();

    let mut hoisted = inner.clone();
    if let Some(obj) = hoisted.as_object_mut() {
        obj.insert("status".to_string(), Value::String(status));
    }
    hoisted
}
