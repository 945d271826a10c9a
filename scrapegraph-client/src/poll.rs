//! Job lifecycle engine
//!
//! Submits jobs, polls status endpoints until a terminal state, normalizes
//! the final payload, and funnels every outcome into the uniform envelope.
//! Endpoint wrappers stay thin by delegating here.

use reqwest::Method;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tokio::time::{Instant, sleep};
use tracing::debug;

use scrapegraph_core::envelope::ApiResponse;
use scrapegraph_core::job::{self, Completion};

use crate::Client;
use crate::error::{ClientError, Result};
use crate::transport::TimedResponse;

/// Observer invoked synchronously with the raw status string after every
/// poll, terminal iterations included. A slow observer delays the next poll
/// but does not extend the deadline.
pub type StatusObserver<'a> = &'a (dyn Fn(&str) + Send + Sync);

impl Client {
    /// GET `{path}/{id}` until the job reaches a terminal state.
    ///
    /// The whole session shares a single deadline equal to the configured
    /// timeout; elapsed time accumulates across polls. Resolves with the
    /// final raw payload on success, [`ClientError::JobFailed`] when the
    /// server reports failure, and [`ClientError::PollingTimeout`] when the
    /// deadline passes while the job is still pending.
    pub(crate) async fn poll_until_done(
        &self,
        path: &str,
        id: &str,
        on_status: Option<StatusObserver<'_>>,
    ) -> Result<TimedResponse> {
        let deadline = Instant::now() + self.config.timeout;
        let url = self.url(&format!("{path}/{id}"));
        let mut total_ms = 0u64;

        while Instant::now() < deadline {
            let polled = self.transport.send(Method::GET, &url, None).await?;
            total_ms += polled.elapsed_ms;

            let status = job::status_of(&polled.body);
            if let Some(observe) = on_status {
                observe(status);
            }
            debug!(id, status, total_ms, "polled job status");

            match Completion::of(status) {
                Completion::Succeeded => {
                    return Ok(TimedResponse {
                        body: polled.body,
                        elapsed_ms: total_ms,
                    });
                }
                Completion::Failed => {
                    let message = job::error_of(&polled.body).unwrap_or("Job failed").to_string();
                    return Err(ClientError::JobFailed(message));
                }
                Completion::Pending => sleep(self.config.poll_interval).await,
            }
        }

        Err(ClientError::PollingTimeout)
    }

    /// POST `path`, then poll with the identifier found under `id_field`.
    ///
    /// When the server executes synchronously and answers with a terminal
    /// success, no status request is ever issued. Either way the final
    /// payload is normalized exactly once and elapsed time covers the submit
    /// call plus every poll.
    pub(crate) async fn submit_and_poll(
        &self,
        path: &str,
        body: &Value,
        id_field: &str,
        on_status: Option<StatusObserver<'_>>,
    ) -> Result<TimedResponse> {
        let submitted = self
            .transport
            .send(Method::POST, &self.url(path), Some(body))
            .await?;

        if Completion::of(job::status_of(&submitted.body)) == Completion::Succeeded {
            return Ok(TimedResponse {
                body: job::normalize(submitted.body),
                elapsed_ms: submitted.elapsed_ms,
            });
        }

        let id = job::id_of(&submitted.body, id_field)
            .ok_or_else(|| ClientError::MissingJobId(id_field.to_string()))?
            .to_string();
        debug!(%id, path, "job accepted, polling for completion");

        let polled = self.poll_until_done(path, &id, on_status).await?;
        Ok(TimedResponse {
            body: job::normalize(polled.body),
            elapsed_ms: submitted.elapsed_ms + polled.elapsed_ms,
        })
    }

    /// One GET wrapped in the envelope.
    pub(crate) async fn get_json<T: DeserializeOwned>(&self, url: &str) -> ApiResponse<T> {
        to_envelope(self.transport.send(Method::GET, url, None).await)
    }

    /// One POST wrapped in the envelope.
    pub(crate) async fn post_json<T, P>(&self, url: &str, params: &P) -> ApiResponse<T>
    where
        T: DeserializeOwned,
        P: Serialize,
    {
        let body = match serde_json::to_value(params) {
            Ok(body) => body,
            Err(err) => return ApiResponse::failure(ClientError::from(err).to_string()),
        };
        to_envelope(self.transport.send(Method::POST, url, Some(&body)).await)
    }

    /// Submit-and-poll wrapped in the envelope.
    pub(crate) async fn call_polled<T, P>(
        &self,
        path: &str,
        params: &P,
        id_field: &str,
        on_status: Option<StatusObserver<'_>>,
    ) -> ApiResponse<T>
    where
        T: DeserializeOwned,
        P: Serialize,
    {
        let body = match serde_json::to_value(params) {
            Ok(body) => body,
            Err(err) => return ApiResponse::failure(ClientError::from(err).to_string()),
        };
        to_envelope(self.submit_and_poll(path, &body, id_field, on_status).await)
    }
}

/// Fold a resolved transport outcome into the envelope every public call
/// returns. Nothing escapes as a raised fault past this point.
fn to_envelope<T: DeserializeOwned>(outcome: Result<TimedResponse>) -> ApiResponse<T> {
    let typed = outcome.and_then(|timed| {
        let data = serde_json::from_value(timed.body)?;
        Ok((data, timed.elapsed_ms))
    });
    match typed {
        Ok((data, elapsed_ms)) => ApiResponse::success(data, elapsed_ms),
        Err(err) => ApiResponse::failure(err.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClientConfig;
    use crate::transport::Transport;
    use async_trait::async_trait;
    use serde_json::json;
    use std::collections::VecDeque;
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    /// Transport that replays scripted outcomes and records every request.
    struct ScriptedTransport {
        responses: Mutex<VecDeque<Result<TimedResponse>>>,
        requests: Mutex<Vec<(Method, String)>>,
    }

    impl ScriptedTransport {
        fn new(responses: Vec<Result<TimedResponse>>) -> Arc<Self> {
            Arc::new(Self {
                responses: Mutex::new(responses.into()),
                requests: Mutex::new(Vec::new()),
            })
        }

        fn requests(&self) -> Vec<(Method, String)> {
            self.requests.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Transport for ScriptedTransport {
        async fn send(
            &self,
            method: Method,
            url: &str,
            _body: Option<&Value>,
        ) -> Result<TimedResponse> {
            self.requests.lock().unwrap().push((method, url.to_string()));
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .expect("transport called more times than scripted")
        }
    }

    fn ok(body: Value, elapsed_ms: u64) -> Result<TimedResponse> {
        Ok(TimedResponse { body, elapsed_ms })
    }

    fn test_client(transport: Arc<ScriptedTransport>) -> Client {
        let config = ClientConfig {
            base_url: "http://api.test/v1".to_string(),
            timeout: Duration::from_secs(5),
            poll_interval: Duration::from_millis(1),
        };
        Client::with_transport(config, transport)
    }

    #[tokio::test]
    async fn test_synchronous_completion_skips_polling() {
        let transport = ScriptedTransport::new(vec![ok(
            json!({"task_id": "t-1", "status": "done", "result": {"items": [1]}}),
            40,
        )]);
        let client = test_client(transport.clone());

        let resp: ApiResponse<Value> = client
            .call_polled("/crawl", &json!({"url": "https://a"}), "task_id", None)
            .await;

        assert!(resp.is_success());
        assert_eq!(resp.elapsed_ms, 40);
        // exactly one request, and it was the submit
        let requests = transport.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0], (Method::POST, "http://api.test/v1/crawl".to_string()));
    }

    #[tokio::test]
    async fn test_polling_until_done_observes_each_status() {
        let transport = ScriptedTransport::new(vec![
            ok(json!({"task_id": "X", "status": "queued"}), 10),
            ok(json!({"status": "running"}), 20),
            ok(json!({"status": "running"}), 30),
            ok(json!({"status": "completed", "pages": []}), 40),
        ]);
        let client = test_client(transport.clone());

        let seen = Mutex::new(Vec::new());
        let observer = |status: &str| seen.lock().unwrap().push(status.to_string());
        let resp: ApiResponse<Value> = client
            .call_polled("/crawl", &json!({"url": "https://a"}), "task_id", Some(&observer))
            .await;

        assert!(resp.is_success());
        // submit time plus every poll
        assert_eq!(resp.elapsed_ms, 100);
        assert_eq!(
            *seen.lock().unwrap(),
            vec!["running", "running", "completed"]
        );

        let requests = transport.requests();
        assert_eq!(requests[0].0, Method::POST);
        for (method, url) in &requests[1..] {
            assert_eq!(*method, Method::GET);
            assert_eq!(url, "http://api.test/v1/crawl/X");
        }
        assert_eq!(requests.len(), 4);
    }

    #[tokio::test]
    async fn test_final_payload_is_normalized() {
        let transport = ScriptedTransport::new(vec![
            ok(json!({"task_id": "X", "status": "pending"}), 5),
            ok(
                json!({"status": "done", "result": {"status": "ok", "pages": []}}),
                5,
            ),
        ]);
        let client = test_client(transport);

        let resp: ApiResponse<Value> = client
            .call_polled("/crawl", &json!({"url": "https://a"}), "task_id", None)
            .await;

        let data = resp.data.unwrap();
        assert_eq!(data, json!({"status": "ok", "pages": []}));
    }

    #[tokio::test]
    async fn test_job_failure_uses_server_message() {
        let transport = ScriptedTransport::new(vec![
            ok(json!({"task_id": "X", "status": "pending"}), 5),
            ok(json!({"status": "failed", "error": "boom"}), 5),
        ]);
        let client = test_client(transport);

        let resp: ApiResponse<Value> = client
            .call_polled("/crawl", &json!({"url": "https://a"}), "task_id", None)
            .await;

        assert!(resp.is_error());
        assert_eq!(resp.error.as_deref(), Some("boom"));
        assert_eq!(resp.elapsed_ms, 0);
    }

    #[tokio::test]
    async fn test_job_failure_falls_back_to_generic_message() {
        let transport = ScriptedTransport::new(vec![
            ok(json!({"task_id": "X", "status": "pending"}), 5),
            ok(json!({"status": "failed"}), 5),
        ]);
        let client = test_client(transport);

        let resp: ApiResponse<Value> = client
            .call_polled("/crawl", &json!({"url": "https://a"}), "task_id", None)
            .await;

        assert_eq!(resp.error.as_deref(), Some("Job failed"));
    }

    #[tokio::test]
    async fn test_failure_is_observed_before_erroring() {
        let transport = ScriptedTransport::new(vec![
            ok(json!({"task_id": "X", "status": "pending"}), 5),
            ok(json!({"status": "failed", "error": "boom"}), 5),
        ]);
        let client = test_client(transport);

        let seen = Mutex::new(Vec::new());
        let observer = |status: &str| seen.lock().unwrap().push(status.to_string());
        let _: ApiResponse<Value> = client
            .call_polled("/crawl", &json!({"url": "https://a"}), "task_id", Some(&observer))
            .await;

        assert_eq!(*seen.lock().unwrap(), vec!["failed"]);
    }

    #[tokio::test]
    async fn test_missing_identifier() {
        let transport = ScriptedTransport::new(vec![ok(json!({"status": "pending"}), 5)]);
        let client = test_client(transport.clone());

        let resp: ApiResponse<Value> = client
            .call_polled("/crawl", &json!({"url": "https://a"}), "task_id", None)
            .await;

        assert!(resp.is_error());
        assert_eq!(resp.error.as_deref(), Some("Missing task_id in response"));
        // no poll was attempted
        assert_eq!(transport.requests().len(), 1);
    }

    #[tokio::test]
    async fn test_non_string_identifier_is_missing() {
        let transport =
            ScriptedTransport::new(vec![ok(json!({"status": "pending", "task_id": 7}), 5)]);
        let client = test_client(transport);

        let resp: ApiResponse<Value> = client
            .call_polled("/crawl", &json!({"url": "https://a"}), "task_id", None)
            .await;

        assert_eq!(resp.error.as_deref(), Some("Missing task_id in response"));
    }

    #[tokio::test]
    async fn test_polling_deadline_elapses() {
        let transport =
            ScriptedTransport::new(vec![ok(json!({"task_id": "X", "status": "pending"}), 5)]);
        let client = Client::with_transport(
            ClientConfig {
                base_url: "http://api.test/v1".to_string(),
                // deadline already spent when polling starts
                timeout: Duration::ZERO,
                poll_interval: Duration::from_millis(1),
            },
            transport,
        );

        let resp: ApiResponse<Value> = client
            .call_polled("/crawl", &json!({"url": "https://a"}), "task_id", None)
            .await;

        assert!(resp.is_error());
        assert_eq!(resp.error.as_deref(), Some("Polling timed out"));
    }

    #[tokio::test]
    async fn test_http_error_becomes_error_envelope() {
        let transport = ScriptedTransport::new(vec![Err(ClientError::Http {
            status: 402,
            message: "Insufficient credits - purchase more at \
                      https://dashboard.scrapegraphai.com: quota exceeded"
                .to_string(),
        })]);
        let client = test_client(transport);

        let resp: ApiResponse<Value> = client.get_json("http://api.test/v1/credits").await;

        assert!(resp.is_error());
        let message = resp.error.unwrap();
        assert!(message.contains("Insufficient"));
        assert!(message.contains("quota exceeded"));
        assert_eq!(resp.elapsed_ms, 0);
    }

    #[tokio::test]
    async fn test_request_timeout_becomes_error_envelope() {
        let transport = ScriptedTransport::new(vec![Err(ClientError::Timeout)]);
        let client = test_client(transport);

        let resp: ApiResponse<Value> = client.get_json("http://api.test/v1/credits").await;

        assert_eq!(resp.error.as_deref(), Some("Request timed out"));
    }

    #[tokio::test]
    async fn test_mismatched_response_shape_is_an_error_envelope() {
        let transport = ScriptedTransport::new(vec![ok(json!({"unexpected": true}), 5)]);
        let client = test_client(transport);

        let resp: ApiResponse<scrapegraph_core::dto::account::CreditsResponse> =
            client.get_json("http://api.test/v1/credits").await;

        assert!(resp.is_error());
        assert!(resp.error.unwrap().contains("Failed to parse response"));
    }
}
