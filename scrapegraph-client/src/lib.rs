//! ScrapeGraphAI HTTP Client
//!
//! An async client for the ScrapeGraphAI extraction API. Submits scraping
//! jobs, transparently polls long-running ones until they finish, and hands
//! every caller the same tagged success/error envelope.
//!
//! # Example
//!
//! ```no_run
//! use scrapegraph_client::Client;
//! use scrapegraph_core::dto::scrape::SmartScraperParams;
//!
//! #[tokio::main]
//! async fn main() {
//!     let client = Client::new("sgai-your-api-key");
//!
//!     let response = client
//!         .smart_scraper(&SmartScraperParams {
//!             website_url: Some("https://example.com".to_string()),
//!             user_prompt: "Extract the page title".to_string(),
//!             ..Default::default()
//!         })
//!         .await;
//!
//!     match response.data {
//!         Some(data) => println!("{:?} ({} ms)", data.result, response.elapsed_ms),
//!         None => eprintln!("error: {}", response.error.unwrap_or_default()),
//!     }
//! }
//! ```

pub mod config;
pub mod error;
pub mod transport;

mod account;
mod crawl;
mod poll;
mod schema;
mod scrape;

// Re-export commonly used types
pub use config::ClientConfig;
pub use error::{ClientError, Result};
pub use poll::StatusObserver;
pub use scrapegraph_core::envelope::ApiResponse;
pub use transport::{API_KEY_HEADER, HttpTransport, TimedResponse, Transport};

use std::sync::Arc;

/// Client for the ScrapeGraphAI API
///
/// Endpoint wrappers are organized into logical groups:
/// - Scraping (smartscraper, searchscraper, markdownify, scrape, agentic)
/// - Crawling (crawl with status polling, sitemap)
/// - Schema generation
/// - Account utilities (credits, health, history)
///
/// Every wrapper resolves to an [`ApiResponse`] envelope; errors are folded
/// in rather than raised.
#[derive(Clone)]
pub struct Client {
    config: ClientConfig,
    transport: Arc<dyn Transport>,
}

impl Client {
    /// Create a client with the default configuration.
    ///
    /// # Example
    /// ```
    /// use scrapegraph_client::Client;
    ///
    /// let client = Client::new("sgai-your-api-key");
    /// ```
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_config(api_key, ClientConfig::default())
    }

    /// Create a client with a custom configuration.
    ///
    /// # Example
    /// ```
    /// use scrapegraph_client::{Client, ClientConfig};
    /// use std::time::Duration;
    ///
    /// let config = ClientConfig {
    ///     base_url: "http://localhost:8000/v1".to_string(),
    ///     timeout: Duration::from_secs(30),
    ///     ..ClientConfig::default()
    /// };
    /// let client = Client::with_config("sgai-your-api-key", config);
    /// ```
    pub fn with_config(api_key: impl Into<String>, config: ClientConfig) -> Self {
        let transport = Arc::new(HttpTransport::new(api_key, config.timeout));
        Self::with_transport(config, transport)
    }

    /// Create a client over a caller-supplied transport.
    ///
    /// This is the substitution point for offline and deterministic use: the
    /// job lifecycle (submit, poll, normalize, envelope) runs unchanged over
    /// whatever the transport answers.
    pub fn with_transport(config: ClientConfig, transport: Arc<dyn Transport>) -> Self {
        Self { config, transport }
    }

    /// The active configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Absolute URL for an API path under the versioned base.
    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_base_and_path() {
        let client = Client::new("key");
        assert_eq!(
            client.url("/smartscraper"),
            "https://api.scrapegraphai.com/v1/smartscraper"
        );
    }

    #[test]
    fn test_url_tolerates_trailing_slash() {
        let config = ClientConfig {
            base_url: "http://localhost:8000/v1/".to_string(),
            ..ClientConfig::default()
        };
        let client = Client::with_config("key", config);
        assert_eq!(client.url("/credits"), "http://localhost:8000/v1/credits");
    }
}
