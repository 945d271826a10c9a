//! Configuration module
//!
//! Handles CLI configuration including the API key and client settings.

use scrapegraph_client::{Client, ClientConfig};

/// CLI configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// API key attached to every request
    pub api_key: String,

    /// Settings for the underlying client
    pub client: ClientConfig,
}

impl Config {
    /// Build an API client from this configuration.
    pub fn connect(&self) -> Client {
        Client::with_config(self.api_key.clone(), self.client.clone())
    }
}
