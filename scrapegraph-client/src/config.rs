//! Client configuration
//!
//! All timeouts are injected through this struct rather than read from
//! ambient globals, so tests can substitute values without touching process
//! state.

use std::time::Duration;

/// Default API base, versioned.
pub const DEFAULT_BASE_URL: &str = "https://api.scrapegraphai.com/v1";

/// Client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Versioned API base URL (e.g. "https://api.scrapegraphai.com/v1")
    pub base_url: String,

    /// Wall-clock budget for a single request, and for a whole polling
    /// session. One job submission therefore spends at most two budgets:
    /// one on the submit call, one shared across all status polls.
    pub timeout: Duration,

    /// Fixed delay between status polls.
    pub poll_interval: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(120),
            poll_interval: Duration::from_secs(3),
        }
    }
}

impl ClientConfig {
    /// Creates configuration from environment variables
    ///
    /// Recognized environment variables:
    /// - SGAI_API_URL (optional, overrides the API base URL)
    /// - SGAI_TIMEOUT_S (optional, seconds, default: 120)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(url) = std::env::var("SGAI_API_URL") {
            if !url.is_empty() {
                config.base_url = url;
            }
        }

        if let Some(secs) = std::env::var("SGAI_TIMEOUT_S")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
        {
            config.timeout = Duration::from_secs(secs);
        }

        config
    }

    /// Validates the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.base_url.is_empty() {
            return Err("base_url cannot be empty".to_string());
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err("base_url must start with http:// or https://".to_string());
        }

        if self.timeout.is_zero() {
            return Err("timeout must be greater than 0".to_string());
        }

        Ok(())
    }

    /// Root URL for the health endpoint.
    ///
    /// The health check lives outside the versioned API, so a trailing
    /// `/v{N}` segment is stripped from the base URL.
    pub fn health_url(&self) -> String {
        let base = self.base_url.trim_end_matches('/');
        if let Some(idx) = base.rfind("/v") {
            let version = &base[idx + 2..];
            if !version.is_empty() && version.chars().all(|c| c.is_ascii_digit()) {
                return base[..idx].to_string();
            }
        }
        base.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout, Duration::from_secs(120));
        assert_eq!(config.poll_interval, Duration::from_secs(3));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation() {
        let mut config = ClientConfig::default();
        assert!(config.validate().is_ok());

        config.base_url = "not-a-url".to_string();
        assert!(config.validate().is_err());

        config.base_url = "http://localhost:8000/v1".to_string();
        config.timeout = Duration::ZERO;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_health_url_strips_version_suffix() {
        let mut config = ClientConfig::default();
        assert_eq!(config.health_url(), "https://api.scrapegraphai.com");

        config.base_url = "http://localhost:8000/v2/".to_string();
        assert_eq!(config.health_url(), "http://localhost:8000");

        // no version suffix to strip
        config.base_url = "http://localhost:8000/api".to_string();
        assert_eq!(config.health_url(), "http://localhost:8000/api");

        // "/vX" only counts when X is numeric
        config.base_url = "http://localhost:8000/verify".to_string();
        assert_eq!(config.health_url(), "http://localhost:8000/verify");
    }
}
