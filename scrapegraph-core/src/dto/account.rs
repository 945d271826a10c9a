//! Account and utility endpoint DTOs

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Response from the `/credits` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreditsResponse {
    pub remaining_credits: u64,
    pub total_credits_used: u64,
}

/// Response from the `/healthz` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

/// Services whose request history can be listed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HistoryService {
    #[serde(rename = "markdownify")]
    Markdownify,
    #[serde(rename = "smartscraper")]
    SmartScraper,
    #[serde(rename = "searchscraper")]
    SearchScraper,
    #[serde(rename = "scrape")]
    Scrape,
    #[serde(rename = "crawl")]
    Crawl,
    #[serde(rename = "agentic-scraper")]
    AgenticScraper,
    #[serde(rename = "sitemap")]
    Sitemap,
}

impl HistoryService {
    /// Path segment used by the history endpoint.
    pub fn as_str(&self) -> &'static str {
        match self {
            HistoryService::Markdownify => "markdownify",
            HistoryService::SmartScraper => "smartscraper",
            HistoryService::SearchScraper => "searchscraper",
            HistoryService::Scrape => "scrape",
            HistoryService::Crawl => "crawl",
            HistoryService::AgenticScraper => "agentic-scraper",
            HistoryService::Sitemap => "sitemap",
        }
    }
}

impl fmt::Display for HistoryService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Parameters for the `/history/{service}` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryParams {
    pub service: HistoryService,
    /// 1-based page number, defaults to 1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    /// Entries per page, defaults to 10.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
}

impl HistoryParams {
    pub fn new(service: HistoryService) -> Self {
        Self {
            service,
            page: None,
            page_size: None,
        }
    }
}

/// One past request in a [`HistoryResponse`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub request_id: String,
    pub status: String,
    /// Endpoint-specific fields the server attaches per request kind.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

/// Response from the `/history/{service}` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryResponse {
    pub requests: Vec<HistoryEntry>,
    pub total_count: u64,
    pub page: u32,
    pub page_size: u32,
}
