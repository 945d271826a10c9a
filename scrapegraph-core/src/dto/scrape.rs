//! Scraping endpoint DTOs

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Parameters for the `/smartscraper` endpoint.
///
/// Exactly one of `website_url`, `website_html`, or `website_markdown`
/// should be set; the server rejects ambiguous requests with a 422.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SmartScraperParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website_html: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website_markdown: Option<String>,
    pub user_prompt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_schema: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_of_scrolls: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_pages: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stealth: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cookies: Option<HashMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headers: Option<HashMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plain_text: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webhook_url: Option<String>,
    /// Ask the server for a canned response instead of a live scrape.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mock: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub steps: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wait_ms: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
}

/// Response from the `/smartscraper` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SmartScraperResponse {
    pub request_id: String,
    pub status: String,
    #[serde(default)]
    pub website_url: Option<String>,
    #[serde(default)]
    pub user_prompt: Option<String>,
    pub result: Option<Value>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Search result recency window for `/searchscraper`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeRange {
    #[serde(rename = "past_hour")]
    PastHour,
    #[serde(rename = "past_24_hours")]
    Past24Hours,
    #[serde(rename = "past_week")]
    PastWeek,
    #[serde(rename = "past_month")]
    PastMonth,
    #[serde(rename = "past_year")]
    PastYear,
}

/// Parameters for the `/searchscraper` endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchScraperParams {
    pub user_prompt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_results: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extraction_mode: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_schema: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stealth: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headers: Option<HashMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webhook_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mock: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_range: Option<TimeRange>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_geo_code: Option<String>,
}

/// Response from the `/searchscraper` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchScraperResponse {
    pub request_id: String,
    pub status: String,
    #[serde(default)]
    pub user_prompt: Option<String>,
    #[serde(default)]
    pub num_results: Option<u32>,
    pub result: Option<Value>,
    #[serde(default)]
    pub markdown_content: Option<String>,
    #[serde(default)]
    pub reference_urls: Vec<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Parameters for the `/markdownify` endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MarkdownifyParams {
    pub website_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stealth: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headers: Option<HashMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webhook_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mock: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wait_ms: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
}

/// Response from the `/markdownify` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarkdownifyResponse {
    pub request_id: String,
    pub status: String,
    #[serde(default)]
    pub website_url: Option<String>,
    pub result: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Parameters for the `/scrape` endpoint (raw HTML fetch).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScrapeParams {
    pub website_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stealth: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branding: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wait_ms: Option<u64>,
}

/// Response from the `/scrape` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrapeResponse {
    pub scrape_request_id: String,
    pub status: String,
    pub html: String,
    #[serde(default)]
    pub branding: Option<Value>,
    #[serde(default)]
    pub metadata: Option<Value>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Parameters for the `/agentic-scrapper` endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AgenticScraperParams {
    pub url: String,
    pub steps: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_prompt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_schema: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ai_extraction: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_session: Option<bool>,
}

/// Response from the `/agentic-scrapper` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgenticScraperResponse {
    pub request_id: String,
    pub status: String,
    pub result: Option<Value>,
    #[serde(default)]
    pub error: Option<String>,
}
