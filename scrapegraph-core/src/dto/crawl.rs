//! Crawl and sitemap endpoint DTOs

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Parameters for the `/crawl` endpoint.
///
/// With `extraction_mode` unset or true the server runs LLM extraction and
/// `prompt` is required; with `extraction_mode: false` it returns markdown
/// only and `prompt`/`schema` must be absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CrawlParams {
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extraction_mode: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_pages: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub depth: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rules: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sitemap: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stealth: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webhook_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cache_website: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breadth: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub same_domain_only: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub batch_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wait_ms: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headers: Option<HashMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_of_scrolls: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website_html: Option<String>,
}

/// One crawled page in a [`CrawlResponse`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrawlPage {
    pub url: String,
    pub markdown: String,
}

/// Terminal payload of a crawl job, after normalization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrawlResponse {
    #[serde(default)]
    pub task_id: Option<String>,
    pub status: String,
    #[serde(default)]
    pub result: Option<Value>,
    #[serde(default)]
    pub llm_result: Option<Value>,
    #[serde(default)]
    pub crawled_urls: Option<Vec<String>>,
    #[serde(default)]
    pub pages: Option<Vec<CrawlPage>>,
    #[serde(default)]
    pub credits_used: Option<u64>,
    #[serde(default)]
    pub pages_processed: Option<u64>,
    #[serde(default)]
    pub elapsed_time: Option<f64>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Parameters for the `/sitemap` endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SitemapParams {
    pub website_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headers: Option<HashMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mock: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stealth: Option<bool>,
}

/// Response from the `/sitemap` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SitemapResponse {
    pub request_id: String,
    pub urls: Vec<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub website_url: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_crawl_response_from_normalized_payload() {
        let payload = json!({
            "status": "done",
            "pages": [{"url": "https://a", "markdown": "# a"}],
            "crawled_urls": ["https://a"],
            "pages_processed": 1
        });
        let resp: CrawlResponse = serde_json::from_value(payload).unwrap();
        assert_eq!(resp.status, "done");
        assert_eq!(resp.pages.unwrap().len(), 1);
        assert!(resp.task_id.is_none());
    }

    #[test]
    fn test_markdown_mode_params_serialize_without_prompt() {
        let params = CrawlParams {
            url: "https://example.com".to_string(),
            extraction_mode: Some(false),
            max_pages: Some(5),
            ..Default::default()
        };
        let value = serde_json::to_value(&params).unwrap();
        assert_eq!(value["extraction_mode"], false);
        assert!(value.get("prompt").is_none());
        assert!(value.get("schema").is_none());
    }
}
