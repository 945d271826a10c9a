//! Scraping endpoints
//!
//! All of these execute synchronously on the server: one POST, one typed
//! response, wrapped in the envelope.

use scrapegraph_core::dto::scrape::{
    AgenticScraperParams, AgenticScraperResponse, MarkdownifyParams, MarkdownifyResponse,
    ScrapeParams, ScrapeResponse, SearchScraperParams, SearchScraperResponse, SmartScraperParams,
    SmartScraperResponse,
};
use scrapegraph_core::envelope::ApiResponse;

use crate::Client;

impl Client {
    /// Extract structured data from a page with an LLM prompt.
    ///
    /// # Example
    /// ```no_run
    /// # use scrapegraph_client::Client;
    /// # use scrapegraph_core::dto::scrape::SmartScraperParams;
    /// # async fn example() {
    /// let client = Client::new("sgai-your-api-key");
    /// let resp = client
    ///     .smart_scraper(&SmartScraperParams {
    ///         website_url: Some("https://example.com".to_string()),
    ///         user_prompt: "Extract all product names".to_string(),
    ///         ..Default::default()
    ///     })
    ///     .await;
    /// # }
    /// ```
    pub async fn smart_scraper(
        &self,
        params: &SmartScraperParams,
    ) -> ApiResponse<SmartScraperResponse> {
        self.post_json(&self.url("/smartscraper"), params).await
    }

    /// Run a web search and extract from the results.
    pub async fn search_scraper(
        &self,
        params: &SearchScraperParams,
    ) -> ApiResponse<SearchScraperResponse> {
        self.post_json(&self.url("/searchscraper"), params).await
    }

    /// Convert a page to clean markdown.
    pub async fn markdownify(&self, params: &MarkdownifyParams) -> ApiResponse<MarkdownifyResponse> {
        self.post_json(&self.url("/markdownify"), params).await
    }

    /// Fetch the raw HTML of a page.
    pub async fn scrape(&self, params: &ScrapeParams) -> ApiResponse<ScrapeResponse> {
        self.post_json(&self.url("/scrape"), params).await
    }

    /// Drive a browser session through the given steps, optionally with AI
    /// extraction at the end.
    pub async fn agentic_scraper(
        &self,
        params: &AgenticScraperParams,
    ) -> ApiResponse<AgenticScraperResponse> {
        // sic: the API spells the path with a double "p"
        self.post_json(&self.url("/agentic-scrapper"), params).await
    }
}
