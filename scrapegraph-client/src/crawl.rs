//! Crawl and sitemap endpoints
//!
//! Crawling is the one job kind that routinely runs long enough to need
//! polling; the wrapper threads an optional status observer through so
//! callers can surface progress.

use scrapegraph_core::dto::crawl::{CrawlParams, CrawlResponse, SitemapParams, SitemapResponse};
use scrapegraph_core::envelope::ApiResponse;

use crate::Client;
use crate::poll::StatusObserver;

impl Client {
    /// Crawl a site and wait for the job to finish.
    ///
    /// Submits to `/crawl` and, unless the server completes synchronously,
    /// polls `/crawl/{task_id}` until the job reaches a terminal state.
    /// `on_status` receives the raw status string after every poll.
    ///
    /// # Example
    /// ```no_run
    /// # use scrapegraph_client::Client;
    /// # use scrapegraph_core::dto::crawl::CrawlParams;
    /// # async fn example() {
    /// let client = Client::new("sgai-your-api-key");
    /// let resp = client
    ///     .crawl(
    ///         &CrawlParams {
    ///             url: "https://example.com".to_string(),
    ///             extraction_mode: Some(false),
    ///             max_pages: Some(5),
    ///             ..Default::default()
    ///         },
    ///         Some(&|status| eprintln!("crawl status: {status}")),
    ///     )
    ///     .await;
    /// # }
    /// ```
    pub async fn crawl(
        &self,
        params: &CrawlParams,
        on_status: Option<StatusObserver<'_>>,
    ) -> ApiResponse<CrawlResponse> {
        self.call_polled("/crawl", params, "task_id", on_status).await
    }

    /// Fetch the sitemap-derived URL list for a site.
    pub async fn sitemap(&self, params: &SitemapParams) -> ApiResponse<SitemapResponse> {
        self.post_json(&self.url("/sitemap"), params).await
    }
}
