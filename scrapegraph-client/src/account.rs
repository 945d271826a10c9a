//! Account and utility endpoints

use scrapegraph_core::dto::account::{
    CreditsResponse, HealthResponse, HistoryParams, HistoryResponse,
};
use scrapegraph_core::envelope::ApiResponse;

use crate::Client;

impl Client {
    /// Remaining and consumed credit counts for this API key.
    pub async fn get_credits(&self) -> ApiResponse<CreditsResponse> {
        self.get_json(&self.url("/credits")).await
    }

    /// Service liveness. Queried against the unversioned root, not the API
    /// base, with the same credential header.
    pub async fn check_health(&self) -> ApiResponse<HealthResponse> {
        let url = format!("{}/healthz", self.config().health_url());
        self.get_json(&url).await
    }

    /// Past requests for one service, paginated.
    pub async fn get_history(&self, params: &HistoryParams) -> ApiResponse<HistoryResponse> {
        let page = params.page.unwrap_or(1);
        let page_size = params.page_size.unwrap_or(10);
        let url = self.url(&format!(
            "/history/{}?page={}&page_size={}",
            params.service, page, page_size
        ));
        self.get_json(&url).await
    }
}
