//! Schema generation endpoint

use scrapegraph_core::dto::schema::{GenerateSchemaParams, GenerateSchemaResponse};
use scrapegraph_core::envelope::ApiResponse;

use crate::Client;

impl Client {
    /// Generate (or refine) a JSON output schema from a natural-language
    /// prompt.
    pub async fn generate_schema(
        &self,
        params: &GenerateSchemaParams,
    ) -> ApiResponse<GenerateSchemaResponse> {
        self.post_json(&self.url("/generate_schema"), params).await
    }
}
