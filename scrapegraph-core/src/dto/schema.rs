//! Schema generation endpoint DTOs

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Parameters for the `/generate_schema` endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerateSchemaParams {
    pub user_prompt: String,
    /// When set, the server refines this schema instead of inventing one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub existing_schema: Option<Value>,
}

/// Response from the `/generate_schema` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateSchemaResponse {
    pub request_id: String,
    pub status: String,
    #[serde(default)]
    pub user_prompt: Option<String>,
    #[serde(default)]
    pub refined_prompt: Option<String>,
    #[serde(default)]
    pub generated_schema: Option<Value>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}
