//! Tag endpoints.

use serde::{Deserialize, Serialize};
use serde_json::json;

use oj_client::{CallOptions, Gateway, GatewayError};
use oj_core::ApiResponse;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TagsResult {
    #[serde(rename = "Tags")]
    pub tags: Vec<String>,
}

/// `GET /tags` — every tag usable on problems.
pub async fn problem_tags(gw: &Gateway) -> Result<ApiResponse<TagsResult>, GatewayError> {
    gw.get("/tags", &json!({ "TagType": "Problem" }), CallOptions::default()).await
}
