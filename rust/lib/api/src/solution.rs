//! Solution (editorial) endpoints.

use serde::{Deserialize, Serialize};
use serde_json::json;

use oj_client::{CallOptions, Gateway, GatewayError};
use oj_core::{ApiResponse, OperationResult, PageParams, PageResult};

use crate::user::SimpleUserInfo;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsertSolutionParams {
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Content")]
    pub content: String,
    /// The problem this solution belongs to.
    #[serde(rename = "ParentId")]
    pub parent_id: String,
    #[serde(rename = "Public")]
    pub public: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsertSolutionResult {
    #[serde(rename = "SolutionId")]
    pub solution_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolutionInfo {
    #[serde(rename = "_id")]
    pub solution_id: String,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Content")]
    pub content: String,
    #[serde(rename = "Views")]
    pub views: u64,
    #[serde(rename = "Comments")]
    pub comments: u64,
    #[serde(rename = "CreateTime")]
    pub create_time: String,
    #[serde(rename = "UpdateTime")]
    pub update_time: String,
    #[serde(rename = "User")]
    pub user: SimpleUserInfo,
}

/// Projection served to the author's edit form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolutionEditInfo {
    #[serde(rename = "_id")]
    pub solution_id: String,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Content")]
    pub content: String,
    #[serde(rename = "ParentId")]
    pub parent_id: String,
    #[serde(rename = "Public")]
    pub public: bool,
    #[serde(rename = "UserId")]
    pub user_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateSolutionParams {
    #[serde(rename = "SolutionId")]
    pub solution_id: String,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Content")]
    pub content: String,
    #[serde(rename = "Public")]
    pub public: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SolutionSearch {
    #[serde(rename = "Title", skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(rename = "ParentId", skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    #[serde(rename = "UserId", skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(rename = "Public", skip_serializing_if = "Option::is_none")]
    pub public: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolutionListParams {
    #[serde(flatten)]
    pub page: PageParams,
    #[serde(rename = "SearchInfo", skip_serializing_if = "Option::is_none")]
    pub search: Option<SolutionSearch>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolutionListItem {
    #[serde(rename = "_id")]
    pub solution_id: String,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Views")]
    pub views: u64,
    #[serde(rename = "Comments")]
    pub comments: u64,
    #[serde(rename = "CreateTime")]
    pub create_time: String,
    #[serde(rename = "User")]
    pub user: SimpleUserInfo,
    /// Only present in the admin projection.
    #[serde(rename = "Public", default)]
    pub public: Option<bool>,
}

/// `POST /solution/insert`
pub async fn insert(gw: &Gateway, params: &InsertSolutionParams) -> Result<ApiResponse<InsertSolutionResult>, GatewayError> {
    gw.post("/solution/insert", params, CallOptions::success("solution added")).await
}

/// `GET /solution/info`
pub async fn info(gw: &Gateway, solution_id: &str) -> Result<ApiResponse<SolutionInfo>, GatewayError> {
    gw.get("/solution/info", &json!({ "SolutionId": solution_id }), CallOptions::default()).await
}

/// `GET /solution/select/info`
pub async fn edit_info(gw: &Gateway, solution_id: &str) -> Result<ApiResponse<SolutionEditInfo>, GatewayError> {
    gw.get("/solution/select/info", &json!({ "SolutionId": solution_id }), CallOptions::default()).await
}

/// `POST /solution/update`
pub async fn update(gw: &Gateway, params: &UpdateSolutionParams) -> Result<ApiResponse<OperationResult>, GatewayError> {
    gw.post("/solution/update", params, CallOptions::success("solution updated")).await
}

/// `DELETE /solution/delete`
pub async fn delete(gw: &Gateway, solution_id: &str) -> Result<ApiResponse<OperationResult>, GatewayError> {
    gw.delete("/solution/delete", &json!({ "SolutionId": solution_id }), CallOptions::success("solution deleted")).await
}

/// `POST /solution/list`
pub async fn list(gw: &Gateway, params: &SolutionListParams) -> Result<ApiResponse<PageResult<SolutionListItem>>, GatewayError> {
    gw.post("/solution/list", params, CallOptions::default()).await
}

/// `POST /admin/solution/list` — admin only.
pub async fn admin_list(gw: &Gateway, params: &SolutionListParams) -> Result<ApiResponse<PageResult<SolutionListItem>>, GatewayError> {
    gw.post("/admin/solution/list", params, CallOptions::default()).await
}
