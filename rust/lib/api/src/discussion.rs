//! Discussion endpoints.
//!
//! A discussion's `ParentId` is `"0"` for the global board or a
//! problem id for per-problem threads.

use serde::{Deserialize, Serialize};
use serde_json::json;

use oj_client::{CallOptions, Gateway, GatewayError};
use oj_core::{ApiResponse, OperationResult, PageParams, PageResult};

use crate::user::SimpleUserInfo;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsertDiscussParams {
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Content")]
    pub content: String,
    #[serde(rename = "ParentId")]
    pub parent_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsertDiscussResult {
    #[serde(rename = "DiscussId")]
    pub discuss_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscussInfo {
    #[serde(rename = "_id")]
    pub discuss_id: String,
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
pub struct DiscussEditInfo {
    #[serde(rename = "_id")]
    pub discuss_id: String,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Content")]
    pub content: String,
    #[serde(rename = "UserId")]
    pub user_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateDiscussParams {
    #[serde(rename = "DiscussId")]
    pub discuss_id: String,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Content")]
    pub content: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DiscussSearch {
    #[serde(rename = "Title", skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(rename = "ParentId", skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    #[serde(rename = "UserId", skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscussListParams {
    #[serde(flatten)]
    pub page: PageParams,
    #[serde(rename = "SearchInfo", skip_serializing_if = "Option::is_none")]
    pub search: Option<DiscussSearch>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscussListItem {
    #[serde(rename = "_id")]
    pub discuss_id: String,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "ParentId")]
    pub parent_id: String,
    #[serde(rename = "Views")]
    pub views: u64,
    #[serde(rename = "Comments")]
    pub comments: u64,
    #[serde(rename = "CreateTime")]
    pub create_time: String,
    #[serde(rename = "User")]
    pub user: SimpleUserInfo,
}

/// `POST /discussion/insert`
pub async fn insert(gw: &Gateway, params: &InsertDiscussParams) -> Result<ApiResponse<InsertDiscussResult>, GatewayError> {
    gw.post("/discussion/insert", params, CallOptions::success("discussion added")).await
}

/// `GET /discussion/info`
pub async fn info(gw: &Gateway, discuss_id: &str) -> Result<ApiResponse<DiscussInfo>, GatewayError> {
    gw.get("/discussion/info", &json!({ "DiscussId": discuss_id }), CallOptions::default()).await
}

/// `GET /discussion/select/info`
pub async fn edit_info(gw: &Gateway, discuss_id: &str) -> Result<ApiResponse<DiscussEditInfo>, GatewayError> {
    gw.get("/discussion/select/info", &json!({ "DiscussId": discuss_id }), CallOptions::default()).await
}

/// `POST /discussion/update`
pub async fn update(gw: &Gateway, params: &UpdateDiscussParams) -> Result<ApiResponse<OperationResult>, GatewayError> {
    gw.post("/discussion/update", params, CallOptions::success("discussion updated")).await
}

/// `DELETE /discussion/delete`
pub async fn delete(gw: &Gateway, discuss_id: &str) -> Result<ApiResponse<OperationResult>, GatewayError> {
    gw.delete("/discussion/delete", &json!({ "DiscussId": discuss_id }), CallOptions::success("discussion deleted")).await
}

/// `POST /discussion/list`
pub async fn list(gw: &Gateway, params: &DiscussListParams) -> Result<ApiResponse<PageResult<DiscussListItem>>, GatewayError> {
    gw.post("/discussion/list", params, CallOptions::default()).await
}

/// `POST /admin/discussion/list` — admin only.
pub async fn admin_list(gw: &Gateway, params: &DiscussListParams) -> Result<ApiResponse<PageResult<DiscussListItem>>, GatewayError> {
    gw.post("/admin/discussion/list", params, CallOptions::default()).await
}
