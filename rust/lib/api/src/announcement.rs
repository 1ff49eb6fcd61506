//! Announcement endpoints.

use serde::{Deserialize, Serialize};
use serde_json::json;

use oj_client::{CallOptions, Gateway, GatewayError};
use oj_core::{ApiResponse, OperationResult, PageParams, PageResult};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsertAnnouncementParams {
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Content")]
    pub content: String,
    /// Display priority.
    #[serde(rename = "Level")]
    pub level: u32,
    #[serde(rename = "Active")]
    pub active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsertAnnouncementResult {
    #[serde(rename = "AnnouncementId")]
    pub announcement_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnnouncementInfo {
    #[serde(rename = "_id")]
    pub announcement_id: String,
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
}

/// Projection served to the admin edit form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnnouncementEditInfo {
    #[serde(rename = "_id")]
    pub announcement_id: String,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Content")]
    pub content: String,
    #[serde(rename = "Level")]
    pub level: u32,
    #[serde(rename = "Active")]
    pub active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateAnnouncementParams {
    #[serde(rename = "AnnouncementId")]
    pub announcement_id: String,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Content")]
    pub content: String,
    #[serde(rename = "Level")]
    pub level: u32,
    #[serde(rename = "Active")]
    pub active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnnouncementListItem {
    #[serde(rename = "_id")]
    pub announcement_id: String,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Views")]
    pub views: u64,
    #[serde(rename = "Comments")]
    pub comments: u64,
    #[serde(rename = "Level")]
    pub level: u32,
    #[serde(rename = "CreateTime")]
    pub create_time: String,
    /// Only present in the admin projection.
    #[serde(rename = "Active", default)]
    pub active: Option<bool>,
}

/// `POST /admin/announcement/insert` — admin only.
pub async fn insert(gw: &Gateway, params: &InsertAnnouncementParams) -> Result<ApiResponse<InsertAnnouncementResult>, GatewayError> {
    gw.post("/admin/announcement/insert", params, CallOptions::success("announcement added")).await
}

/// `GET /announcement/info`
pub async fn info(gw: &Gateway, announcement_id: &str) -> Result<ApiResponse<AnnouncementInfo>, GatewayError> {
    gw.get("/announcement/info", &json!({ "AnnouncementId": announcement_id }), CallOptions::default()).await
}

/// `GET /admin/announcement/info` — admin only.
pub async fn edit_info(gw: &Gateway, announcement_id: &str) -> Result<ApiResponse<AnnouncementEditInfo>, GatewayError> {
    gw.get("/admin/announcement/info", &json!({ "AnnouncementId": announcement_id }), CallOptions::default()).await
}

/// `POST /admin/announcement/update` — admin only.
pub async fn update(gw: &Gateway, params: &UpdateAnnouncementParams) -> Result<ApiResponse<OperationResult>, GatewayError> {
    gw.post("/admin/announcement/update", params, CallOptions::success("announcement updated")).await
}

/// `DELETE /admin/announcement/delete` — admin only.
pub async fn delete(gw: &Gateway, announcement_id: &str) -> Result<ApiResponse<OperationResult>, GatewayError> {
    gw.delete("/admin/announcement/delete", &json!({ "AnnouncementId": announcement_id }), CallOptions::success("announcement deleted")).await
}

/// `GET /announcement/list`
pub async fn list(gw: &Gateway, page: &PageParams) -> Result<ApiResponse<PageResult<AnnouncementListItem>>, GatewayError> {
    gw.get("/announcement/list", page, CallOptions::default()).await
}

/// `GET /admin/announcement/list` — admin only, includes inactive ones.
pub async fn admin_list(gw: &Gateway, page: &PageParams) -> Result<ApiResponse<PageResult<AnnouncementListItem>>, GatewayError> {
    gw.get("/admin/announcement/list", page, CallOptions::default()).await
}
