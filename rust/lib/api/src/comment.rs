//! Comment endpoints.
//!
//! Comments hang off announcements, discussions or solutions; a reply
//! hangs off another comment. Father comments carry a truncated child
//! list plus the child total.

use serde::{Deserialize, Serialize};
use serde_json::json;

use oj_client::{CallOptions, Gateway, GatewayError};
use oj_core::{ApiResponse, OperationResult, PageParams, PageResult};

use crate::user::SimpleUserInfo;

/// What a comment is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParentType {
    Announcement,
    Discuss,
    Solution,
    Comment,
}

/// Top-level comment or reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CommentType {
    Father,
    Reply,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsertCommentParams {
    #[serde(rename = "ParentId")]
    pub parent_id: String,
    #[serde(rename = "ParentType")]
    pub parent_type: ParentType,
    #[serde(rename = "CommentType")]
    pub comment_type: CommentType,
    #[serde(rename = "Content")]
    pub content: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsertCommentResult {
    #[serde(rename = "CommentId")]
    pub comment_id: String,
    #[serde(rename = "CreateTime")]
    pub create_time: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentListParams {
    #[serde(flatten)]
    pub page: PageParams,
    #[serde(rename = "ParentId")]
    pub parent_id: String,
    #[serde(rename = "CommentType")]
    pub comment_type: CommentType,
    /// Child preview size; only meaningful when listing father comments.
    #[serde(rename = "SonNum", skip_serializing_if = "Option::is_none")]
    pub son_num: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChildComment {
    #[serde(rename = "_id")]
    pub comment_id: String,
    #[serde(rename = "User")]
    pub user: SimpleUserInfo,
    #[serde(rename = "Content")]
    pub content: String,
    #[serde(rename = "Likes", default)]
    pub likes: u64,
    #[serde(rename = "CreateTime")]
    pub create_time: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentListItem {
    #[serde(rename = "_id")]
    pub comment_id: String,
    #[serde(rename = "User")]
    pub user: SimpleUserInfo,
    #[serde(rename = "ParentId")]
    pub parent_id: String,
    #[serde(rename = "Content")]
    pub content: String,
    #[serde(rename = "Likes")]
    pub likes: u64,
    #[serde(rename = "CreateTime")]
    pub create_time: String,
    /// Only returned when listing father comments.
    #[serde(rename = "Child_Comments", default, skip_serializing_if = "Option::is_none")]
    pub child_comments: Option<Vec<ChildComment>>,
    #[serde(rename = "Child_Total", default, skip_serializing_if = "Option::is_none")]
    pub child_total: Option<u64>,
}

/// `POST /comment/insert`
pub async fn insert(gw: &Gateway, params: &InsertCommentParams) -> Result<ApiResponse<InsertCommentResult>, GatewayError> {
    gw.post("/comment/insert", params, CallOptions::success("comment added")).await
}

/// `GET /comment/info`
pub async fn list(gw: &Gateway, params: &CommentListParams) -> Result<ApiResponse<PageResult<CommentListItem>>, GatewayError> {
    gw.get("/comment/info", params, CallOptions::default()).await
}

/// `GET /admin/comment/list` — admin only.
pub async fn admin_list(gw: &Gateway, page: &PageParams) -> Result<ApiResponse<PageResult<CommentListItem>>, GatewayError> {
    gw.get("/admin/comment/list", page, CallOptions::default()).await
}

/// `DELETE /comment/delete`
pub async fn delete(gw: &Gateway, comment_id: &str) -> Result<ApiResponse<OperationResult>, GatewayError> {
    gw.delete("/comment/delete", &json!({ "CommentId": comment_id }), CallOptions::success("comment deleted")).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enums_use_wire_strings() {
        assert_eq!(serde_json::to_string(&ParentType::Discuss).unwrap(), r#""Discuss""#);
        assert_eq!(serde_json::to_string(&CommentType::Father).unwrap(), r#""Father""#);
    }

    #[test]
    fn father_comment_carries_children() {
        let item: CommentListItem = serde_json::from_value(json!({
            "_id": "7001",
            "User": { "_id": "1", "NickName": "alice", "Avatar": "" },
            "ParentId": "5001",
            "Content": "nice problem",
            "Likes": 2,
            "CreateTime": "2024-03-01 10:00:00",
            "Child_Comments": [{
                "_id": "7002",
                "User": { "_id": "2", "NickName": "bob", "Avatar": "" },
                "Content": "agreed",
                "Likes": 0,
                "CreateTime": "2024-03-01 10:05:00"
            }],
            "Child_Total": 1
        }))
        .unwrap();
        assert_eq!(item.child_total, Some(1));
        assert_eq!(item.child_comments.unwrap()[0].user.nickname, "bob");
    }

    #[test]
    fn reply_listing_omits_children() {
        let item: CommentListItem = serde_json::from_value(json!({
            "_id": "7002",
            "User": { "_id": "2", "NickName": "bob", "Avatar": "" },
            "ParentId": "7001",
            "Content": "agreed",
            "Likes": 0,
            "CreateTime": "2024-03-01 10:05:00"
        }))
        .unwrap();
        assert!(item.child_comments.is_none());
        assert!(item.child_total.is_none());
    }
}
