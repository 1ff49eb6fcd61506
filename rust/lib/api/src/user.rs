//! User endpoints: registration, login, profile, rank, moderation.

use serde::{Deserialize, Serialize};
use serde_json::json;

use oj_client::{CallOptions, Gateway, GatewayError, Session};
use oj_core::{ApiResponse, OperationResult, PageParams, PageResult};

/// Login payload; also the shape re-authentication returns.
pub type LoginProfile = Session;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterParams {
    #[serde(rename = "NickName")]
    pub nickname: String,
    #[serde(rename = "Account")]
    pub account: String,
    #[serde(rename = "PassWord")]
    pub password: String,
    #[serde(rename = "PersonalProfile", skip_serializing_if = "Option::is_none")]
    pub personal_profile: Option<String>,
    #[serde(rename = "School")]
    pub school: String,
    #[serde(rename = "Major")]
    pub major: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterResult {
    #[serde(rename = "UserId")]
    pub user_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginParams {
    #[serde(rename = "Account")]
    pub account: String,
    #[serde(rename = "PassWord")]
    pub password: String,
}

/// Public profile projection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserInfo {
    #[serde(rename = "_id")]
    pub user_id: String,
    #[serde(rename = "Avatar")]
    pub avatar: String,
    #[serde(rename = "NickName")]
    pub nickname: String,
    #[serde(rename = "PersonalProfile", default)]
    pub personal_profile: Option<String>,
    #[serde(rename = "School")]
    pub school: String,
    #[serde(rename = "Major")]
    pub major: String,
    #[serde(rename = "JoinTime")]
    pub join_time: String,
    #[serde(rename = "Solves", default)]
    pub solves: Vec<String>,
    #[serde(rename = "ACNum")]
    pub ac_num: u64,
    #[serde(rename = "SubmitNum")]
    pub submit_num: u64,
}

/// Profile projection used by the settings page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditableUserInfo {
    #[serde(rename = "_id")]
    pub user_id: String,
    #[serde(rename = "Avatar")]
    pub avatar: String,
    #[serde(rename = "NickName")]
    pub nickname: String,
    #[serde(rename = "PersonalProfile", default)]
    pub personal_profile: Option<String>,
    #[serde(rename = "School")]
    pub school: String,
    #[serde(rename = "Major")]
    pub major: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateUserParams {
    #[serde(rename = "UserId")]
    pub user_id: String,
    #[serde(rename = "Avatar", skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(rename = "NickName", skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
    #[serde(rename = "PersonalProfile", skip_serializing_if = "Option::is_none")]
    pub personal_profile: Option<String>,
    #[serde(rename = "School")]
    pub school: String,
    #[serde(rename = "Major")]
    pub major: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankItem {
    #[serde(rename = "_id")]
    pub user_id: String,
    #[serde(rename = "Rank")]
    pub rank: u64,
    #[serde(rename = "Avatar")]
    pub avatar: String,
    #[serde(rename = "NickName")]
    pub nickname: String,
    #[serde(rename = "PersonalProfile", default)]
    pub personal_profile: String,
    #[serde(rename = "SubmitNum")]
    pub submit_num: u64,
    #[serde(rename = "ACNum")]
    pub ac_num: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ManageSearch {
    #[serde(rename = "NickName", skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
    #[serde(rename = "School", skip_serializing_if = "Option::is_none")]
    pub school: Option<String>,
    #[serde(rename = "Major", skip_serializing_if = "Option::is_none")]
    pub major: Option<String>,
    #[serde(rename = "Account", skip_serializing_if = "Option::is_none")]
    pub account: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManageListParams {
    #[serde(flatten)]
    pub page: PageParams,
    #[serde(rename = "SearchInfo", skip_serializing_if = "Option::is_none")]
    pub search: Option<ManageSearch>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManageItem {
    #[serde(rename = "_id")]
    pub user_id: String,
    #[serde(rename = "NickName")]
    pub nickname: String,
    #[serde(rename = "PersonalProfile", default)]
    pub personal_profile: String,
    #[serde(rename = "School")]
    pub school: String,
    #[serde(rename = "Major")]
    pub major: String,
    #[serde(rename = "JoinTime")]
    pub join_time: String,
}

/// Embedded author reference on discussions, solutions and comments.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimpleUserInfo {
    #[serde(rename = "_id")]
    pub user_id: String,
    #[serde(rename = "NickName")]
    pub nickname: String,
    #[serde(rename = "Avatar")]
    pub avatar: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangePasswordParams {
    #[serde(rename = "OldPassword")]
    pub old_password: String,
    #[serde(rename = "NewPassword")]
    pub new_password: String,
}

/// `POST /user/register`
pub async fn register(gw: &Gateway, params: &RegisterParams) -> Result<ApiResponse<RegisterResult>, GatewayError> {
    gw.post("/user/register", params, CallOptions::success("registered")).await
}

/// `POST /user/login`
pub async fn login(gw: &Gateway, params: &LoginParams) -> Result<ApiResponse<LoginProfile>, GatewayError> {
    gw.post("/user/login", params, CallOptions::success("logged in")).await
}

/// `GET /user/info`
pub async fn info(gw: &Gateway, user_id: &str) -> Result<ApiResponse<UserInfo>, GatewayError> {
    gw.get("/user/info", &json!({ "UserId": user_id }), CallOptions::default()).await
}

/// `GET /user/select/info` — profile as shown on the settings page.
pub async fn editable_info(gw: &Gateway, user_id: &str) -> Result<ApiResponse<EditableUserInfo>, GatewayError> {
    gw.get("/user/select/info", &json!({ "UserId": user_id }), CallOptions::default()).await
}

/// `POST /user/update`
pub async fn update(gw: &Gateway, params: &UpdateUserParams) -> Result<ApiResponse<OperationResult>, GatewayError> {
    gw.post("/user/update", params, CallOptions::success("profile updated")).await
}

/// `DELETE /admin/user/delete` — admin only.
pub async fn delete(gw: &Gateway, user_id: &str) -> Result<ApiResponse<OperationResult>, GatewayError> {
    gw.delete("/admin/user/delete", &json!({ "UserId": user_id }), CallOptions::success("user deleted")).await
}

/// `GET /user/rank`
pub async fn rank(gw: &Gateway, page: &PageParams) -> Result<ApiResponse<PageResult<RankItem>>, GatewayError> {
    gw.get("/user/rank", page, CallOptions::default()).await
}

/// `POST /admin/user/list` — admin only.
pub async fn manage_list(gw: &Gateway, params: &ManageListParams) -> Result<ApiResponse<PageResult<ManageItem>>, GatewayError> {
    gw.post("/admin/user/list", params, CallOptions::default()).await
}

/// `GET /user/auth` — re-authenticate with the persisted token.
pub async fn reauth(gw: &Gateway) -> Result<ApiResponse<LoginProfile>, GatewayError> {
    gw.get("/user/auth", &json!({}), CallOptions::default()).await
}

/// `PUT /user/password`
pub async fn change_password(gw: &Gateway, params: &ChangePasswordParams) -> Result<ApiResponse<OperationResult>, GatewayError> {
    gw.put("/user/password", params, CallOptions::success("password changed")).await
}

/// `POST /user/logout`
pub async fn logout(gw: &Gateway) -> Result<ApiResponse<OperationResult>, GatewayError> {
    gw.post("/user/logout", &serde_json::Value::Null, CallOptions::success("logged out")).await
}
