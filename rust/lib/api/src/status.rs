//! Status-record endpoints: per-submission judge results.

use serde::{Deserialize, Serialize};
use serde_json::json;

use oj_client::{CallOptions, Gateway, GatewayError};
use oj_core::{ApiResponse, PageParams, PageResult};

/// Outcome of one test case inside a record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestCaseOutcome {
    #[serde(rename = "RunTime")]
    pub run_time: String,
    #[serde(rename = "RunMemory")]
    pub run_memory: String,
    #[serde(rename = "Status")]
    pub status: String,
    #[serde(rename = "StandardInput")]
    pub standard_input: String,
    #[serde(rename = "StandardOutput")]
    pub standard_output: String,
    #[serde(rename = "PersonalOutput")]
    pub personal_output: String,
}

/// Detail projection: the submitted code plus per-case outcomes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusRecord {
    #[serde(rename = "_id")]
    pub status_record_id: String,
    #[serde(rename = "Status")]
    pub status: String,
    #[serde(rename = "Language")]
    pub language: String,
    #[serde(rename = "Code")]
    pub code: String,
    #[serde(rename = "CompilerInfo", default)]
    pub compiler_info: String,
    #[serde(rename = "TestInfo", default)]
    pub test_info: Vec<TestCaseOutcome>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StatusSearch {
    #[serde(rename = "UserId", skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(rename = "ProblemId", skip_serializing_if = "Option::is_none")]
    pub problem_id: Option<String>,
    #[serde(rename = "ProblemTitle", skip_serializing_if = "Option::is_none")]
    pub problem_title: Option<String>,
    /// Numeric verdict code.
    #[serde(rename = "Status", skip_serializing_if = "Option::is_none")]
    pub status: Option<i32>,
    #[serde(rename = "Language", skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusListParams {
    #[serde(flatten)]
    pub page: PageParams,
    #[serde(rename = "SearchInfo", skip_serializing_if = "Option::is_none")]
    pub search: Option<StatusSearch>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusListItem {
    #[serde(rename = "_id")]
    pub status_record_id: String,
    #[serde(rename = "UserId")]
    pub user_id: String,
    #[serde(rename = "UserNickName")]
    pub user_nickname: String,
    #[serde(rename = "ProblemId")]
    pub problem_id: String,
    #[serde(rename = "ProblemTitle")]
    pub problem_title: String,
    #[serde(rename = "Status")]
    pub status: i32,
    #[serde(rename = "SubmitTime")]
    pub submit_time: String,
    #[serde(rename = "Language")]
    pub language: String,
    #[serde(rename = "RunTime")]
    pub run_time: String,
    #[serde(rename = "RunMemory")]
    pub run_memory: String,
    #[serde(rename = "Length")]
    pub length: String,
}

/// `GET /status/record/info`
pub async fn record(gw: &Gateway, status_record_id: &str) -> Result<ApiResponse<StatusRecord>, GatewayError> {
    gw.get("/status/record/info", &json!({ "StatusRecordId": status_record_id }), CallOptions::default()).await
}

/// `POST /status/record/list`
pub async fn list(gw: &Gateway, params: &StatusListParams) -> Result<ApiResponse<PageResult<StatusListItem>>, GatewayError> {
    gw.post("/status/record/list", params, CallOptions::default()).await
}
