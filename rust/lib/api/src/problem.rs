//! Problem endpoints: public browsing plus admin editing.

use serde::{Deserialize, Serialize};
use serde_json::json;

use oj_client::{CallOptions, Gateway, GatewayError};
use oj_core::{ApiResponse, OperationResult, PageParams, PageResult};

/// Public detail projection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProblemInfo {
    #[serde(rename = "_id")]
    pub problem_id: String,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Description")]
    pub description: String,
    /// Milliseconds.
    #[serde(rename = "TimeLimit")]
    pub time_limit: u64,
    /// Megabytes.
    #[serde(rename = "MemoryLimit")]
    pub memory_limit: u64,
    #[serde(rename = "JudgeNum")]
    pub judge_num: u32,
    #[serde(rename = "SubmitNum")]
    pub submit_num: u64,
    #[serde(rename = "ACNum")]
    pub ac_num: u64,
    #[serde(rename = "UserNickName")]
    pub user_nickname: String,
    #[serde(rename = "Tags", default)]
    pub tags: Vec<String>,
}

/// One test case, visible to admins only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestCase {
    #[serde(rename = "Input")]
    pub input: String,
    #[serde(rename = "Output")]
    pub output: String,
}

/// Admin detail projection: adds test data and special-judge fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminProblemInfo {
    #[serde(rename = "_id")]
    pub problem_id: String,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "UserNickName")]
    pub user_nickname: String,
    #[serde(rename = "TimeLimit")]
    pub time_limit: u64,
    #[serde(rename = "MemoryLimit")]
    pub memory_limit: u64,
    #[serde(rename = "JudgeNum")]
    pub judge_num: u32,
    #[serde(rename = "Tags", default)]
    pub tags: Vec<String>,
    #[serde(rename = "IsSPJ", default)]
    pub is_spj: bool,
    /// Special-judge source, present when `is_spj`.
    #[serde(rename = "SPJ", skip_serializing_if = "Option::is_none")]
    pub spj: Option<String>,
    #[serde(rename = "TestInfo", default)]
    pub test_info: Vec<TestCase>,
}

/// Whether an edit creates or replaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EditType {
    Insert,
    Update,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProblemData {
    #[serde(rename = "ProblemId")]
    pub problem_id: String,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "TimeLimit")]
    pub time_limit: u64,
    #[serde(rename = "MemoryLimit")]
    pub memory_limit: u64,
    #[serde(rename = "JudgeNum")]
    pub judge_num: u32,
    #[serde(rename = "Tags", default)]
    pub tags: Vec<String>,
    #[serde(rename = "IsSPJ")]
    pub is_spj: bool,
    #[serde(rename = "SPJ", skip_serializing_if = "Option::is_none")]
    pub spj: Option<String>,
    #[serde(rename = "TestInfo", default)]
    pub test_info: Vec<TestCase>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditProblemParams {
    #[serde(rename = "EditType")]
    pub edit_type: EditType,
    #[serde(rename = "ProblemData")]
    pub problem_data: ProblemData,
}

/// Insert returns the new id; update returns a result flag.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditProblemResult {
    #[serde(rename = "ProblemId", default)]
    pub problem_id: Option<String>,
    #[serde(rename = "Result", default)]
    pub result: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProblemSearch {
    #[serde(rename = "Id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "Title", skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(rename = "Tags", skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProblemListParams {
    #[serde(flatten)]
    pub page: PageParams,
    #[serde(rename = "SearchInfo", skip_serializing_if = "Option::is_none")]
    pub search: Option<ProblemSearch>,
}

/// List projection with per-verdict counters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProblemListItem {
    #[serde(rename = "_id")]
    pub problem_id: String,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "SubmitNum")]
    pub submit_num: u64,
    #[serde(rename = "ACNum")]
    pub ac_num: u64,
    #[serde(rename = "CENum")]
    pub ce_num: u64,
    #[serde(rename = "WANum")]
    pub wa_num: u64,
    #[serde(rename = "RENum")]
    pub re_num: u64,
    #[serde(rename = "TLENum")]
    pub tle_num: u64,
    #[serde(rename = "MLENum")]
    pub mle_num: u64,
    #[serde(rename = "SENum")]
    pub se_num: u64,
    #[serde(rename = "Tags", default)]
    pub tags: Vec<String>,
}

/// `GET /problem/info`
pub async fn info(gw: &Gateway, problem_id: &str) -> Result<ApiResponse<ProblemInfo>, GatewayError> {
    gw.get("/problem/info", &json!({ "ProblemId": problem_id }), CallOptions::default()).await
}

/// `GET /admin/problem/info` — admin only.
pub async fn admin_info(gw: &Gateway, problem_id: &str) -> Result<ApiResponse<AdminProblemInfo>, GatewayError> {
    gw.get("/admin/problem/info", &json!({ "ProblemId": problem_id }), CallOptions::default()).await
}

/// `POST /admin/problem/edit` — insert or update, admin only.
pub async fn edit(gw: &Gateway, params: &EditProblemParams) -> Result<ApiResponse<EditProblemResult>, GatewayError> {
    gw.post("/admin/problem/edit", params, CallOptions::success("problem saved")).await
}

/// `DELETE /admin/problem/delete` — admin only.
pub async fn delete(gw: &Gateway, problem_id: &str) -> Result<ApiResponse<OperationResult>, GatewayError> {
    gw.delete("/admin/problem/delete", &json!({ "ProblemId": problem_id }), CallOptions::success("problem deleted")).await
}

/// `GET /problem/list`
pub async fn list(gw: &Gateway, params: &ProblemListParams) -> Result<ApiResponse<PageResult<ProblemListItem>>, GatewayError> {
    gw.get("/problem/list", params, CallOptions::default()).await
}

/// `GET /admin/problem/list` — admin only.
pub async fn admin_list(gw: &Gateway, page: &PageParams) -> Result<ApiResponse<PageResult<ProblemListItem>>, GatewayError> {
    gw.get("/admin/problem/list", page, CallOptions::default()).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edit_type_serializes_as_wire_string() {
        assert_eq!(serde_json::to_string(&EditType::Insert).unwrap(), r#""Insert""#);
        assert_eq!(serde_json::to_string(&EditType::Update).unwrap(), r#""Update""#);
    }

    #[test]
    fn list_item_verdict_counters_deserialize() {
        let item: ProblemListItem = serde_json::from_value(json!({
            "_id": "1556728162111716352",
            "Title": "Two Sum",
            "SubmitNum": 10, "ACNum": 4, "CENum": 1, "WANum": 3,
            "RENum": 1, "TLENum": 1, "MLENum": 0, "SENum": 0,
            "Tags": ["array"]
        }))
        .unwrap();
        assert_eq!(item.problem_id, "1556728162111716352");
        assert_eq!(item.wa_num, 3);
        assert_eq!(item.tags, vec!["array"]);
    }
}
