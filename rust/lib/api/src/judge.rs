//! Judge endpoints.

use serde::{Deserialize, Serialize};

use oj_client::{CallOptions, Gateway, GatewayError};
use oj_core::ApiResponse;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitCodeParams {
    #[serde(rename = "ProblemId")]
    pub problem_id: String,
    #[serde(rename = "Language")]
    pub language: String,
    #[serde(rename = "Code")]
    pub code: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitCodeResult {
    /// Record created for this submission.
    #[serde(rename = "StatusRecordId")]
    pub status_record_id: String,
    #[serde(rename = "CompilerInfo", default)]
    pub compiler_info: String,
    /// Numeric verdict code.
    #[serde(rename = "Status")]
    pub status: i32,
    /// Whether this submission is the user's first accept on the problem.
    #[serde(rename = "IsFirstAC", default)]
    pub is_first_ac: bool,
}

/// `POST /judge/code` — submit code for grading. No automatic toast;
/// the caller renders the verdict itself.
pub async fn submit(gw: &Gateway, params: &SubmitCodeParams) -> Result<ApiResponse<SubmitCodeResult>, GatewayError> {
    gw.post("/judge/code", params, CallOptions::default()).await
}
