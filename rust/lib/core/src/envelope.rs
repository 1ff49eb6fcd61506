use serde::{Deserialize, Serialize};

/// Wire envelope wrapped around every endpoint's payload.
///
/// The backend always responds with this shape:
///
/// ```json
/// {"success": true, "code": 0, "message": "ok", "data": {...}}
/// ```
///
/// `success && code == 0` is the one and only definition of business
/// success. Any other combination carries a business error code (see
/// [`crate::code`]). Fields default when absent so that non-envelope
/// bodies (the decoder's raw-text fallback) still parse; they classify
/// as a generic business failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ApiResponse<T> {
    /// Whether the operation succeeded at the business level.
    #[serde(default)]
    pub success: bool,

    /// Business status code; 0 means success.
    #[serde(default)]
    pub code: u32,

    /// Human-readable message from the server.
    #[serde(default)]
    pub message: String,

    /// Typed payload; absent on most failures.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// True iff this envelope is a business success.
    pub fn is_business_success(&self) -> bool {
        self.success && self.code == crate::code::SUCCESS
    }

    /// Consume the envelope, yielding the payload if present.
    pub fn into_data(self) -> Option<T> {
        self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_requires_both_flag_and_code() {
        let ok: ApiResponse<()> = serde_json::from_str(r#"{"success":true,"code":0,"message":"ok"}"#).unwrap();
        assert!(ok.is_business_success());

        let flag_only: ApiResponse<()> =
            serde_json::from_str(r#"{"success":true,"code":1000,"message":"x"}"#).unwrap();
        assert!(!flag_only.is_business_success());

        let code_only: ApiResponse<()> =
            serde_json::from_str(r#"{"success":false,"code":0,"message":"x"}"#).unwrap();
        assert!(!code_only.is_business_success());
    }

    #[test]
    fn missing_fields_default_to_failure() {
        // Raw-text fallback bodies look like {"data": "..."} — no envelope fields.
        let resp: ApiResponse<String> = serde_json::from_str(r#"{"data":"{not json"}"#).unwrap();
        assert!(!resp.success);
        assert_eq!(resp.code, 0);
        assert!(!resp.is_business_success());
        assert_eq!(resp.data.as_deref(), Some("{not json"));
    }

    #[test]
    fn payload_roundtrip() {
        #[derive(Debug, PartialEq, Serialize, Deserialize)]
        struct Payload {
            id: String,
        }
        let resp = ApiResponse {
            success: true,
            code: 0,
            message: "ok".into(),
            data: Some(Payload { id: "9223372036854775807".into() }),
        };
        let json = serde_json::to_string(&resp).unwrap();
        let back: ApiResponse<Payload> = serde_json::from_str(&json).unwrap();
        assert_eq!(back.into_data().unwrap(), Payload { id: "9223372036854775807".into() });
    }
}
