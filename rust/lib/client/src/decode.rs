use serde_json::Value;

/// Decode a raw response body, preserving large-integer precision.
///
/// Business identifiers are 64-bit snowflakes; a naive double-based
/// parse would silently corrupt any numeric literal past 2^53−1, so
/// serde_json is built with `arbitrary_precision` and numbers keep
/// their exact digits through the [`Value`] round trip.
///
/// A body that is not valid JSON is returned as `{"data": <raw text>}`
/// instead of failing the call; the caller sees it as a generic
/// business failure. No other transformation is applied.
pub fn decode_body(text: &str) -> Value {
    match serde_json::from_str::<Value>(text) {
        Ok(value) => value,
        Err(err) => {
            tracing::warn!(error = %err, "response body is not JSON, passing through raw");
            serde_json::json!({ "data": text })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preserves_i64_max_digits() {
        let value = decode_body(r#"{"data":{"_id":9223372036854775807}}"#);
        assert_eq!(value["data"]["_id"].to_string(), "9223372036854775807");
    }

    #[test]
    fn preserves_digits_beyond_u64() {
        let value = decode_body(r#"{"n":98765432109876543210987654321}"#);
        assert_eq!(value["n"].to_string(), "98765432109876543210987654321");
    }

    #[test]
    fn malformed_body_wraps_raw_text() {
        let value = decode_body("{not json");
        assert_eq!(value, serde_json::json!({ "data": "{not json" }));
    }

    #[test]
    fn empty_body_wraps_raw_text() {
        let value = decode_body("");
        assert_eq!(value, serde_json::json!({ "data": "" }));
    }

    #[test]
    fn valid_json_passes_through_unchanged() {
        let value = decode_body(r#"{"success":true,"code":0,"message":"ok"}"#);
        assert_eq!(value["success"], Value::Bool(true));
        assert_eq!(value["message"], Value::String("ok".into()));
    }
}
