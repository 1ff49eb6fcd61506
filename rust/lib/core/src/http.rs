//! HTTP-level constants: canned status messages, timeout, content types.

use std::time::Duration;

/// Default timeout applied to every request.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// JSON request body content type.
pub const CONTENT_TYPE_JSON: &str = "application/json;charset=UTF-8";

/// Multipart upload content type.
pub const CONTENT_TYPE_MULTIPART: &str = "multipart/form-data";

/// Canned message for an HTTP status, if one exists.
pub fn status_message(status: u16) -> Option<&'static str> {
    match status {
        400 => Some("invalid request parameters"),
        401 => Some("not logged in or login expired"),
        403 => Some("no permission to access this resource"),
        404 => Some("requested resource does not exist"),
        408 => Some("request timed out"),
        409 => Some("request conflict"),
        429 => Some("requests too frequent, try again later"),
        500 => Some("server error, try again later"),
        502 => Some("bad gateway"),
        503 => Some("service temporarily unavailable"),
        504 => Some("gateway timeout"),
        _ => None,
    }
}

/// Canned message with the generic fallback for unmapped statuses.
pub fn error_message(status: u16) -> String {
    match status_message(status) {
        Some(msg) => msg.to_string(),
        None => format!("request failed ({})", status),
    }
}
