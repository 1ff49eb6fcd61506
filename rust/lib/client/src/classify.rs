//! Envelope classification.
//!
//! Every completed round trip lands in exactly one state, evaluated in
//! a fixed order. Transport failures never reach this point — they are
//! the `Err` side of the gateway's `Result`.

use oj_core::code;

use crate::notify::Severity;

/// Sub-classification of a business failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BusinessKind {
    /// Not logged in, or token invalid/expired. Forces a logout.
    Auth,
    /// Authenticated but not allowed.
    Permission,
    /// Too many requests; surfaced at warning severity.
    RateLimit,
    /// Any other non-zero business code.
    Other,
}

impl BusinessKind {
    /// Notification severity for this kind of failure.
    pub fn severity(self) -> Severity {
        match self {
            BusinessKind::RateLimit => Severity::Warning,
            _ => Severity::Error,
        }
    }
}

/// Outcome of classifying one envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// `success == true && code == 0`.
    Success,
    /// Transport succeeded but the business layer reported a failure.
    Business(BusinessKind),
}

/// Classify an envelope's `success` flag and business code.
///
/// Order matters and mirrors the response interceptor: success first,
/// then auth, permission, rate-limit, and finally the generic bucket.
pub fn classify(success: bool, code: u32) -> Classification {
    if success && code::is_success(code) {
        Classification::Success
    } else if code::is_auth_error(code) {
        Classification::Business(BusinessKind::Auth)
    } else if code::is_permission_error(code) {
        Classification::Business(BusinessKind::Permission)
    } else if code == code::RATE_LIMIT {
        Classification::Business(BusinessKind::RateLimit)
    } else {
        Classification::Business(BusinessKind::Other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_needs_flag_and_zero_code() {
        assert_eq!(classify(true, 0), Classification::Success);
        assert_eq!(classify(false, 0), Classification::Business(BusinessKind::Other));
        assert_eq!(classify(true, code::UNKNOWN_ERROR), Classification::Business(BusinessKind::Other));
    }

    #[test]
    fn auth_codes() {
        assert_eq!(classify(false, code::UNAUTHORIZED), Classification::Business(BusinessKind::Auth));
        assert_eq!(classify(false, code::USER_TOKEN_INVALID), Classification::Business(BusinessKind::Auth));
    }

    #[test]
    fn permission_and_rate_limit() {
        assert_eq!(classify(false, code::FORBIDDEN), Classification::Business(BusinessKind::Permission));
        assert_eq!(classify(false, code::RATE_LIMIT), Classification::Business(BusinessKind::RateLimit));
    }

    #[test]
    fn module_codes_fall_into_generic_bucket() {
        for c in [code::USER_LOGIN_FAILED, code::PROBLEM_NOT_FOUND, code::JUDGE_CODE_EMPTY] {
            assert_eq!(classify(false, c), Classification::Business(BusinessKind::Other));
        }
    }

    #[test]
    fn rate_limit_is_warning_everything_else_error() {
        assert_eq!(BusinessKind::RateLimit.severity(), Severity::Warning);
        assert_eq!(BusinessKind::Auth.severity(), Severity::Error);
        assert_eq!(BusinessKind::Permission.severity(), Severity::Error);
        assert_eq!(BusinessKind::Other.severity(), Severity::Error);
    }
}
