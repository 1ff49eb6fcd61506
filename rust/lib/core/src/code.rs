// ── Business codes ──────────────────────────────────────────────────
//
// Stable, machine-readable codes carried in the envelope's `code`
// field, distinct from HTTP status. Clients match on these — never on
// the human-readable message string.
//
// Ranges: 0 success; 1xxx generic; 2xxx user; 3xxx problem; 4xxx
// announcement; 5xxx discussion; 6xxx solution; 7xxx comment; 8xxx
// status record; 9xxx judge.

/// Operation succeeded.
pub const SUCCESS: u32 = 0;

// ── Generic (1xxx) ──
pub const UNKNOWN_ERROR: u32 = 1000;
pub const BAD_REQUEST: u32 = 1001;
/// Not logged in.
pub const UNAUTHORIZED: u32 = 1002;
/// Logged in but lacks permission.
pub const FORBIDDEN: u32 = 1003;
pub const NOT_FOUND: u32 = 1004;
pub const INTERNAL_ERROR: u32 = 1005;
pub const DATABASE_ERROR: u32 = 1006;
/// Too many requests.
pub const RATE_LIMIT: u32 = 1007;

// ── User (2xxx) ──
pub const USER_ACCOUNT_EXISTS: u32 = 2001;
pub const USER_NICKNAME_EXISTS: u32 = 2002;
pub const USER_LOGIN_FAILED: u32 = 2003;
pub const USER_NOT_FOUND: u32 = 2004;
pub const USER_PASSWORD_INVALID: u32 = 2005;
pub const USER_OLD_PASSWORD_WRONG: u32 = 2006;
/// Token invalid or expired.
pub const USER_TOKEN_INVALID: u32 = 2007;

// ── Problem (3xxx) ──
pub const PROBLEM_NOT_FOUND: u32 = 3001;
pub const PROBLEM_TITLE_EXISTS: u32 = 3002;
pub const PROBLEM_DATA_INVALID: u32 = 3003;

// ── Announcement (4xxx) ──
pub const ANNOUNCEMENT_NOT_FOUND: u32 = 4001;

// ── Discussion (5xxx) ──
pub const DISCUSS_NOT_FOUND: u32 = 5001;

// ── Solution (6xxx) ──
pub const SOLUTION_NOT_FOUND: u32 = 6001;

// ── Comment (7xxx) ──
pub const COMMENT_NOT_FOUND: u32 = 7001;
pub const COMMENT_CONTENT_EMPTY: u32 = 7002;
pub const COMMENT_TYPE_INVALID: u32 = 7003;
pub const COMMENT_INSERT_FAILED: u32 = 7004;

// ── Status record (8xxx) ──
pub const STATUS_RECORD_NOT_FOUND: u32 = 8001;

// ── Judge (9xxx) ──
pub const JUDGE_CODE_EMPTY: u32 = 9001;
pub const JUDGE_LANGUAGE_UNSUPPORTED: u32 = 9002;
pub const JUDGE_SERVICE_UNAVAILABLE: u32 = 9003;

/// True iff `code` is the success code.
pub fn is_success(code: u32) -> bool {
    code == SUCCESS
}

/// True iff `code` means the session is missing or no longer valid.
///
/// Both codes force a logout in the response pipeline.
pub fn is_auth_error(code: u32) -> bool {
    code == UNAUTHORIZED || code == USER_TOKEN_INVALID
}

/// True iff `code` means the caller is authenticated but not allowed.
pub fn is_permission_error(code: u32) -> bool {
    code == FORBIDDEN
}

/// Human-readable description of a code, for logs and fallback display.
pub fn describe(code: u32) -> &'static str {
    match code {
        SUCCESS => "operation succeeded",
        UNKNOWN_ERROR => "unknown error",
        BAD_REQUEST => "invalid request parameters",
        UNAUTHORIZED => "not logged in",
        FORBIDDEN => "no permission for this operation",
        NOT_FOUND => "resource not found",
        INTERNAL_ERROR => "internal server error",
        DATABASE_ERROR => "database error",
        RATE_LIMIT => "too many requests",
        USER_ACCOUNT_EXISTS => "account already exists",
        USER_NICKNAME_EXISTS => "nickname already exists",
        USER_LOGIN_FAILED => "wrong account or password",
        USER_NOT_FOUND => "user not found",
        USER_PASSWORD_INVALID => "invalid password format",
        USER_OLD_PASSWORD_WRONG => "old password is wrong",
        USER_TOKEN_INVALID => "token invalid or expired",
        PROBLEM_NOT_FOUND => "problem not found",
        PROBLEM_TITLE_EXISTS => "problem title already exists",
        PROBLEM_DATA_INVALID => "invalid problem data",
        ANNOUNCEMENT_NOT_FOUND => "announcement not found",
        DISCUSS_NOT_FOUND => "discussion not found",
        SOLUTION_NOT_FOUND => "solution not found",
        COMMENT_NOT_FOUND => "comment not found",
        COMMENT_CONTENT_EMPTY => "comment content is empty",
        COMMENT_TYPE_INVALID => "invalid comment type",
        COMMENT_INSERT_FAILED => "failed to insert comment",
        STATUS_RECORD_NOT_FOUND => "status record not found",
        JUDGE_CODE_EMPTY => "code is empty",
        JUDGE_LANGUAGE_UNSUPPORTED => "unsupported language",
        JUDGE_SERVICE_UNAVAILABLE => "judge service unavailable",
        _ => "unknown error",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_error_set() {
        assert!(is_auth_error(UNAUTHORIZED));
        assert!(is_auth_error(USER_TOKEN_INVALID));
        assert!(!is_auth_error(FORBIDDEN));
        assert!(!is_auth_error(SUCCESS));
        assert!(!is_auth_error(RATE_LIMIT));
    }

    #[test]
    fn permission_error_is_only_forbidden() {
        assert!(is_permission_error(FORBIDDEN));
        assert!(!is_permission_error(UNAUTHORIZED));
        assert!(!is_permission_error(USER_TOKEN_INVALID));
    }

    #[test]
    fn describe_falls_back_for_unknown() {
        assert_eq!(describe(SUCCESS), "operation succeeded");
        assert_eq!(describe(4242), "unknown error");
    }
}
