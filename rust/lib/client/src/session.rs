use std::sync::RwLock;

use serde::{Deserialize, Serialize};

use oj_core::Authority;

/// Client-held representation of the authenticated user.
///
/// Field names match the login payload on the wire, so a persisted
/// session round-trips through serde unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    /// User id (64-bit snowflake, transported as a string).
    #[serde(rename = "_id")]
    pub user_id: String,

    #[serde(rename = "Avatar")]
    pub avatar: String,

    #[serde(rename = "NickName")]
    pub nickname: String,

    /// Ids of comments this user has liked.
    #[serde(rename = "CommentLikes", default)]
    pub comment_likes: Vec<String>,

    /// Ids of problems this user has solved.
    #[serde(rename = "Solves", default)]
    pub solves: Vec<String>,

    #[serde(rename = "Authority")]
    pub authority: Authority,

    /// Authentication token, sent verbatim in `Authorization`.
    #[serde(rename = "Token", default)]
    pub token: String,

    /// Not part of the wire payload; set when a session is installed.
    #[serde(skip)]
    pub logged_in: bool,
}

impl Session {
    /// The anonymous defaults every logout resets to.
    pub fn anonymous() -> Self {
        Self {
            user_id: "0".to_string(),
            avatar: String::new(),
            nickname: String::new(),
            comment_likes: Vec::new(),
            solves: Vec::new(),
            authority: Authority::Guest,
            token: String::new(),
            logged_in: false,
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::anonymous()
    }
}

struct SessionInner {
    session: Session,
    /// Id of the most recently logged-out user, kept for "same user?"
    /// checks at the next login.
    last_user_id: Option<String>,
}

/// Shared session state, consulted by the request interceptor and
/// mutated by login/logout flows.
///
/// An explicit object handed to the gateway at construction — there is
/// no global. All mutations are synchronous and visible to every
/// reader as soon as the lock drops.
pub struct SessionStore {
    inner: RwLock<SessionInner>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::with_session(Session::anonymous())
    }

    /// Restore a store from a persisted session (e.g. the CLI context
    /// file). A non-empty token marks the session logged in.
    pub fn with_session(mut session: Session) -> Self {
        session.logged_in = !session.token.is_empty();
        Self {
            inner: RwLock::new(SessionInner { session, last_user_id: None }),
        }
    }

    /// Install a full session from a login/re-auth payload: replaces
    /// identity, role, token and derived collections, and sets the
    /// logged-in flag, in one write.
    pub fn set_session(&self, mut profile: Session) {
        profile.logged_in = true;
        self.write().session = profile;
    }

    /// Replace the token alone.
    pub fn set_token(&self, token: impl Into<String>) {
        self.write().session.token = token.into();
    }

    /// Set the logged-in flag alone.
    pub fn set_logged_in(&self, logged_in: bool) {
        self.write().session.logged_in = logged_in;
    }

    /// Current token, if one is set.
    pub fn token(&self) -> Option<String> {
        let guard = self.read();
        if guard.session.token.is_empty() {
            None
        } else {
            Some(guard.session.token.clone())
        }
    }

    pub fn is_logged_in(&self) -> bool {
        self.read().session.logged_in
    }

    /// Derived from the role sentinel, never stored.
    pub fn is_admin(&self) -> bool {
        self.read().session.authority.is_admin()
    }

    /// Owned copy of the current session.
    pub fn snapshot(&self) -> Session {
        self.read().session.clone()
    }

    /// Id of the user who most recently logged out, if any.
    pub fn last_user_id(&self) -> Option<String> {
        self.read().last_user_id.clone()
    }

    /// Reset to anonymous defaults, remembering the just-logged-out
    /// identity. Idempotent: the reset is unconditional, and the
    /// return value reports whether this call actually ended a live
    /// session — `false` on repeat invocations, which lets the
    /// terminator suppress a duplicate redirect when concurrent
    /// requests fail authentication together.
    pub fn logout(&self) -> bool {
        let mut guard = self.write();
        let was_logged_in = guard.session.logged_in;
        if guard.session.user_id != "0" {
            guard.last_user_id = Some(guard.session.user_id.clone());
        }
        guard.session = Session::anonymous();
        was_logged_in
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, SessionInner> {
        self.inner.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, SessionInner> {
        self.inner.write().unwrap_or_else(|e| e.into_inner())
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn logged_in_session() -> Session {
        Session {
            user_id: "1556728162111716352".into(),
            avatar: "avatars/7.png".into(),
            nickname: "alice".into(),
            comment_likes: vec!["15".into()],
            solves: vec!["1001".into()],
            authority: Authority::Ordinary,
            token: "tok-abc".into(),
            logged_in: false,
        }
    }

    #[test]
    fn set_session_marks_logged_in() {
        let store = SessionStore::new();
        assert!(!store.is_logged_in());
        store.set_session(logged_in_session());
        assert!(store.is_logged_in());
        assert_eq!(store.token().as_deref(), Some("tok-abc"));
        assert!(!store.is_admin());
    }

    #[test]
    fn logout_resets_to_anonymous_and_remembers_user() {
        let store = SessionStore::new();
        store.set_session(logged_in_session());

        assert!(store.logout());
        let s = store.snapshot();
        assert_eq!(s.user_id, "0");
        assert_eq!(s.authority, Authority::Guest);
        assert!(s.token.is_empty());
        assert!(s.solves.is_empty());
        assert!(!s.logged_in);
        assert_eq!(store.last_user_id().as_deref(), Some("1556728162111716352"));
    }

    #[test]
    fn logout_twice_is_idempotent() {
        let store = SessionStore::new();
        store.set_session(logged_in_session());

        assert!(store.logout());
        let after_first = store.snapshot();
        assert!(!store.logout(), "second logout must not report a transition");
        let after_second = store.snapshot();

        assert_eq!(after_first.user_id, after_second.user_id);
        assert_eq!(after_first.token, after_second.token);
        assert_eq!(after_first.authority, after_second.authority);
        assert_eq!(after_first.logged_in, after_second.logged_in);
        assert_eq!(store.last_user_id().as_deref(), Some("1556728162111716352"));
    }

    #[test]
    fn anonymous_logout_does_not_record_last_user() {
        let store = SessionStore::new();
        assert!(!store.logout());
        assert_eq!(store.last_user_id(), None);
    }

    #[test]
    fn token_and_flag_are_independent_writes() {
        let store = SessionStore::new();
        store.set_token("tok-xyz");
        assert_eq!(store.token().as_deref(), Some("tok-xyz"));
        assert!(!store.is_logged_in());
        store.set_logged_in(true);
        assert!(store.is_logged_in());
    }

    #[test]
    fn session_wire_roundtrip() {
        let json = r#"{"_id":"9223372036854775807","Avatar":"","NickName":"bob",
                       "CommentLikes":[],"Solves":["1"],"Authority":5,"Token":"t"}"#;
        let s: Session = serde_json::from_str(json).unwrap();
        assert_eq!(s.user_id, "9223372036854775807");
        assert!(s.authority.is_admin());
        assert!(!s.logged_in, "wire payload never carries the flag");
    }

    #[test]
    fn restored_session_with_token_counts_as_logged_in() {
        let store = SessionStore::with_session(logged_in_session());
        assert!(store.is_logged_in());
    }
}
