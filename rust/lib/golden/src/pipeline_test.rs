//! Classification and side-effect properties of the response pipeline.

use std::time::Duration;

use serde_json::{json, Value};

use oj_client::{CallOptions, GatewayError, Session, Severity};
use oj_core::ApiResponse;

use crate::harness::{self, Harness};

fn logged_in(h: &Harness) {
    h.store.set_session(Session {
        user_id: harness::USER_ID.into(),
        nickname: "alice".into(),
        token: harness::TOKEN.into(),
        ..Session::anonymous()
    });
}

async fn get_value(h: &Harness, path: &str, opts: CallOptions) -> Result<ApiResponse<Value>, GatewayError> {
    h.gateway.get(path, &json!({}), opts).await
}

// ── Business success ────────────────────────────────────────────────

#[tokio::test]
async fn success_passes_through_without_side_effects() {
    let h = harness::start().await;
    let resp = get_value(&h, "/problem/list", CallOptions::default()).await.unwrap();

    assert!(resp.is_business_success());
    assert!(resp.data.is_some());
    assert!(h.notifier.events().is_empty(), "no toast unless requested");
    assert_eq!(h.terminator.calls(), 0);
}

#[tokio::test]
async fn success_toast_prefers_custom_over_server_message() {
    let h = harness::start().await;
    let body = json!({ "Account": "alice", "PassWord": "secret" });

    let _: ApiResponse<Value> = h
        .gateway
        .post("/user/login", &body, CallOptions::success("welcome back"))
        .await
        .unwrap();
    assert_eq!(h.notifier.events(), vec![(Severity::Success, "welcome back".to_string())]);
}

#[tokio::test]
async fn success_toast_falls_back_to_server_then_generic() {
    let h = harness::start().await;
    let opts = CallOptions { show_success_message: true, ..CallOptions::default() };

    let body = json!({ "Account": "alice", "PassWord": "secret" });
    let _: ApiResponse<Value> = h.gateway.post("/user/login", &body, opts.clone()).await.unwrap();
    assert_eq!(h.notifier.events(), vec![(Severity::Success, "login ok".to_string())]);

    let _ = get_value(&h, "/quiet-success", opts).await.unwrap();
    assert_eq!(h.notifier.events()[1], (Severity::Success, "operation succeeded".to_string()));
}

// ── Business errors ─────────────────────────────────────────────────

#[tokio::test]
async fn auth_code_logs_out_and_resets_session() {
    let h = harness::start().await;
    logged_in(&h);

    let resp = get_value(&h, "/errors/1002", CallOptions::default()).await.unwrap();
    assert!(!resp.success, "business error still resolves Ok");
    assert_eq!(resp.code, 1002);

    assert_eq!(h.notifier.events(), vec![(Severity::Error, "biz 1002".to_string())]);
    assert_eq!(h.terminator.calls(), 1, "exactly one termination per response");
    let s = h.store.snapshot();
    assert_eq!(s.user_id, "0");
    assert!(s.token.is_empty());
    assert!(!s.logged_in);
}

#[tokio::test]
async fn token_invalid_code_also_logs_out() {
    let h = harness::start().await;
    logged_in(&h);

    let _ = get_value(&h, "/errors/2007", CallOptions::default()).await.unwrap();
    assert_eq!(h.terminator.calls(), 1);
    assert!(!h.store.is_logged_in());
}

#[tokio::test]
async fn concurrent_auth_failures_redirect_once() {
    let h = harness::start().await;
    logged_in(&h);

    let (a, b) = tokio::join!(
        get_value(&h, "/errors/1002", CallOptions::default()),
        get_value(&h, "/errors/2007", CallOptions::default()),
    );
    a.unwrap();
    b.unwrap();

    // Each response terminates independently, but only the first one
    // ends a live session — the duplicate redirect is suppressed.
    assert_eq!(h.terminator.calls(), 2);
    assert_eq!(h.terminator.redirects(), 1);
    assert!(!h.store.is_logged_in());
}

#[tokio::test]
async fn permission_error_toasts_without_logout() {
    let h = harness::start().await;
    logged_in(&h);

    let resp = get_value(&h, "/errors/1003", CallOptions::default()).await.unwrap();
    assert_eq!(resp.code, 1003);
    assert_eq!(h.notifier.events(), vec![(Severity::Error, "biz 1003".to_string())]);
    assert_eq!(h.terminator.calls(), 0);
    assert!(h.store.is_logged_in(), "permission errors keep the session");
}

#[tokio::test]
async fn rate_limit_warns_instead_of_erroring() {
    let h = harness::start().await;

    let _ = get_value(&h, "/errors/1007", CallOptions::default()).await.unwrap();
    assert_eq!(h.notifier.events(), vec![(Severity::Warning, "biz 1007".to_string())]);
    assert_eq!(h.terminator.calls(), 0);
}

#[tokio::test]
async fn other_business_code_is_generic_error() {
    let h = harness::start().await;

    let resp = get_value(&h, "/errors/3001", CallOptions::default()).await.unwrap();
    assert_eq!(resp.code, 3001);
    assert_eq!(h.notifier.events(), vec![(Severity::Error, "biz 3001".to_string())]);
}

#[tokio::test]
async fn silent_call_suppresses_business_toast() {
    let h = harness::start().await;

    let resp = get_value(&h, "/errors/3001", CallOptions::default().silent()).await.unwrap();
    assert!(!resp.success);
    assert!(h.notifier.events().is_empty());
}

#[tokio::test]
async fn silent_auth_error_still_logs_out() {
    let h = harness::start().await;
    logged_in(&h);

    let _ = get_value(&h, "/errors/1002", CallOptions::default().silent()).await.unwrap();
    assert!(h.notifier.events().is_empty(), "toast suppressed");
    assert_eq!(h.terminator.calls(), 1, "logout is not suppressible");
}

// ── Transport errors ────────────────────────────────────────────────

#[tokio::test]
async fn http_401_with_unparsable_body_maps_and_logs_out() {
    let h = harness::start().await;
    logged_in(&h);

    let err = get_value(&h, "/raw/unauthorized", CallOptions::default()).await.unwrap_err();
    match err {
        GatewayError::Http { status, message } => {
            assert_eq!(status, 401);
            assert_eq!(message, "not logged in or login expired");
        }
        other => panic!("expected Http error, got: {:?}", other),
    }
    assert_eq!(
        h.notifier.events(),
        vec![(Severity::Error, "not logged in or login expired".to_string())]
    );
    assert_eq!(h.terminator.calls(), 1);
    assert!(!h.store.is_logged_in());
}

#[tokio::test]
async fn http_error_prefers_server_message() {
    let h = harness::start().await;

    let err = get_value(&h, "/raw/error500", CallOptions::default()).await.unwrap_err();
    match err {
        GatewayError::Http { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "boom from server");
        }
        other => panic!("expected Http error, got: {:?}", other),
    }
    assert_eq!(h.terminator.calls(), 0, "only 401 forces logout");
}

#[tokio::test]
async fn timeout_is_distinguished_from_network_failure() {
    let h = harness::start_with_timeout(Duration::from_millis(100)).await;

    let err = get_value(&h, "/slow", CallOptions::default()).await.unwrap_err();
    assert!(matches!(err, GatewayError::Timeout), "got: {:?}", err);
    assert_eq!(
        h.notifier.events(),
        vec![(Severity::Error, "request timed out, try again later".to_string())]
    );
}

#[tokio::test]
async fn connection_refused_is_a_network_error() {
    // Bind then drop to get a port nothing listens on.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let h = harness::harness_for(&format!("http://{}", addr), Duration::from_secs(2));
    let err = get_value(&h, "/problem/list", CallOptions::default()).await.unwrap_err();
    assert!(matches!(err, GatewayError::Network(_)), "got: {:?}", err);
    assert_eq!(
        h.notifier.events(),
        vec![(Severity::Error, "network error, check your connection".to_string())]
    );
}

// ── Decoder ─────────────────────────────────────────────────────────

#[tokio::test]
async fn big_integers_survive_digit_exact() {
    let h = harness::start().await;

    let resp = get_value(&h, "/raw/bigint", CallOptions::default()).await.unwrap();
    assert!(resp.is_business_success());
    let id = &resp.data.unwrap()["SnowflakeId"];
    assert_eq!(id.to_string(), "9223372036854775807");
}

#[tokio::test]
async fn malformed_body_resolves_with_raw_text() {
    let h = harness::start().await;

    let resp: ApiResponse<String> = h
        .gateway
        .get("/raw/malformed", &json!({}), CallOptions::default())
        .await
        .unwrap();
    assert!(!resp.success, "fallback body classifies as business failure");
    assert_eq!(resp.data.as_deref(), Some("{not json"));
    assert_eq!(h.notifier.events(), vec![(Severity::Error, "operation failed".to_string())]);
}

// ── Request interceptor ─────────────────────────────────────────────

#[tokio::test]
async fn token_is_attached_verbatim() {
    let h = harness::start().await;
    h.store.set_token("tok-abc");

    let resp = get_value(&h, "/echo/token", CallOptions::default()).await.unwrap();
    assert_eq!(resp.data.unwrap()["Token"], "tok-abc", "no scheme prefix");
}

#[tokio::test]
async fn anonymous_requests_send_no_auth_header() {
    let h = harness::start().await;

    let resp = get_value(&h, "/echo/token", CallOptions::default()).await.unwrap();
    assert_eq!(resp.data.unwrap()["Token"], "");
}
