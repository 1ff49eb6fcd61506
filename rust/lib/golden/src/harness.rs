//! Shared test fixture: an axum stand-in for the judge backend plus a
//! gateway wired to recording side-effect sinks.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::Path;
use axum::http::HeaderMap;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};

use oj_client::{Gateway, Notifier, SessionStore, SessionTerminator, Severity};

pub const TOKEN: &str = "tok-alice";
pub const USER_ID: &str = "1556728162111716352";

/// Captures every toast the interceptor fires.
#[derive(Default)]
pub struct RecordingNotifier {
    events: Mutex<Vec<(Severity, String)>>,
}

impl RecordingNotifier {
    pub fn events(&self) -> Vec<(Severity, String)> {
        self.events.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, severity: Severity, message: &str) {
        self.events.lock().unwrap().push((severity, message.to_string()));
    }
}

/// Counts terminations and, separately, real logged-in→out transitions
/// (the redirect the UI would perform).
pub struct RecordingTerminator {
    store: Arc<SessionStore>,
    calls: AtomicUsize,
    redirects: AtomicUsize,
}

impl RecordingTerminator {
    pub fn new(store: Arc<SessionStore>) -> Self {
        Self { store, calls: AtomicUsize::new(0), redirects: AtomicUsize::new(0) }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn redirects(&self) -> usize {
        self.redirects.load(Ordering::SeqCst)
    }
}

impl SessionTerminator for RecordingTerminator {
    fn terminate(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.store.logout() {
            self.redirects.fetch_add(1, Ordering::SeqCst);
        }
    }
}

pub struct Harness {
    pub base_url: String,
    pub store: Arc<SessionStore>,
    pub notifier: Arc<RecordingNotifier>,
    pub terminator: Arc<RecordingTerminator>,
    pub gateway: Gateway,
}

pub async fn start() -> Harness {
    start_with_timeout(Duration::from_secs(5)).await
}

pub async fn start_with_timeout(timeout: Duration) -> Harness {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app()).await.unwrap();
    });

    let base_url = format!("http://{}", addr);
    harness_for(&base_url, timeout)
}

/// A gateway pointed at `base_url` without starting a server — used
/// for connection-refused tests.
pub fn harness_for(base_url: &str, timeout: Duration) -> Harness {
    let store = Arc::new(SessionStore::new());
    let notifier = Arc::new(RecordingNotifier::default());
    let terminator = Arc::new(RecordingTerminator::new(store.clone()));
    let gateway = Gateway::with_timeout(
        base_url,
        timeout,
        store.clone(),
        notifier.clone(),
        terminator.clone(),
    )
    .unwrap();

    Harness { base_url: base_url.to_string(), store, notifier, terminator, gateway }
}

// ── Stand-in backend ────────────────────────────────────────────────

fn envelope(code: u32, message: &str, data: Value) -> Json<Value> {
    Json(json!({
        "success": code == 0,
        "code": code,
        "message": message,
        "data": data,
    }))
}

fn login_profile() -> Value {
    json!({
        "_id": USER_ID,
        "Avatar": "avatars/1.png",
        "NickName": "alice",
        "CommentLikes": [],
        "Solves": ["1556000000000000001"],
        "Authority": 3,
        "Token": TOKEN,
    })
}

fn bearer(headers: &HeaderMap) -> Option<&str> {
    headers.get("authorization").and_then(|v| v.to_str().ok())
}

async fn login(Json(body): Json<Value>) -> Json<Value> {
    if body["Account"] == "alice" && body["PassWord"] == "secret" {
        envelope(0, "login ok", login_profile())
    } else {
        envelope(2003, "wrong account or password", Value::Null)
    }
}

async fn reauth(headers: HeaderMap) -> Json<Value> {
    match bearer(&headers) {
        Some(TOKEN) => envelope(0, "ok", login_profile()),
        _ => envelope(2007, "token invalid or expired", Value::Null),
    }
}

async fn logout() -> Json<Value> {
    envelope(0, "ok", json!({ "Result": true }))
}

async fn problem_list() -> Json<Value> {
    envelope(0, "ok", json!({
        "List": [
            {
                "_id": "1556000000000000001",
                "Title": "Two Sum",
                "SubmitNum": 12, "ACNum": 5, "CENum": 2, "WANum": 3,
                "RENum": 1, "TLENum": 1, "MLENum": 0, "SENum": 0,
                "Tags": ["array", "hash"]
            },
            {
                "_id": "1556000000000000002",
                "Title": "Shortest Path",
                "SubmitNum": 7, "ACNum": 2, "CENum": 0, "WANum": 4,
                "RENum": 0, "TLENum": 1, "MLENum": 0, "SENum": 0,
                "Tags": ["graph"]
            }
        ],
        "Total": 2
    }))
}

async fn tags() -> Json<Value> {
    envelope(0, "ok", json!({ "Tags": ["array", "graph", "hash"] }))
}

async fn submit(headers: HeaderMap, Json(body): Json<Value>) -> Json<Value> {
    if bearer(&headers) != Some(TOKEN) {
        return envelope(1002, "not logged in", Value::Null);
    }
    if body["Code"].as_str().unwrap_or_default().is_empty() {
        return envelope(9001, "code is empty", Value::Null);
    }
    envelope(0, "ok", json!({
        "StatusRecordId": "1557000000000000001",
        "CompilerInfo": "",
        "Status": 1,
        "IsFirstAC": true,
    }))
}

async fn business_error(Path(code): Path<u32>) -> Json<Value> {
    envelope(code, &format!("biz {}", code), Value::Null)
}

async fn quiet_success() -> Json<Value> {
    envelope(0, "", Value::Null)
}

async fn echo_token(headers: HeaderMap) -> Json<Value> {
    let token = bearer(&headers).unwrap_or_default();
    envelope(0, "ok", json!({ "Token": token }))
}

async fn raw_unauthorized() -> impl IntoResponse {
    (axum::http::StatusCode::UNAUTHORIZED, "Unauthorized")
}

async fn raw_error500() -> impl IntoResponse {
    (
        axum::http::StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "success": false, "code": 1005, "message": "boom from server" })),
    )
}

async fn raw_bigint() -> impl IntoResponse {
    (
        [(axum::http::header::CONTENT_TYPE, "application/json")],
        r#"{"success":true,"code":0,"message":"ok","data":{"SnowflakeId":9223372036854775807}}"#,
    )
}

async fn raw_malformed() -> &'static str {
    "{not json"
}

async fn slow() -> Json<Value> {
    tokio::time::sleep(Duration::from_millis(400)).await;
    envelope(0, "ok", Value::Null)
}

fn app() -> Router {
    Router::new()
        .route("/user/login", post(login))
        .route("/user/auth", get(reauth))
        .route("/user/logout", post(logout))
        .route("/problem/list", get(problem_list))
        .route("/tags", get(tags))
        .route("/judge/code", post(submit))
        .route("/errors/{code}", get(business_error))
        .route("/quiet-success", get(quiet_success))
        .route("/echo/token", get(echo_token))
        .route("/raw/unauthorized", get(raw_unauthorized))
        .route("/raw/error500", get(raw_error500))
        .route("/raw/bigint", get(raw_bigint))
        .route("/raw/malformed", get(raw_malformed))
        .route("/slow", get(slow))
}
