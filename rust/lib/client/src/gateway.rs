use std::sync::Arc;

use reqwest::header::{HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use oj_core::{code, http, ApiResponse};

use crate::classify::{classify, BusinessKind, Classification};
use crate::decode::decode_body;
use crate::error::GatewayError;
use crate::notify::{Notifier, SessionTerminator, Severity};
use crate::options::CallOptions;
use crate::session::SessionStore;

/// What a call sends along with its path.
enum Payload {
    /// Query-string parameters (GET / DELETE).
    Query(Value),
    /// JSON body (POST / PUT). `Value::Null` sends no body.
    Json(Value),
}

/// The shared request pipeline.
///
/// Owns the transport and the two interceptors. Every typed wrapper
/// delegates here; there is no retry, no queue, no deduplication and
/// no cancellation of in-flight requests — side effects run against
/// the injected capabilities regardless of whether the caller is
/// still interested in the result.
pub struct Gateway {
    http: reqwest::Client,
    base_url: String,
    session: Arc<SessionStore>,
    notifier: Arc<dyn Notifier>,
    terminator: Arc<dyn SessionTerminator>,
}

impl Gateway {
    /// Build a gateway against `base_url` (e.g. `http://host:8080/api`)
    /// with the default 30 s timeout.
    pub fn new(
        base_url: impl Into<String>,
        session: Arc<SessionStore>,
        notifier: Arc<dyn Notifier>,
        terminator: Arc<dyn SessionTerminator>,
    ) -> Result<Self, GatewayError> {
        Self::with_timeout(base_url, http::REQUEST_TIMEOUT, session, notifier, terminator)
    }

    /// Same as [`Gateway::new`] with an explicit timeout.
    pub fn with_timeout(
        base_url: impl Into<String>,
        timeout: std::time::Duration,
        session: Arc<SessionStore>,
        notifier: Arc<dyn Notifier>,
        terminator: Arc<dyn SessionTerminator>,
    ) -> Result<Self, GatewayError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| GatewayError::Setup(e.to_string()))?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            session,
            notifier,
            terminator,
        })
    }

    /// The session store this gateway reads tokens from.
    pub fn session(&self) -> &Arc<SessionStore> {
        &self.session
    }

    pub async fn get<T, Q>(&self, path: &str, query: &Q, opts: CallOptions) -> Result<ApiResponse<T>, GatewayError>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        self.request(Method::GET, path, Payload::Query(snapshot(query)?), &opts).await
    }

    pub async fn post<T, B>(&self, path: &str, body: &B, opts: CallOptions) -> Result<ApiResponse<T>, GatewayError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.request(Method::POST, path, Payload::Json(snapshot(body)?), &opts).await
    }

    pub async fn put<T, B>(&self, path: &str, body: &B, opts: CallOptions) -> Result<ApiResponse<T>, GatewayError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.request(Method::PUT, path, Payload::Json(snapshot(body)?), &opts).await
    }

    pub async fn delete<T, Q>(&self, path: &str, query: &Q, opts: CallOptions) -> Result<ApiResponse<T>, GatewayError>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        self.request(Method::DELETE, path, Payload::Query(snapshot(query)?), &opts).await
    }

    async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        payload: Payload,
        opts: &CallOptions,
    ) -> Result<ApiResponse<T>, GatewayError> {
        let url = format!("{}{}", self.base_url, path);
        let mut req = self.http.request(method.clone(), &url);

        // Request interceptor: attach the session token verbatim.
        if let Some(token) = self.session.token() {
            let value = HeaderValue::from_str(&token)
                .map_err(|e| GatewayError::Setup(format!("invalid token header: {}", e)))?;
            req = req.header(AUTHORIZATION, value);
        }

        match payload {
            Payload::Query(params) => {
                req = req.query(&query_pairs(&params));
            }
            Payload::Json(Value::Null) => {}
            Payload::Json(body) => {
                req = req
                    .header(CONTENT_TYPE, http::CONTENT_TYPE_JSON)
                    .json(&body);
            }
        }

        debug!(method = %method, url = %url, "request");

        let resp = match req.send().await {
            Ok(resp) => resp,
            Err(err) => return Err(self.transport_failure(err, opts)),
        };

        let status = resp.status().as_u16();
        let text = resp
            .text()
            .await
            .map_err(|err| self.transport_failure(err, opts))?;
        let body = decode_body(&text);

        debug!(status, url = %url, "response");

        if (200..300).contains(&status) {
            // Response interceptor: classify, fire side effects, pass
            // the envelope through unchanged.
            self.inspect(&body, opts);
            serde_json::from_value(body).map_err(|e| GatewayError::Decode(e.to_string()))
        } else {
            Err(self.http_failure(status, &body, opts))
        }
    }

    /// Business-level classification of a 2xx body. The payload is
    /// never rewritten; this only triggers notifications and, on auth
    /// failure, the session terminator.
    fn inspect(&self, body: &Value, opts: &CallOptions) {
        let success = body.get("success").and_then(Value::as_bool).unwrap_or(false);
        let business_code = body
            .get("code")
            .and_then(Value::as_u64)
            .and_then(|c| u32::try_from(c).ok())
            .unwrap_or(code::UNKNOWN_ERROR);
        let server_message = body
            .get("message")
            .and_then(Value::as_str)
            .filter(|m| !m.is_empty());

        match classify(success, business_code) {
            Classification::Success => {
                if opts.show_success_message {
                    let message = opts
                        .success_message
                        .as_deref()
                        .or(server_message)
                        .unwrap_or("operation succeeded");
                    self.notifier.notify(Severity::Success, message);
                }
            }
            Classification::Business(kind) => {
                if opts.show_error_message {
                    let message = server_message.unwrap_or("operation failed");
                    self.notifier.notify(kind.severity(), message);
                }
                if kind == BusinessKind::Auth {
                    self.terminator.terminate();
                }
            }
        }
    }

    /// Non-2xx status: canned message unless the server sent one, then
    /// reject. A 401 also ends the session, parsable body or not.
    fn http_failure(&self, status: u16, body: &Value, opts: &CallOptions) -> GatewayError {
        let message = body
            .get("message")
            .and_then(Value::as_str)
            .filter(|m| !m.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| http::error_message(status));

        if opts.show_error_message {
            self.notifier.notify(Severity::Error, &message);
        }
        if status == 401 {
            self.terminator.terminate();
        }
        GatewayError::Http { status, message }
    }

    /// No response at all: timeout, network failure, or a request that
    /// never left the client.
    fn transport_failure(&self, err: reqwest::Error, opts: &CallOptions) -> GatewayError {
        let mapped = GatewayError::from_transport(err);
        if opts.show_error_message {
            let message = match &mapped {
                GatewayError::Timeout => "request timed out, try again later",
                GatewayError::Setup(_) => "request configuration error",
                _ => "network error, check your connection",
            };
            self.notifier.notify(Severity::Error, message);
        }
        mapped
    }
}

/// Snapshot a payload to an owned `Value` at call time, so the caller
/// mutating its struct afterwards cannot touch an in-flight request.
fn snapshot<P: Serialize + ?Sized>(payload: &P) -> Result<Value, GatewayError> {
    serde_json::to_value(payload).map_err(|e| GatewayError::Setup(e.to_string()))
}

/// Flatten a JSON object into query pairs the way the backend expects:
/// nested objects become `Parent[Key]=v`, arrays `Key[0]=v`, and null
/// entries are skipped.
fn query_pairs(params: &Value) -> Vec<(String, String)> {
    let mut pairs = Vec::new();
    if let Value::Object(map) = params {
        for (key, value) in map {
            flatten_into(key.clone(), value, &mut pairs);
        }
    }
    pairs
}

fn flatten_into(key: String, value: &Value, pairs: &mut Vec<(String, String)>) {
    match value {
        Value::Null => {}
        Value::String(s) => pairs.push((key, s.clone())),
        Value::Object(map) => {
            for (k, v) in map {
                flatten_into(format!("{}[{}]", key, k), v, pairs);
            }
        }
        Value::Array(items) => {
            for (i, v) in items.iter().enumerate() {
                flatten_into(format!("{}[{}]", key, i), v, pairs);
            }
        }
        other => pairs.push((key, other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_pairs_flatten_scalars() {
        let pairs = query_pairs(&serde_json::json!({
            "Page": 1, "PageSize": 20, "UserId": "9223372036854775807"
        }));
        assert!(pairs.contains(&("Page".into(), "1".into())));
        assert!(pairs.contains(&("PageSize".into(), "20".into())));
        assert!(pairs.contains(&("UserId".into(), "9223372036854775807".into())));
    }

    #[test]
    fn query_pairs_flatten_nested_search_info() {
        let pairs = query_pairs(&serde_json::json!({
            "Page": 1,
            "SearchInfo": { "Title": "two sum", "Tags": ["dp", "graph"] }
        }));
        assert!(pairs.contains(&("SearchInfo[Title]".into(), "two sum".into())));
        assert!(pairs.contains(&("SearchInfo[Tags][0]".into(), "dp".into())));
        assert!(pairs.contains(&("SearchInfo[Tags][1]".into(), "graph".into())));
    }

    #[test]
    fn query_pairs_skip_null() {
        let pairs = query_pairs(&serde_json::json!({ "Page": 1, "SearchInfo": null }));
        assert_eq!(pairs, vec![("Page".to_string(), "1".to_string())]);
    }

    #[test]
    fn snapshot_is_an_owned_copy() {
        let mut body = serde_json::json!({ "Title": "before" });
        let frozen = snapshot(&body).unwrap();
        body["Title"] = Value::String("after".into());
        assert_eq!(frozen["Title"], Value::String("before".into()));
    }
}
