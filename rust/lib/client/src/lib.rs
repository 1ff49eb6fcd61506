//! The oj HTTP gateway client.
//!
//! One request pipeline shared by every feature module: a reqwest
//! transport with an integer-safe body decoder, a request interceptor
//! that attaches the session token, and a response interceptor that
//! classifies every round trip and drives user-facing side effects
//! through two injected capabilities ([`Notifier`] and
//! [`SessionTerminator`]).
//!
//! # Usage
//!
//! ```ignore
//! use std::sync::Arc;
//! use oj_client::{CallOptions, Gateway, LogoutTerminator, SessionStore, TracingNotifier};
//!
//! let session = Arc::new(SessionStore::new());
//! let gateway = Gateway::new(
//!     "http://localhost:8080/api",
//!     session.clone(),
//!     Arc::new(TracingNotifier),
//!     Arc::new(LogoutTerminator::new(session)),
//! )?;
//! let resp: oj_core::ApiResponse<serde_json::Value> =
//!     gateway.get("/problem/list", &params, CallOptions::default()).await?;
//! ```

pub mod classify;
pub mod decode;
pub mod error;
pub mod gateway;
pub mod notify;
pub mod options;
pub mod session;

pub use classify::{BusinessKind, Classification};
pub use decode::decode_body;
pub use error::GatewayError;
pub use gateway::Gateway;
pub use notify::{LogoutTerminator, Notifier, NullNotifier, SessionTerminator, Severity, TracingNotifier};
pub use options::CallOptions;
pub use session::{Session, SessionStore};
