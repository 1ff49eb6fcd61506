//! Injected side-effect capabilities.
//!
//! The response interceptor never talks to a UI or a router directly;
//! it is handed a [`Notifier`] for transient messages and a
//! [`SessionTerminator`] for forced logouts, so classification logic
//! stays testable without either.

use std::sync::Arc;

use crate::session::SessionStore;

/// Visual severity of a transient notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Warning,
    Error,
}

/// Sink for user-facing transient messages.
pub trait Notifier: Send + Sync {
    fn notify(&self, severity: Severity, message: &str);
}

/// Routes notifications to the tracing subscriber.
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, severity: Severity, message: &str) {
        match severity {
            Severity::Success => tracing::info!("{}", message),
            Severity::Warning => tracing::warn!("{}", message),
            Severity::Error => tracing::error!("{}", message),
        }
    }
}

/// Discards everything.
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn notify(&self, _severity: Severity, _message: &str) {}
}

/// Forced end of the current session: clear state and surface a
/// login redirect. Invoked by the response interceptor on every
/// authentication failure, business-level or HTTP 401.
pub trait SessionTerminator: Send + Sync {
    fn terminate(&self);
}

/// Default terminator: resets the [`SessionStore`] and emits the
/// redirect hint only when the call actually ended a live session, so
/// concurrent auth failures produce a single redirect.
pub struct LogoutTerminator {
    store: Arc<SessionStore>,
}

impl LogoutTerminator {
    pub fn new(store: Arc<SessionStore>) -> Self {
        Self { store }
    }
}

impl SessionTerminator for LogoutTerminator {
    fn terminate(&self) {
        if self.store.logout() {
            tracing::debug!("session terminated, login required");
        }
    }
}
