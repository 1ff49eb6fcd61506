//! Command implementations and the gateway wiring they share.

pub mod context;
pub mod login;
pub mod resource;
pub mod submit;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Result;

use oj_client::{Gateway, Notifier, Session, SessionStore, SessionTerminator, Severity};

use crate::config::ClientConfig;

/// Prints interceptor toasts to stderr the way a UI would show them.
pub struct TermNotifier;

impl Notifier for TermNotifier {
    fn notify(&self, severity: Severity, message: &str) {
        match severity {
            Severity::Success => eprintln!("{}", message),
            Severity::Warning => eprintln!("warning: {}", message),
            Severity::Error => eprintln!("error: {}", message),
        }
    }
}

/// Forced-logout handler: resets the store, drops the persisted
/// credentials, and tells the user where to go next — the CLI's
/// version of the login-page redirect.
pub struct ExpiredTerminator {
    store: Arc<SessionStore>,
    config_path: PathBuf,
}

impl SessionTerminator for ExpiredTerminator {
    fn terminate(&self) {
        if !self.store.logout() {
            return;
        }
        match ClientConfig::load(&self.config_path) {
            Ok(mut config) => {
                config.clear_credentials();
                if let Err(err) = config.save(&self.config_path) {
                    tracing::warn!(error = %err, "failed to drop persisted credentials");
                }
            }
            Err(err) => tracing::warn!(error = %err, "failed to load client config"),
        }
        eprintln!("session expired — run `oj login` to sign in again");
    }
}

/// Build a gateway for the current context, restoring its persisted
/// session into the store.
pub fn build_gateway(config_path: &Path) -> Result<(Gateway, Arc<SessionStore>)> {
    let config = ClientConfig::load(config_path)?;
    let ctx = config
        .current()
        .ok_or_else(|| anyhow::anyhow!("No current context. Run `oj use context <name>`."))?;

    if ctx.server.is_empty() {
        anyhow::bail!(
            "No server URL set for context \"{}\". Run `oj context set {} --server <url>`.",
            ctx.name,
            ctx.name
        );
    }

    let mut session = ctx.session.clone().unwrap_or_else(Session::anonymous);
    session.token = ctx.token.clone();
    let store = Arc::new(SessionStore::with_session(session));

    let gateway = Gateway::new(
        &ctx.server,
        store.clone(),
        Arc::new(TermNotifier),
        Arc::new(ExpiredTerminator {
            store: store.clone(),
            config_path: config_path.to_path_buf(),
        }),
    )?;

    Ok((gateway, store))
}
