//! Client-side context management.
//!
//! Reads/writes `~/.oj/config.toml`. A context is one judge server
//! plus the credentials last obtained against it; the persisted
//! session is what lets `oj whoami` re-authenticate after a restart.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use oj_client::Session;

/// Bump when the persisted shape changes incompatibly.
pub const CONFIG_VERSION: u32 = 1;

/// A single context — connection to one judge deployment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Context {
    /// Context name (e.g. "campus-prod").
    pub name: String,

    /// Server API base URL (e.g. "http://judge.example.com/api").
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub server: String,

    /// Auth token (set by `oj login`), sent verbatim in `Authorization`.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub token: String,

    /// Last known session payload, for offline `whoami` hints and
    /// startup re-authentication.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session: Option<Session>,
}

/// Client configuration file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Schema version of this file.
    #[serde(default = "default_version")]
    pub version: u32,

    /// Name of the currently active context.
    #[serde(rename = "current-context", default)]
    pub current_context: String,

    /// List of configured contexts.
    #[serde(default)]
    pub contexts: Vec<Context>,
}

fn default_version() -> u32 {
    CONFIG_VERSION
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            current_context: String::new(),
            contexts: Vec::new(),
        }
    }
}

impl ClientConfig {
    /// Default config file path: ~/.oj/config.toml.
    pub fn default_path() -> PathBuf {
        let home = std::env::var("HOME")
            .or_else(|_| std::env::var("USERPROFILE"))
            .unwrap_or_else(|_| ".".to_string());
        PathBuf::from(home).join(".oj").join("config.toml")
    }

    /// Load config from disk, or return default if the file doesn't exist.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: ClientConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save config to disk.
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Get the currently active context, if any.
    pub fn current(&self) -> Option<&Context> {
        self.contexts.iter().find(|c| c.name == self.current_context)
    }

    /// Get a mutable reference to a context by name.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Context> {
        self.contexts.iter_mut().find(|c| c.name == name)
    }

    /// Add or update a context.
    pub fn upsert_context(&mut self, ctx: Context) {
        if let Some(existing) = self.get_mut(&ctx.name) {
            *existing = ctx;
        } else {
            self.contexts.push(ctx);
        }
    }

    /// Remove a context by name. Returns true if it was found.
    pub fn remove_context(&mut self, name: &str) -> bool {
        let len = self.contexts.len();
        self.contexts.retain(|c| c.name != name);
        if self.current_context == name {
            self.current_context = String::new();
        }
        self.contexts.len() < len
    }

    /// Drop the current context's credentials (token and session).
    pub fn clear_credentials(&mut self) {
        let name = self.current_context.clone();
        if let Some(ctx) = self.get_mut(&name) {
            ctx.token = String::new();
            ctx.session = None;
        }
    }
}
