//! Context management commands.

use std::path::Path;

use anyhow::Result;

use crate::config::{ClientConfig, Context};

/// Create a new context and make it current if none is.
pub fn create(name: &str, server: Option<&str>, config_path: &Path) -> Result<()> {
    let mut config = ClientConfig::load(config_path)?;

    if config.get_mut(name).is_some() {
        anyhow::bail!("Context \"{}\" already exists.", name);
    }

    config.upsert_context(Context {
        name: name.to_string(),
        server: server.unwrap_or_default().to_string(),
        token: String::new(),
        session: None,
    });
    if config.current_context.is_empty() {
        config.current_context = name.to_string();
    }
    config.save(config_path)?;

    println!("Context \"{}\" created.", name);
    Ok(())
}

/// List all contexts; the current one is marked with `*`.
pub fn list(config_path: &Path) -> Result<()> {
    let config = ClientConfig::load(config_path)?;

    if config.contexts.is_empty() {
        println!("No contexts. Run `oj context create <name> --server <url>`.");
        return Ok(());
    }

    println!("{:<3}{:<20}{:<40}{}", "", "NAME", "SERVER", "LOGGED IN");
    for ctx in &config.contexts {
        let marker = if ctx.name == config.current_context { "*" } else { "" };
        let logged_in = if ctx.token.is_empty() { "no" } else { "yes" };
        println!("{:<3}{:<20}{:<40}{}", marker, ctx.name, ctx.server, logged_in);
    }
    Ok(())
}

/// Set properties on an existing context.
pub fn set(name: &str, server: Option<&str>, config_path: &Path) -> Result<()> {
    let mut config = ClientConfig::load(config_path)?;

    let ctx = config
        .get_mut(name)
        .ok_or_else(|| anyhow::anyhow!("Context \"{}\" not found.", name))?;
    if let Some(server) = server {
        ctx.server = server.trim_end_matches('/').to_string();
    }
    config.save(config_path)?;

    println!("Context \"{}\" updated.", name);
    Ok(())
}

/// Delete a context.
pub fn delete(name: &str, config_path: &Path) -> Result<()> {
    let mut config = ClientConfig::load(config_path)?;

    if !config.remove_context(name) {
        anyhow::bail!("Context \"{}\" not found.", name);
    }
    config.save(config_path)?;

    println!("Context \"{}\" deleted.", name);
    Ok(())
}

/// Switch the current context.
pub fn use_context(name: &str, config_path: &Path) -> Result<()> {
    let mut config = ClientConfig::load(config_path)?;

    if config.get_mut(name).is_none() {
        anyhow::bail!("Context \"{}\" not found.", name);
    }
    config.current_context = name.to_string();
    config.save(config_path)?;

    println!("Switched to context \"{}\".", name);
    Ok(())
}
