//! Login / logout / whoami commands.

use std::path::Path;

use anyhow::Result;

use oj_api::user;
use oj_core::Authority;

use crate::config::ClientConfig;

/// Login to the current context's server and persist the session.
pub async fn login(account: &str, password: &str, config_path: &Path) -> Result<()> {
    let (gateway, _store) = super::build_gateway(config_path)?;

    let resp = user::login(
        &gateway,
        &user::LoginParams {
            account: account.to_string(),
            password: password.to_string(),
        },
    )
    .await?;

    if !resp.is_business_success() {
        anyhow::bail!("Login failed: {}", resp.message);
    }
    let profile = resp
        .into_data()
        .ok_or_else(|| anyhow::anyhow!("No session payload in login response."))?;

    let mut config = ClientConfig::load(config_path)?;
    let name = config.current_context.clone();
    let ctx = config
        .get_mut(&name)
        .ok_or_else(|| anyhow::anyhow!("Current context not found."))?;
    ctx.token = profile.token.clone();
    ctx.session = Some(profile.clone());
    config.save(config_path)?;

    println!("Logged in as {}.", profile.nickname);
    println!("Token saved to context \"{}\".", name);
    Ok(())
}

/// Logout — tell the server, then clear local credentials either way.
pub async fn logout(config_path: &Path) -> Result<()> {
    match super::build_gateway(config_path) {
        Ok((gateway, store)) => {
            if store.token().is_some() {
                if let Err(err) = user::logout(&gateway).await {
                    tracing::warn!(error = %err, "server logout failed, clearing locally");
                }
            }
            store.logout();
        }
        Err(err) => tracing::warn!(error = %err, "no usable context, clearing locally"),
    }

    let mut config = ClientConfig::load(config_path)?;
    if config.current_context.is_empty() {
        anyhow::bail!("No current context.");
    }
    let name = config.current_context.clone();
    config.clear_credentials();
    config.save(config_path)?;

    println!("Logged out from context \"{}\".", name);
    Ok(())
}

/// Re-authenticate with the persisted token and show who we are.
pub async fn whoami(config_path: &Path) -> Result<()> {
    let (gateway, store) = super::build_gateway(config_path)?;

    if store.token().is_none() {
        println!("Not logged in. Run `oj login`.");
        return Ok(());
    }

    let resp = user::reauth(&gateway).await?;
    if !resp.is_business_success() {
        // The pipeline already ended the session and dropped the
        // persisted credentials.
        return Ok(());
    }
    let profile = resp
        .into_data()
        .ok_or_else(|| anyhow::anyhow!("No session payload in re-auth response."))?;

    let role = match profile.authority {
        Authority::Guest => "guest",
        Authority::Ordinary => "user",
        Authority::Administrator => "admin",
    };
    println!("{:<12}{}", "ID", profile.user_id);
    println!("{:<12}{}", "NICKNAME", profile.nickname);
    println!("{:<12}{}", "ROLE", role);
    println!("{:<12}{}", "SOLVED", profile.solves.len());

    // Refresh the persisted snapshot with what the server says now.
    let mut config = ClientConfig::load(config_path)?;
    let name = config.current_context.clone();
    if let Some(ctx) = config.get_mut(&name) {
        ctx.session = Some(profile);
        config.save(config_path)?;
    }
    Ok(())
}
