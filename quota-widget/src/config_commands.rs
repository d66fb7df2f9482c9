use std::path::Path;

use anyhow::{Context, Result};
use colored::Colorize;

use quota_widget_core::modules::config as core_config;
use quota_widget_types::AppConfig;

pub fn show_config(config: &AppConfig, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(config)?);
        return Ok(());
    }

    println!("{}", "Widget Configuration:".cyan().bold());
    println!("  Title: {}", config.title);
    println!("  API URL: {}", config.api_url);
    println!("  Refresh Interval: {}s", config.refresh_interval_secs);
    println!("  Request Timeout: {}s", config.request_timeout_secs);
    if config.credential_paths.is_empty() {
        println!("  Credential Store: auto-detect");
    } else {
        println!("  Credential Store: {}", config.credential_paths.join(", "));
    }

    println!("{}", "Groups:".cyan().bold());
    for group in config.groups.groups() {
        println!("  {} {}: {}", group.id.dimmed(), group.display_name, group.members.join(", "));
    }
    println!("  Name Rewrites: {}", config.name_rewrites.0.len());
    Ok(())
}

pub fn show_path(path: Option<&Path>) -> Result<()> {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => core_config::default_config_path()?,
    };
    println!("{}", path.display());
    Ok(())
}

pub fn init_config(path: Option<&Path>, force: bool) -> Result<()> {
    let target = match path {
        Some(p) => p.to_path_buf(),
        None => core_config::default_config_path()?,
    };
    if target.exists() && !force {
        anyhow::bail!("{} already exists (use --force to overwrite)", target.display());
    }

    let written = core_config::save_config(&AppConfig::default(), Some(&target))
        .context("Failed to write config")?;
    println!("{} Config written: {}", "✓".green(), written.display());
    Ok(())
}
