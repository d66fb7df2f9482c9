//! Quota Widget - terminal dashboard
//!
//! Polls the Antigravity `fetchAvailableModels` endpoint with the token found
//! in the local editor state, and shows per-group worst-case quota cards plus
//! an "Other Models" list.

use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;

mod cli;
mod commands;
mod config_commands;
mod render;

use cli::{Cli, Commands, ConfigCommands};
use quota_widget_core::modules::config::load_config;
use quota_widget_core::modules::logger::{init_logger, LogTarget};
use quota_widget_core::utils::paths::get_data_dir;
use quota_widget_types::AppConfig;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Watch { interval: None });

    // watch owns the terminal, so its logs go to a file
    let log_dir = match &command {
        Commands::Watch { .. } => get_data_dir().ok().map(|dir| dir.join("logs")),
        _ => None,
    };
    let _log_guard = match log_dir.as_deref() {
        Some(dir) if std::fs::create_dir_all(dir).is_ok() => {
            init_logger(&cli.log_level, LogTarget::File(dir))
        },
        _ => init_logger(&cli.log_level, LogTarget::Stderr),
    };

    let config_path = cli.config.as_deref();
    match command {
        Commands::Watch { interval } => {
            commands::handle_watch(&load(config_path)?, interval, cli.json).await
        },
        Commands::Once => commands::handle_once(&load(config_path)?, cli.json).await,
        Commands::Config(ConfigCommands::Show) => {
            config_commands::show_config(&load(config_path)?, cli.json)
        },
        Commands::Config(ConfigCommands::Path) => config_commands::show_path(config_path),
        Commands::Config(ConfigCommands::Init { force }) => {
            config_commands::init_config(config_path, force)
        },
    }
}

fn load(path: Option<&Path>) -> Result<AppConfig> {
    let config = load_config(path).context("Failed to load configuration")?;
    tracing::debug!("[Main] Loaded config, {} groups", config.groups.groups().len());
    Ok(config)
}
