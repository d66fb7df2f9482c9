use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "quota-widget",
    about = "Quota Widget - Antigravity model quota dashboard",
    version = env!("CARGO_PKG_VERSION"),
    author,
    propagate_version = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[arg(short, long, global = true, env = "RUST_LOG", default_value = "info")]
    pub log_level: String,

    #[arg(short, long, global = true, env = "QUOTA_WIDGET_CONFIG", help = "Path to config.json")]
    pub config: Option<PathBuf>,

    #[arg(long, global = true, help = "Output view-model and layout as JSON")]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Live dashboard, press Enter to refresh (default if no command specified)")]
    Watch {
        #[arg(short, long, help = "Poll interval in seconds (overrides config)")]
        interval: Option<u64>,
    },

    #[command(about = "Poll once, print the dashboard and exit")]
    Once,

    #[command(subcommand, about = "View and initialize configuration")]
    Config(ConfigCommands),
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    #[command(about = "Show current configuration")]
    Show,

    #[command(about = "Print the config file location")]
    Path,

    #[command(about = "Write a default config file")]
    Init {
        #[arg(long, help = "Overwrite an existing file")]
        force: bool,
    },
}
