//! Application-level configuration.

use serde::{Deserialize, Serialize};

use super::groups::GroupTable;
use super::layout::LayoutConstants;
use super::naming::NameRewriteRules;

pub const DEFAULT_API_URL: &str =
    "https://cloudcode-pa.googleapis.com/v1internal:fetchAvailableModels";

/// Full application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Dashboard title shown above the grid
    pub title: String,
    /// Quota endpoint
    pub api_url: String,
    /// Poll interval in seconds
    pub refresh_interval_secs: u64,
    /// HTTP request timeout in seconds
    pub request_timeout_secs: u64,
    /// Explicit credential store paths; the built-in candidates are used when empty
    pub credential_paths: Vec<String>,
    /// Model groups shown as cards
    pub groups: GroupTable,
    /// Dashboard geometry
    pub layout: LayoutConstants,
    /// Cosmetic rewrites for ungrouped model names
    pub name_rewrites: NameRewriteRules,
}

impl AppConfig {
    pub const MIN_REFRESH_INTERVAL_SECS: u64 = 30;

    /// Create default configuration.
    pub fn new() -> Self {
        Self {
            title: "Antigravity Model Quota".to_string(),
            api_url: DEFAULT_API_URL.to_string(),
            refresh_interval_secs: 300,
            request_timeout_secs: 10,
            credential_paths: Vec::new(),
            groups: GroupTable::default(),
            layout: LayoutConstants::default(),
            name_rewrites: NameRewriteRules::default(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}
