//! HTTP client construction.

use reqwest::Client;
use std::time::Duration;

/// User agent the quota endpoint expects from the IDE plugin.
pub const USER_AGENT: &str = "antigravity";

/// Create HTTP client with the given request timeout.
pub fn create_client(timeout_secs: u64) -> Result<Client, String> {
    base_builder(timeout_secs).build().map_err(|e| format!("HTTP client builder failed: {e}"))
}

/// Shared builder with keepalive settings.
fn base_builder(timeout_secs: u64) -> reqwest::ClientBuilder {
    Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .connect_timeout(Duration::from_secs(timeout_secs.min(5)))
        .tcp_nodelay(true)
        .user_agent(USER_AGENT)
}
