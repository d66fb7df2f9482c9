//! Reads the Antigravity access token from a local editor state database.

use std::fs;
use std::path::{Path, PathBuf};

use rusqlite::types::Value as SqlValue;
use rusqlite::{Connection, OpenFlags, OptionalExtension};
use quota_widget_types::AppConfig;

use crate::error::AppResult;
use crate::utils::paths::default_state_db_candidates;

/// `ItemTable` keys holding the auth state JSON, in lookup order.
const AUTH_STATE_KEYS: &[&str] = &["antigravityAuthStatus", "google.antigravity"];

/// Source of the bearer token for the quota endpoint.
///
/// `Ok(None)` means "no token available" (not logged in, no store found).
pub trait TokenProvider: Send + Sync {
    fn load_token(&self) -> AppResult<Option<String>>;
}

/// Looks through candidate `state.vscdb` files and reads the first one found.
#[derive(Debug, Clone)]
pub struct StateDbTokenProvider {
    candidates: Vec<PathBuf>,
}

impl StateDbTokenProvider {
    pub fn new(candidates: Vec<PathBuf>) -> Self {
        Self { candidates }
    }

    /// Configured paths when present, otherwise the built-in editor profiles.
    pub fn from_config(config: &AppConfig) -> Self {
        if config.credential_paths.is_empty() {
            Self::new(default_state_db_candidates())
        } else {
            Self::new(config.credential_paths.iter().map(PathBuf::from).collect())
        }
    }

    pub fn find_state_db(&self) -> Option<&Path> {
        self.candidates.iter().map(PathBuf::as_path).find(|p| p.exists())
    }
}

impl TokenProvider for StateDbTokenProvider {
    fn load_token(&self) -> AppResult<Option<String>> {
        let Some(db_path) = self.find_state_db() else {
            tracing::debug!("[TokenStore] no state database among {} candidates", self.candidates.len());
            return Ok(None);
        };
        tracing::debug!("[TokenStore] reading {}", db_path.display());
        extract_token_from_file(db_path)
    }
}

/// Extract the `apiKey` from a state database.
///
/// The editor keeps the live file open, so it is copied into a temporary
/// directory and the copy is opened read-only.
pub fn extract_token_from_file(db_path: &Path) -> AppResult<Option<String>> {
    let temp_dir = tempfile::tempdir()?;
    let snapshot = temp_dir.path().join("state.vscdb");
    fs::copy(db_path, &snapshot)?;

    let conn = Connection::open_with_flags(&snapshot, OpenFlags::SQLITE_OPEN_READ_ONLY)?;

    for key in AUTH_STATE_KEYS {
        match read_item(&conn, key) {
            Ok(Some(raw)) => {
                if let Some(token) = api_key_from_json(&raw) {
                    return Ok(Some(token));
                }
                tracing::debug!("[TokenStore] '{}' has no apiKey", key);
            },
            Ok(None) => {},
            Err(e) => {
                tracing::debug!("[TokenStore] failed to read '{}': {}", key, e);
            },
        }
    }

    Ok(None)
}

fn read_item(conn: &Connection, key: &str) -> rusqlite::Result<Option<String>> {
    let value: Option<SqlValue> = conn
        .query_row("SELECT value FROM ItemTable WHERE key = ?", [key], |row| row.get(0))
        .optional()?;

    Ok(match value {
        Some(SqlValue::Text(text)) => Some(text),
        Some(SqlValue::Blob(bytes)) => String::from_utf8(bytes).ok(),
        _ => None,
    })
}

fn api_key_from_json(raw: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(raw).ok()?;
    value
        .get("apiKey")
        .and_then(serde_json::Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
