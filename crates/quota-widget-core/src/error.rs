//! Unified error types for Quota Widget Core.

use quota_widget_types::ConfigError;
use serde::Serialize;
use thiserror::Error;

/// Main error type for everything outside the pure engine.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum AppError {
    /// Credential store read failed (SQLite).
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// Network request failed (HTTP client).
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// File system I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration loading or validation failed.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// No credential store or no token inside it.
    #[error("No access token available")]
    NoToken,

    /// Quota endpoint answered with a non-success status.
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// Unclassified error with message.
    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl AppError {
    /// Short text for the dashboard's error state.
    pub fn display_message(&self) -> String {
        match self {
            Self::NoToken => "Login required".to_string(),
            Self::Http { status, .. } => format!("Error {}", status),
            Self::Network(_) => "Network error".to_string(),
            Self::Config(e) => e.to_string(),
            _ => "Unexpected error".to_string(),
        }
    }
}

impl Serialize for AppError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.to_string().as_str())
    }
}

/// Result type alias for Quota Widget operations.
pub type AppResult<T> = Result<T, AppError>;

impl From<String> for AppError {
    fn from(s: String) -> Self {
        AppError::Unknown(s)
    }
}
