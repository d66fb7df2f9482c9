use std::fs;
use std::path::PathBuf;

const DATA_DIR: &str = ".quota_widget";

/// Editor profiles whose global storage may hold the Antigravity login state,
/// relative to the platform config directory, in lookup order.
const STATE_DB_PROFILES: &[&str] = &[
    "Antigravity",
    "Google/Antigravity",
    "Google/Cloud Code",
    "Code",
    "Code - Insiders",
    "VSCodium",
    "Cursor",
    "Windsurf",
];

const STATE_DB_SUFFIX: &str = "User/globalStorage/state.vscdb";

/// Get data directory path.
///
/// Priority:
/// 1. `QUOTA_WIDGET_DATA_DIR` environment variable
/// 2. `~/.quota_widget`
pub fn get_data_dir() -> Result<PathBuf, String> {
    let data_dir = if let Ok(custom_dir) = std::env::var("QUOTA_WIDGET_DATA_DIR") {
        PathBuf::from(custom_dir)
    } else {
        let home = dirs::home_dir().ok_or("Failed to resolve home directory")?;
        home.join(DATA_DIR)
    };

    if !data_dir.exists() {
        fs::create_dir_all(&data_dir)
            .map_err(|e| format!("Failed to create data directory: {}", e))?;
    }

    Ok(data_dir)
}

/// Candidate `state.vscdb` locations under the platform config directory
/// (`%APPDATA%` on Windows, `~/Library/Application Support` on macOS,
/// `~/.config` elsewhere).
pub fn default_state_db_candidates() -> Vec<PathBuf> {
    let Some(config_dir) = dirs::config_dir() else {
        return Vec::new();
    };
    STATE_DB_PROFILES
        .iter()
        .map(|profile| config_dir.join(profile).join(STATE_DB_SUFFIX))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidates_end_with_state_db() {
        for path in default_state_db_candidates() {
            assert!(path.ends_with("User/globalStorage/state.vscdb"), "{:?}", path);
        }
    }
}
