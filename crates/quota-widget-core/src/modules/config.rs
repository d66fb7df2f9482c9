use std::fs;
use std::path::{Path, PathBuf};

use quota_widget_types::{AppConfig, ConfigError};

use crate::utils::paths::get_data_dir;

const CONFIG_FILE: &str = "config.json";

/// Default config location inside the data directory.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    let data_dir = get_data_dir().map_err(|message| ConfigError::WriteError { message })?;
    Ok(data_dir.join(CONFIG_FILE))
}

/// Load configuration from `path`, or from the data directory when `None`.
///
/// A missing file yields defaults; a present but invalid file is an error.
pub fn load_config(path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let config_path = match path {
        Some(p) => p.to_path_buf(),
        None => default_config_path()?,
    };

    if !config_path.exists() {
        if path.is_some() {
            return Err(ConfigError::NotFound { path: config_path.display().to_string() });
        }
        tracing::debug!("[Config] {} not found, using defaults", config_path.display());
        return Ok(AppConfig::new());
    }

    let content = fs::read_to_string(&config_path).map_err(|e| ConfigError::ParseError {
        message: format!("{}: {}", config_path.display(), e),
    })?;
    let config: AppConfig =
        serde_json::from_str(&content).map_err(|e| ConfigError::from_json_error(&e))?;

    validate_config(&config)?;
    Ok(config)
}

/// Save configuration atomically (temp file + rename).
pub fn save_config(config: &AppConfig, path: Option<&Path>) -> Result<PathBuf, ConfigError> {
    validate_config(config)?;

    let config_path = match path {
        Some(p) => p.to_path_buf(),
        None => default_config_path()?,
    };
    let temp_path = config_path.with_extension("json.tmp");

    let content =
        serde_json::to_string_pretty(config).map_err(|e| ConfigError::from_json_error(&e))?;

    fs::write(&temp_path, content).map_err(|e| ConfigError::from_io_error(&e))?;
    fs::rename(&temp_path, &config_path).map_err(|e| ConfigError::from_io_error(&e))?;
    Ok(config_path)
}

/// Checks the loaded config beyond what deserialization already enforces
/// (group disjointness is checked by `GroupTable` itself).
pub fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    let url = url::Url::parse(&config.api_url)
        .map_err(|e| ConfigError::validation("api_url", e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::validation(
            "api_url",
            format!("unsupported scheme '{}'", url.scheme()),
        ));
    }

    if config.refresh_interval_secs < AppConfig::MIN_REFRESH_INTERVAL_SECS {
        return Err(ConfigError::validation(
            "refresh_interval_secs",
            format!("must be at least {}", AppConfig::MIN_REFRESH_INTERVAL_SECS),
        ));
    }

    if config.request_timeout_secs == 0 {
        return Err(ConfigError::validation("request_timeout_secs", "must be positive"));
    }

    if config.layout.grid_card_width == 0 || config.layout.grid_card_height == 0 {
        return Err(ConfigError::validation("layout", "card dimensions must be positive"));
    }

    Ok(())
}
