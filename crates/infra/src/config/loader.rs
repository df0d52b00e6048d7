//! Configuration loader
//!
//! Loads application configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. If the required ones are missing, falls back to loading from file
//! 3. Probes multiple paths for config files
//! 4. Supports JSON and TOML formats
//!
//! Whatever the source, the result is validated before it is returned.
//!
//! ## Environment Variables
//! - `DEALBOARD_BITRIX_WEBHOOK_URL`: Bitrix24 inbound webhook base (required)
//! - `DEALBOARD_SALES_DEPARTMENT_IDS`: Comma-separated department ids (required)
//! - `DEALBOARD_BITRIX_ACCESS_TOKEN`: Bearer token sent with every call
//! - `DEALBOARD_CACHE_ENABLED`: Whether cached reports are served (true/false)
//! - `DEALBOARD_CACHE_EXPIRY`: Cache time to live in seconds
//! - `DEALBOARD_CACHE_DIR`: Directory for cache files
//! - `DEALBOARD_BIND_ADDRESS`: HTTP listen address
//! - `DEALBOARD_TIMEZONE`: IANA timezone that defines "today"
//! - `DEALBOARD_LOG_LEVEL`: Log filter when `RUST_LOG` is unset
//! - `DEALBOARD_LOG_JSON`: Emit JSON logs (true/false)
//! - `DEALBOARD_REQUEST_LOG_DIR`: Root of the request audit log
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./config.json` or `./config.toml` (current working directory)
//! 2. `./dealboard.json` or `./dealboard.toml` (current working directory)
//! 3. `../config.json` or `../config.toml` (parent directory)
//! 4. Relative to executable location

use std::path::{Path, PathBuf};

use dealboard_domain::{Config, DealboardError, Result};

use crate::errors::InfraError;

/// Load configuration with automatic fallback strategy
///
/// First attempts to load from environment variables. If any required
/// variables are missing, falls back to loading from a config file.
///
/// # Errors
/// Returns `DealboardError::Config` if:
/// - Configuration cannot be loaded from either source
/// - File format is invalid
/// - The loaded configuration fails validation
pub fn load() -> Result<Config> {
    let config = match load_from_env() {
        Ok(config) => {
            tracing::info!("Configuration loaded from environment variables");
            config
        }
        Err(e) => {
            tracing::debug!(error = ?e, "Failed to load from environment, trying file");
            load_from_file(None)?
        }
    };

    config.validate()?;
    Ok(config)
}

/// Load configuration from environment variables
///
/// The webhook URL and the sales department ids must be present; every
/// other setting falls back to its default.
///
/// # Errors
/// Returns `DealboardError::Config` if required variables are missing
/// or have invalid values.
pub fn load_from_env() -> Result<Config> {
    let webhook_url = env_var("DEALBOARD_BITRIX_WEBHOOK_URL")?;
    let department_ids = parse_department_ids(&env_var("DEALBOARD_SALES_DEPARTMENT_IDS")?)?;

    let mut config = Config::new(webhook_url, department_ids);

    config.bitrix.access_token = optional_env("DEALBOARD_BITRIX_ACCESS_TOKEN");

    config.cache.enabled = env_bool("DEALBOARD_CACHE_ENABLED", config.cache.enabled);
    if let Some(expiry) = optional_env("DEALBOARD_CACHE_EXPIRY") {
        config.cache.expiry_seconds = expiry.parse::<u64>().map_err(|e| {
            DealboardError::Config(format!("Invalid cache expiry '{expiry}': {e}"))
        })?;
        config.server.http_max_age_seconds = config.cache.expiry_seconds;
    }
    if let Some(dir) = optional_env("DEALBOARD_CACHE_DIR") {
        config.cache.directory = Some(PathBuf::from(dir));
    }

    if let Some(bind_address) = optional_env("DEALBOARD_BIND_ADDRESS") {
        config.server.bind_address = bind_address;
    }
    if let Some(timezone) = optional_env("DEALBOARD_TIMEZONE") {
        config.server.timezone = timezone;
    }

    if let Some(level) = optional_env("DEALBOARD_LOG_LEVEL") {
        config.logging.level = level;
    }
    config.logging.json = env_bool("DEALBOARD_LOG_JSON", config.logging.json);
    if let Some(dir) = optional_env("DEALBOARD_REQUEST_LOG_DIR") {
        config.logging.request_log_dir = PathBuf::from(dir);
    }

    Ok(config)
}

/// Load configuration from a file
///
/// If `path` is `None`, probes multiple locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
///
/// # Errors
/// Returns `DealboardError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
/// - Required fields are missing
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(DealboardError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            DealboardError::Config(
                "No config file found in any of the standard locations".to_string(),
            )
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| DealboardError::Config(format!("Failed to read config file: {e}")))?;

    parse_config(&contents, &config_path)
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.json` or `.toml`).
fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents).map_err(|e| InfraError::from(e).into()),
        "json" => serde_json::from_str(contents)
            .map_err(|e| DealboardError::Config(format!("Invalid JSON format: {e}"))),
        _ => Err(DealboardError::Config(format!("Unsupported config format: {extension}"))),
    }
}

/// Probe multiple paths for configuration files
///
/// Returns the first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    const NAMES: [&str; 6] = [
        "config.json",
        "config.toml",
        "dealboard.json",
        "dealboard.toml",
        "../config.json",
        "../config.toml",
    ];

    let mut candidates = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        candidates.extend(NAMES.iter().map(|name| cwd.join(name)));
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            candidates.extend(NAMES.iter().map(|name| exe_dir.join(name)));
        }
    }

    candidates.into_iter().find(|path| path.exists())
}

/// Parse `"7, 9,12"` into department ids.
fn parse_department_ids(raw: &str) -> Result<Vec<u64>> {
    raw.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| {
            part.parse::<u64>().map_err(|e| {
                DealboardError::Config(format!("Invalid department id '{part}': {e}"))
            })
        })
        .collect()
}

/// Get required environment variable
///
/// # Errors
/// Returns `DealboardError::Config` if the variable is not set.
fn env_var(key: &str) -> Result<String> {
    std::env::var(key).map_err(|_| {
        DealboardError::Config(format!("Missing required environment variable: {key}"))
    })
}

/// Optional environment variable; blank counts as unset.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.trim().is_empty())
}

/// Parse boolean from environment variable
///
/// Accepts: `1`/`0`, `true`/`false`, `yes`/`no`, `on`/`off` (case-insensitive)
fn env_bool(key: &str, default: bool) -> bool {
    std::env::var(key)
        .ok()
        .map(|s| matches!(s.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
        .unwrap_or(default)
}
