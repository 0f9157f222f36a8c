//! Configuration loader
//!
//! Loads bridge configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. If `FIC_API_BASE_URL` is unset, falls back to loading from file
//! 3. Probes multiple paths for config files
//! 4. Supports JSON and TOML formats
//!
//! ## Environment Variables
//! - `FIC_API_BASE_URL`: API base URL (required for environment mode)
//! - `FIC_HTTP_TIMEOUT_SECS`: Request timeout in seconds
//! - `FIC_USER_AGENT`: User agent sent with every request
//! - `FIC_LOG_LEVEL`: Tracing filter directive
//! - `FIC_LOG_JSON`: Emit JSON log lines (true/false)
//! - `FIC_FAILURE_POLICY`: `failFast` or `continue`
//! - `FIC_DEFAULT_LIMIT`: List limit for items that do not set one
//!
//! ## File Locations
//! The loader probes `ficbridge.{json,toml}` then `config.{json,toml}` in
//! the current working directory, then next to the executable.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use ficbridge_domain::constants::MIN_LIST_LIMIT;
use ficbridge_domain::{BridgeError, Config, FailurePolicy, Result};

use crate::errors::InfraError;

const CONFIG_FILE_NAMES: &[&str] =
    &["ficbridge.json", "ficbridge.toml", "config.json", "config.toml"];

/// Load configuration with automatic fallback strategy
///
/// First attempts to load from environment variables. If the required
/// variable is missing, falls back to loading from a config file.
///
/// # Errors
/// Returns `BridgeError::Config` if:
/// - Configuration cannot be loaded from either source
/// - File format is invalid
/// - A variable or field has an invalid value
pub fn load() -> Result<Config> {
    match load_from_env() {
        Ok(config) => {
            tracing::info!("Configuration loaded from environment variables");
            Ok(config)
        }
        Err(e) => {
            tracing::debug!(error = ?e, "Failed to load from environment, trying file");
            load_from_file(None)
        }
    }
}

/// Load configuration from environment variables
///
/// `FIC_API_BASE_URL` must be present; every other variable falls back to
/// its default.
///
/// # Errors
/// Returns `BridgeError::Config` if the base URL is missing or a variable
/// has an invalid value.
pub fn load_from_env() -> Result<Config> {
    let mut config = Config::default();

    config.api.base_url = env_var("FIC_API_BASE_URL")?;
    if let Some(timeout) = env_parse::<u64>("FIC_HTTP_TIMEOUT_SECS")? {
        config.api.timeout_secs = timeout;
    }
    if let Ok(agent) = std::env::var("FIC_USER_AGENT") {
        config.api.user_agent = agent;
    }

    if let Ok(level) = std::env::var("FIC_LOG_LEVEL") {
        config.logging.level = level;
    }
    config.logging.json = env_bool("FIC_LOG_JSON", config.logging.json);

    if let Ok(policy) = std::env::var("FIC_FAILURE_POLICY") {
        config.execution.failure_policy =
            FailurePolicy::from_str(&policy).map_err(BridgeError::Config)?;
    }
    if let Some(limit) = env_parse::<usize>("FIC_DEFAULT_LIMIT")? {
        config.execution.default_limit = limit;
    }

    validate(config)
}

/// Load configuration from a file
///
/// If `path` is `None`, probes multiple locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
/// Sections and fields left out of the file keep their defaults.
///
/// # Errors
/// Returns `BridgeError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(BridgeError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            BridgeError::Config("No config file found in any of the standard locations".to_string())
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents =
        std::fs::read_to_string(&config_path).map_err(|e| BridgeError::from(InfraError::from(e)))?;

    parse_config(&contents, &config_path).and_then(validate)
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.json` or `.toml`).
fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents).map_err(|e| InfraError::from(e).into()),
        "json" => serde_json::from_str(contents).map_err(|e| InfraError::from(e).into()),
        _ => Err(BridgeError::Config(format!("Unsupported config format: {extension}"))),
    }
}

fn validate(config: Config) -> Result<Config> {
    if config.api.base_url.trim().is_empty() {
        return Err(BridgeError::Config("API base URL must not be empty".into()));
    }
    if config.api.timeout_secs == 0 {
        return Err(BridgeError::Config("HTTP timeout must be greater than zero".into()));
    }
    if config.execution.default_limit < MIN_LIST_LIMIT {
        return Err(BridgeError::Config(format!(
            "Default list limit must be at least {MIN_LIST_LIMIT}"
        )));
    }
    Ok(config)
}

/// Probe multiple paths for configuration files
///
/// Searches the current working directory, then the executable's
/// directory, for `ficbridge.{json,toml}` and `config.{json,toml}`.
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut roots = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        roots.push(cwd);
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            roots.push(exe_dir.to_path_buf());
        }
    }

    roots
        .iter()
        .flat_map(|root| CONFIG_FILE_NAMES.iter().map(move |name| root.join(name)))
        .find(|path| path.exists())
}

/// Get required environment variable
fn env_var(key: &str) -> Result<String> {
    std::env::var(key)
        .map_err(|_| BridgeError::Config(format!("Missing required environment variable: {key}")))
}

/// Parse an optional environment variable; `None` when unset.
fn env_parse<T>(key: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    std::env::var(key)
        .ok()
        .map(|raw| {
            raw.trim()
                .parse::<T>()
                .map_err(|e| BridgeError::Config(format!("Invalid value for {key}: {e}")))
        })
        .transpose()
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
