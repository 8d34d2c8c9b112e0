//! Configuration loader
//!
//! Loads client configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. If incomplete, falls back to loading from file
//! 3. Probes multiple paths for config files
//! 4. Supports JSON and TOML formats
//!
//! ## Environment Variables
//! - `COWORK_ADMIN_API_KEY`: Admin API key (required)
//! - `COWORK_ADMIN_BASE_URL`: Admin API base URL
//! - `COWORK_HTTP_TIMEOUT_SECS`: Request timeout in seconds
//! - `COWORK_ACCEPT_INVALID_CERTS`: Skip TLS verification for these clients
//!   (true/false)
//! - `COWORK_APP_PUBLIC_KEY` / `COWORK_APP_SECRET_KEY`: Marketplace
//!   application keys (both or neither)
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./cowork.json` or `./cowork.toml` (current working directory)
//! 2. `./config.json` or `./config.toml` (current working directory)
//! 3. `../config.json` or `../config.toml` (parent directory)
//! 4. `../../config.json` or `../../config.toml` (grandparent directory)
//! 5. Relative to executable location

use std::path::{Path, PathBuf};

use cowork_domain::{AdminApiConfig, ApplicationConfig, Config, CoworkError, Result};

/// Load configuration with automatic fallback strategy
///
/// First attempts to load from environment variables. If any required
/// variables are missing, falls back to loading from a config file.
///
/// # Errors
/// Returns `CoworkError::Config` if:
/// - Configuration cannot be loaded from either source
/// - File format is invalid
/// - Required fields are missing
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
/// Only the admin API key is required; everything else has defaults. The
/// member portal is per-user and is never configured from the environment.
///
/// # Errors
/// Returns `CoworkError::Config` if required variables are missing or have
/// invalid values.
pub fn load_from_env() -> Result<Config> {
    let mut admin = AdminApiConfig::new(env_var("COWORK_ADMIN_API_KEY")?);

    if let Ok(base_url) = std::env::var("COWORK_ADMIN_BASE_URL") {
        admin.base_url = base_url;
    }

    if let Ok(timeout) = std::env::var("COWORK_HTTP_TIMEOUT_SECS") {
        admin.timeout_secs = timeout
            .parse::<u64>()
            .map_err(|e| CoworkError::Config(format!("Invalid HTTP timeout: {}", e)))?;
    }

    admin.accept_invalid_certs = env_bool("COWORK_ACCEPT_INVALID_CERTS", false);

    let application = match (
        std::env::var("COWORK_APP_PUBLIC_KEY").ok(),
        std::env::var("COWORK_APP_SECRET_KEY").ok(),
    ) {
        (Some(public_key), Some(secret_key)) => Some(ApplicationConfig { public_key, secret_key }),
        (None, None) => None,
        _ => {
            return Err(CoworkError::Config(
                "COWORK_APP_PUBLIC_KEY and COWORK_APP_SECRET_KEY must be set together".to_string(),
            ))
        }
    };

    Ok(Config { admin, public: None, application })
}

/// Load configuration from a file
///
/// If `path` is `None`, probes multiple locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
///
/// # Arguments
/// * `path` - Optional path to config file. If `None`, uses
///   [`probe_config_paths`].
///
/// # Errors
/// Returns `CoworkError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
/// - Required fields are missing
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(CoworkError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            CoworkError::Config("No config file found in any of the standard locations".to_string())
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| CoworkError::Config(format!("Failed to read config file: {}", e)))?;

    parse_config(&contents, &config_path)
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.json` or `.toml`).
///
/// # Errors
/// Returns `CoworkError::Config` if format is invalid or parsing fails.
fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| CoworkError::Config(format!("Invalid TOML format: {}", e))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| CoworkError::Config(format!("Invalid JSON format: {}", e))),
        _ => Err(CoworkError::Config(format!("Unsupported config format: {}", extension))),
    }
}

/// Probe multiple paths for configuration files
///
/// Searches for config files in the following locations (in order):
/// 1. Current working directory (`./cowork.{json,toml}`,
///    `./config.{json,toml}`)
/// 2. Parent directories (up to 2 levels)
/// 3. Relative to executable location
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut candidates = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        candidates.extend(candidates_in(&cwd));
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            candidates.extend(candidates_in(exe_dir));
        }
    }

    candidates.into_iter().find(|path| path.exists())
}

fn candidates_in(dir: &Path) -> Vec<PathBuf> {
    vec![
        dir.join("cowork.json"),
        dir.join("cowork.toml"),
        dir.join("config.json"),
        dir.join("config.toml"),
        dir.join("../config.json"),
        dir.join("../config.toml"),
        dir.join("../../config.json"),
        dir.join("../../config.toml"),
    ]
}

/// Get required environment variable
///
/// # Errors
/// Returns `CoworkError::Config` if the variable is not set.
fn env_var(key: &str) -> Result<String> {
    std::env::var(key)
        .map_err(|_| CoworkError::Config(format!("Missing required environment variable: {}", key)))
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
