use std::net::IpAddr;

use crate::app_config::AppConfig;
use crate::ConfigError;

pub const DEFAULT_PORT: u16 = 3000;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but cannot be parsed.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but cannot be parsed.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the process environment so tests can use a plain `HashMap`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let port = or_default("PORT", &DEFAULT_PORT.to_string())
        .trim()
        .parse::<u16>()
        .map_err(|e| invalid("PORT", e.to_string()))?;

    let bind_host = or_default("VIDSUM_BIND_HOST", "0.0.0.0")
        .trim()
        .parse::<IpAddr>()
        .map_err(|e| invalid("VIDSUM_BIND_HOST", e.to_string()))?;

    let log_level = or_default("VIDSUM_LOG_LEVEL", "info");

    Ok(AppConfig {
        bind_host,
        port,
        log_level,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
