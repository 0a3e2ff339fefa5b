use reqwest::Url;

use crate::app_config::{
    AppConfig, DEFAULT_JUSO_ENDPOINT, DEFAULT_USER_AGENT, DEFAULT_VWORLD_ENDPOINT,
};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
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
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so it can be tested with a plain
/// `HashMap` lookup, without `set_var`/`remove_var`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    // An empty value counts as unset, same as the services treat a blank key.
    let optional = |var: &str| -> Option<String> {
        lookup(var)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    };

    let parse_optional_u64 = |var: &str| -> Result<Option<u64>, ConfigError> {
        optional(var)
            .map(|raw| {
                raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
                    var: var.to_string(),
                    reason: e.to_string(),
                })
            })
            .transpose()
    };

    let parse_url = |var: &str, default: &str| -> Result<String, ConfigError> {
        let raw = or_default(var, default);
        Url::parse(&raw).map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })?;
        Ok(raw)
    };

    let juso_confirm_key = optional("JUSO_CONFIRM_KEY");
    let log_level = or_default("KRADDR_LOG_LEVEL", "info");
    let request_timeout_secs = parse_optional_u64("KRADDR_REQUEST_TIMEOUT_SECS")?;
    let user_agent = or_default("KRADDR_USER_AGENT", DEFAULT_USER_AGENT);
    let juso_endpoint = parse_url("KRADDR_JUSO_ENDPOINT", DEFAULT_JUSO_ENDPOINT)?;
    let vworld_endpoint = parse_url("KRADDR_VWORLD_ENDPOINT", DEFAULT_VWORLD_ENDPOINT)?;

    Ok(AppConfig {
        juso_confirm_key,
        log_level,
        request_timeout_secs,
        user_agent,
        juso_endpoint,
        vworld_endpoint,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
