use crate::app_config::{AppConfig, DEFAULT_USER_AGENT};
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
/// Every setting has a default, so only malformed values fail.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;
    use std::str::FromStr;

    fn parse_as<T>(var: &str, raw: &str) -> Result<T, ConfigError>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        raw.trim()
            .parse::<T>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    }

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let positive_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let value: usize = parse_as(var, &or_default(var, default))?;
        if value == 0 {
            return Err(ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: "must be greater than zero".to_string(),
            });
        }
        Ok(value)
    };

    let feeds_path = PathBuf::from(or_default("MARKETDASH_FEEDS_PATH", "./config/feeds.yaml"));
    let output_path = PathBuf::from(or_default("MARKETDASH_OUTPUT_PATH", "index.html"));
    let log_level = or_default("MARKETDASH_LOG_LEVEL", "info");
    let user_agent = or_default("MARKETDASH_USER_AGENT", DEFAULT_USER_AGENT);

    let request_timeout_secs: u64 = parse_as(
        "MARKETDASH_REQUEST_TIMEOUT_SECS",
        &or_default("MARKETDASH_REQUEST_TIMEOUT_SECS", "8"),
    )?;
    let max_per_category = positive_usize("MARKETDASH_MAX_PER_CATEGORY", "10")?;
    let max_per_source = positive_usize("MARKETDASH_MAX_PER_SOURCE", "20")?;

    let display_utc_offset_minutes: i32 = parse_as(
        "MARKETDASH_DISPLAY_UTC_OFFSET_MINUTES",
        &or_default("MARKETDASH_DISPLAY_UTC_OFFSET_MINUTES", "330"),
    )?;
    if display_utc_offset_minutes.abs() >= 24 * 60 {
        return Err(ConfigError::InvalidEnvVar {
            var: "MARKETDASH_DISPLAY_UTC_OFFSET_MINUTES".to_string(),
            reason: "offset must be within +/- 24 hours".to_string(),
        });
    }

    Ok(AppConfig {
        feeds_path,
        output_path,
        log_level,
        request_timeout_secs,
        user_agent,
        max_per_category,
        max_per_source,
        display_utc_offset_minutes,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
