use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

/// Default product feed published alongside the storefront repository.
pub const DEFAULT_CATALOG_URL: &str = "https://raw.githubusercontent.com/sherow1982/Kuwait-matjar/refs/heads/main/data/products-template.json?raw=1";

/// Default public root of the static storefront.
pub const DEFAULT_STORE_BASE_URL: &str = "https://sherow1982.github.io/Kuwait-matjar/";

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
/// Every variable has a default, so an empty environment yields a working
/// config pointed at the public feed.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<usize>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let http_url = |var: &str, default: &str| -> Result<String, ConfigError> {
        let raw = or_default(var, default);
        if raw.starts_with("https://") || raw.starts_with("http://") {
            Ok(raw)
        } else {
            Err(ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: format!("\"{raw}\" is not an http(s) URL"),
            })
        }
    };

    let env = parse_environment(&or_default("MATJAR_ENV", "development"))?;
    let log_level = or_default("MATJAR_LOG_LEVEL", "info");
    let catalog_url = http_url("MATJAR_CATALOG_URL", DEFAULT_CATALOG_URL)?;
    let request_timeout_secs = parse_u64("MATJAR_REQUEST_TIMEOUT_SECS", "30")?;
    let user_agent = or_default("MATJAR_USER_AGENT", "matjar/0.1 (storefront-catalog)");

    let suggestion_limit = parse_usize("MATJAR_SUGGESTION_LIMIT", "5")?;
    if suggestion_limit == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "MATJAR_SUGGESTION_LIMIT".to_string(),
            reason: "must be at least 1".to_string(),
        });
    }

    let store_base_url = http_url("MATJAR_STORE_BASE_URL", DEFAULT_STORE_BASE_URL)?;
    let whatsapp_number = lookup("MATJAR_WHATSAPP_NUMBER")
        .ok()
        .filter(|v| !v.trim().is_empty());

    Ok(AppConfig {
        env,
        log_level,
        catalog_url,
        request_timeout_secs,
        user_agent,
        suggestion_limit,
        store_base_url,
        whatsapp_number,
    })
}

/// Parse a string into an `Environment` variant.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "MATJAR_ENV".to_string(),
            reason: format!("unknown environment \"{other}\""),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
