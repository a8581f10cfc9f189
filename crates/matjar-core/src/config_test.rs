use std::collections::HashMap;
use std::env::VarError;

use super::*;

fn lookup_from_map<'a>(
    map: &'a HashMap<&'a str, &'a str>,
) -> impl Fn(&str) -> Result<String, VarError> + 'a {
    move |key| {
        map.get(key)
            .map(|v| (*v).to_string())
            .ok_or(VarError::NotPresent)
    }
}

#[test]
fn parse_environment_development() {
    assert_eq!(
        parse_environment("development").unwrap(),
        Environment::Development
    );
}

#[test]
fn parse_environment_test() {
    assert_eq!(parse_environment("test").unwrap(), Environment::Test);
}

#[test]
fn parse_environment_production() {
    assert_eq!(
        parse_environment("production").unwrap(),
        Environment::Production
    );
}

#[test]
fn parse_environment_unknown_fails() {
    let err = parse_environment("unknown").unwrap_err();
    assert!(matches!(err, ConfigError::InvalidEnvVar { ref var, .. } if var == "MATJAR_ENV"));
}

#[test]
fn build_app_config_defaults_with_empty_env() {
    let map: HashMap<&str, &str> = HashMap::new();
    let result = build_app_config(lookup_from_map(&map));
    assert!(result.is_ok(), "expected Ok, got: {result:?}");
    let cfg = result.unwrap();
    assert_eq!(cfg.env, Environment::Development);
    assert_eq!(cfg.log_level, "info");
    assert_eq!(cfg.catalog_url, DEFAULT_CATALOG_URL);
    assert_eq!(cfg.request_timeout_secs, 30);
    assert_eq!(cfg.user_agent, "matjar/0.1 (storefront-catalog)");
    assert_eq!(cfg.suggestion_limit, 5);
    assert_eq!(cfg.store_base_url, DEFAULT_STORE_BASE_URL);
    assert!(cfg.whatsapp_number.is_none());
}

#[test]
fn build_app_config_catalog_url_override() {
    let mut map = HashMap::new();
    map.insert("MATJAR_CATALOG_URL", "http://localhost:8080/products.json");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.catalog_url, "http://localhost:8080/products.json");
}

#[test]
fn build_app_config_rejects_non_http_catalog_url() {
    let mut map = HashMap::new();
    map.insert("MATJAR_CATALOG_URL", "file:///tmp/products.json");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "MATJAR_CATALOG_URL"),
        "expected InvalidEnvVar(MATJAR_CATALOG_URL), got: {result:?}"
    );
}

#[test]
fn build_app_config_rejects_non_http_store_base_url() {
    let mut map = HashMap::new();
    map.insert("MATJAR_STORE_BASE_URL", "matjar.example");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "MATJAR_STORE_BASE_URL"),
        "expected InvalidEnvVar(MATJAR_STORE_BASE_URL), got: {result:?}"
    );
}

#[test]
fn build_app_config_request_timeout_override() {
    let mut map = HashMap::new();
    map.insert("MATJAR_REQUEST_TIMEOUT_SECS", "60");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.request_timeout_secs, 60);
}

#[test]
fn build_app_config_request_timeout_invalid() {
    let mut map = HashMap::new();
    map.insert("MATJAR_REQUEST_TIMEOUT_SECS", "not-a-number");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "MATJAR_REQUEST_TIMEOUT_SECS"),
        "expected InvalidEnvVar(MATJAR_REQUEST_TIMEOUT_SECS), got: {result:?}"
    );
}

#[test]
fn build_app_config_user_agent_override() {
    let mut map = HashMap::new();
    map.insert("MATJAR_USER_AGENT", "custom-agent/2.0");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.user_agent, "custom-agent/2.0");
}

#[test]
fn build_app_config_suggestion_limit_override() {
    let mut map = HashMap::new();
    map.insert("MATJAR_SUGGESTION_LIMIT", "8");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.suggestion_limit, 8);
}

#[test]
fn build_app_config_suggestion_limit_zero_fails() {
    let mut map = HashMap::new();
    map.insert("MATJAR_SUGGESTION_LIMIT", "0");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "MATJAR_SUGGESTION_LIMIT"),
        "expected InvalidEnvVar(MATJAR_SUGGESTION_LIMIT), got: {result:?}"
    );
}

#[test]
fn build_app_config_whatsapp_number_blank_is_none() {
    let mut map = HashMap::new();
    map.insert("MATJAR_WHATSAPP_NUMBER", "   ");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert!(cfg.whatsapp_number.is_none());
}

#[test]
fn build_app_config_fails_on_invalid_matjar_env() {
    let mut map = HashMap::new();
    map.insert("MATJAR_ENV", "producton");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "MATJAR_ENV"),
        "expected InvalidEnvVar(MATJAR_ENV), got: {result:?}"
    );
}

#[test]
fn debug_output_redacts_whatsapp_number() {
    let mut map = HashMap::new();
    map.insert("MATJAR_WHATSAPP_NUMBER", "+96555551234");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    let debug = format!("{cfg:?}");
    assert!(debug.contains("[redacted]"));
    assert!(!debug.contains("96555551234"));
}
