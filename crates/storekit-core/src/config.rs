use std::path::PathBuf;

use crate::app_config::{Environment, StoreConfig};
use crate::ConfigError;

/// Load storefront configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_store_config() -> Result<StoreConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_store_config_from_env()
}

/// Load storefront configuration from environment variables already in the
/// process.
///
/// Unlike [`load_store_config`], this does NOT load `.env` files — useful for
/// testing or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_store_config_from_env() -> Result<StoreConfig, ConfigError> {
    build_store_config(|key| std::env::var(key))
}

/// Build storefront configuration using the provided env-var lookup function.
///
/// This is the core parsing/validation logic, decoupled from the actual
/// environment so it can be tested with a pure `HashMap` lookup.
fn build_store_config<F>(lookup: F) -> Result<StoreConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
    };

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

    let storefront_base_url = require("STOREKIT_STOREFRONT_BASE_URL")?;

    let env = parse_environment(&or_default("STOREKIT_ENV", "development"));
    let log_level = or_default("STOREKIT_LOG_LEVEL", "info");
    let markets_path = PathBuf::from(or_default(
        "STOREKIT_MARKETS_PATH",
        "./config/markets.yaml",
    ));

    let debounce_ms = parse_u64("STOREKIT_DEBOUNCE_MS", "300")?;
    let request_timeout_secs = parse_u64("STOREKIT_REQUEST_TIMEOUT_SECS", "30")?;
    let user_agent = or_default("STOREKIT_USER_AGENT", "storekit/0.1 (storefront)");

    Ok(StoreConfig {
        env,
        log_level,
        markets_path,
        storefront_base_url,
        debounce_ms,
        request_timeout_secs,
        user_agent,
    })
}

/// Parse a string into an `Environment` variant.
///
/// Unrecognized values default to `Environment::Development`.
fn parse_environment(s: &str) -> Environment {
    match s {
        "production" => Environment::Production,
        "test" => Environment::Test,
        _ => Environment::Development,
    }
}

#[cfg(test)]
mod tests {
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

    /// Returns a map with all required env vars populated with valid defaults.
    fn full_env<'a>() -> HashMap<&'a str, &'a str> {
        let mut m = HashMap::new();
        m.insert("STOREKIT_STOREFRONT_BASE_URL", "https://shop.example.com");
        m
    }

    #[test]
    fn parse_environment_production() {
        assert_eq!(parse_environment("production"), Environment::Production);
    }

    #[test]
    fn parse_environment_unknown_defaults_to_development() {
        assert_eq!(parse_environment("staging"), Environment::Development);
    }

    #[test]
    fn build_store_config_fails_without_base_url() {
        let map: HashMap<&str, &str> = HashMap::new();
        let result = build_store_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::MissingEnvVar(ref v)) if v == "STOREKIT_STOREFRONT_BASE_URL"),
            "expected MissingEnvVar(STOREKIT_STOREFRONT_BASE_URL), got: {result:?}"
        );
    }

    #[test]
    fn build_store_config_succeeds_with_defaults() {
        let map = full_env();
        let cfg = build_store_config(lookup_from_map(&map)).expect("config should build");
        assert_eq!(cfg.env, Environment::Development);
        assert_eq!(cfg.log_level, "info");
        assert_eq!(cfg.storefront_base_url, "https://shop.example.com");
        assert_eq!(cfg.debounce_ms, 300);
        assert_eq!(cfg.request_timeout_secs, 30);
        assert_eq!(cfg.user_agent, "storekit/0.1 (storefront)");
        assert_eq!(
            cfg.markets_path,
            PathBuf::from("./config/markets.yaml")
        );
    }

    #[test]
    fn build_store_config_debounce_override() {
        let mut map = full_env();
        map.insert("STOREKIT_DEBOUNCE_MS", "150");
        let cfg = build_store_config(lookup_from_map(&map)).expect("config should build");
        assert_eq!(cfg.debounce_ms, 150);
    }

    #[test]
    fn build_store_config_debounce_invalid() {
        let mut map = full_env();
        map.insert("STOREKIT_DEBOUNCE_MS", "soon");
        let result = build_store_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "STOREKIT_DEBOUNCE_MS"),
            "expected InvalidEnvVar(STOREKIT_DEBOUNCE_MS), got: {result:?}"
        );
    }

    #[test]
    fn build_store_config_timeout_invalid() {
        let mut map = full_env();
        map.insert("STOREKIT_REQUEST_TIMEOUT_SECS", "-1");
        let result = build_store_config(lookup_from_map(&map));
        assert!(matches!(
            result,
            Err(ConfigError::InvalidEnvVar { .. })
        ));
    }
}
