//! Runtime configuration read from the environment (and `.env` when present)

use std::str::FromStr;
use std::time::Duration;

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: '{value}'")]
    InvalidValue { key: &'static str, value: String },
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Postgres connection string; without it the in-memory store is used
    pub database_url: Option<String>,
    pub bind_addr: String,
    pub log_level: String,
    pub db_max_connections: u32,
    pub package_cache_ttl: Duration,
    pub currency: String,
}

impl Config {
    /// Load configuration from process environment.
    ///
    /// # Environment Variables
    ///
    /// - `DATABASE_URL`: Postgres connection string (optional)
    /// - `BIND_ADDR`: listen address (default: `0.0.0.0:8080`)
    /// - `LOG_LEVEL`: tracing filter when `RUST_LOG` is unset (default: `info`)
    /// - `DB_MAX_CONNECTIONS`: pool size (default: 5)
    /// - `PACKAGE_CACHE_TTL_SECS`: package cache TTL (default: 300)
    /// - `CURRENCY`: currency code on price quotes (default: `THB`)
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Ok(Self {
            database_url: non_empty("DATABASE_URL"),
            bind_addr: non_empty("BIND_ADDR").unwrap_or_else(|| "0.0.0.0:8080".to_string()),
            log_level: non_empty("LOG_LEVEL").unwrap_or_else(|| "info".to_string()),
            db_max_connections: parse_or("DB_MAX_CONNECTIONS", non_empty("DB_MAX_CONNECTIONS"), 5)?,
            package_cache_ttl: Duration::from_secs(parse_or(
                "PACKAGE_CACHE_TTL_SECS",
                non_empty("PACKAGE_CACHE_TTL_SECS"),
                300,
            )?),
            currency: non_empty("CURRENCY").unwrap_or_else(|| "THB".to_string()),
        })
    }
}

fn parse_or<T: FromStr>(key: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue { key, value }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.database_url, None);
        assert_eq!(config.bind_addr, "0.0.0.0:8080");
        assert_eq!(config.log_level, "info");
        assert_eq!(config.db_max_connections, 5);
        assert_eq!(config.package_cache_ttl, Duration::from_secs(300));
        assert_eq!(config.currency, "THB");
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("DATABASE_URL", "postgres://localhost/tours"),
            ("BIND_ADDR", "127.0.0.1:3000"),
            ("PACKAGE_CACHE_TTL_SECS", "60"),
            ("DB_MAX_CONNECTIONS", " 12 "),
        ]))
        .unwrap();
        assert_eq!(config.database_url.as_deref(), Some("postgres://localhost/tours"));
        assert_eq!(config.bind_addr, "127.0.0.1:3000");
        assert_eq!(config.package_cache_ttl, Duration::from_secs(60));
        assert_eq!(config.db_max_connections, 12);
    }

    #[test]
    fn test_blank_database_url_means_in_memory() {
        let config = Config::from_lookup(lookup(&[("DATABASE_URL", "  ")])).unwrap();
        assert!(config.database_url.is_none());
    }

    #[test]
    fn test_invalid_number_is_an_error() {
        let err = Config::from_lookup(lookup(&[("PACKAGE_CACHE_TTL_SECS", "soon")])).unwrap_err();
        assert!(err.to_string().contains("PACKAGE_CACHE_TTL_SECS"));
    }
}
