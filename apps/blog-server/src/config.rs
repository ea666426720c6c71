//! Application configuration loaded from environment variables.

use std::env;

use blog_infra::database::DatabaseConfig;

const DEFAULT_DATABASE_URL: &str = "sqlite://blog-app.db?mode=rwc";
const DEFAULT_TEST_DATABASE_URL: &str = "sqlite://test-blog-app.db?mode=rwc";

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Worker threads; `None` lets actix pick one per core.
    pub workers: Option<usize>,
    /// Seconds to wait for in-flight connections on graceful shutdown.
    pub shutdown_timeout: u64,
    pub database: DatabaseConfig,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    ///
    /// `APP_ENV=test` selects `TEST_DATABASE_URL` as the connection target.
    pub fn from_vars<F>(var: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let testing = var("APP_ENV").is_some_and(|v| v.eq_ignore_ascii_case("test"));
        let url = if testing {
            var("TEST_DATABASE_URL").unwrap_or_else(|| DEFAULT_TEST_DATABASE_URL.to_string())
        } else {
            var("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string())
        };

        let mut database = DatabaseConfig::new(url);
        if let Some(max) = var("DB_MAX_CONNECTIONS").and_then(|s| s.parse().ok()) {
            database.max_connections = max;
        }
        if let Some(min) = var("DB_MIN_CONNECTIONS").and_then(|s| s.parse().ok()) {
            database.min_connections = min;
        }

        Self {
            host: var("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: var("PORT").and_then(|p| p.parse().ok()).unwrap_or(8080),
            workers: var("WORKERS").and_then(|w| w.parse().ok()),
            shutdown_timeout: var("SHUTDOWN_TIMEOUT")
                .and_then(|s| s.parse().ok())
                .unwrap_or(30),
            database,
        }
    }

    /// Configuration for a given connection target on an ephemeral local port.
    pub fn for_database(url: impl Into<String>) -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 0,
            workers: Some(2),
            shutdown_timeout: 5,
            database: DatabaseConfig::new(url),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config(vars: &[(&str, &str)]) -> AppConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_vars(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults() {
        let config = config(&[]);
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert_eq!(config.workers, None);
        assert_eq!(config.shutdown_timeout, 30);
        assert_eq!(config.database.url, DEFAULT_DATABASE_URL);
        assert_eq!(config.database.max_connections, 10);
    }

    #[test]
    fn test_environment_selects_test_database() {
        let config = config(&[
            ("APP_ENV", "test"),
            ("DATABASE_URL", "postgres://localhost/blog-app"),
            ("TEST_DATABASE_URL", "postgres://localhost/test-blog-app"),
        ]);
        assert_eq!(config.database.url, "postgres://localhost/test-blog-app");
    }

    #[test]
    fn test_database_has_its_own_default() {
        let config = config(&[("APP_ENV", "TEST")]);
        assert_eq!(config.database.url, DEFAULT_TEST_DATABASE_URL);
    }

    #[test]
    fn overrides_and_bad_numbers() {
        let config = config(&[
            ("HOST", "0.0.0.0"),
            ("PORT", "not-a-port"),
            ("WORKERS", "4"),
            ("DB_MAX_CONNECTIONS", "50"),
            ("DB_MIN_CONNECTIONS", "5"),
        ]);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8080);
        assert_eq!(config.workers, Some(4));
        assert_eq!(config.database.max_connections, 50);
        assert_eq!(config.database.min_connections, 5);
    }
}
