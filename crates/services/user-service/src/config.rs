//! User service configuration.

use std::env;

use common::{DatabaseConfig, ServiceConfig};

/// User service configuration.
#[derive(Debug, Clone)]
pub struct UserServiceConfig {
    /// Service identity and log level
    pub service: ServiceConfig,
    /// Database connection settings
    pub database: DatabaseConfig,
}

impl UserServiceConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        Self {
            service: ServiceConfig {
                service_name: defaults.service.service_name,
                log_level: lookup("USER_SERVICE_LOG_LEVEL").unwrap_or(defaults.service.log_level),
            },
            database: DatabaseConfig {
                url: lookup("USER_SERVICE_DATABASE_URL")
                    .or_else(|| lookup("DATABASE_URL"))
                    .unwrap_or(defaults.database.url),
                max_connections: lookup("USER_SERVICE_DB_MAX_CONNECTIONS")
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(defaults.database.max_connections),
                min_connections: lookup("USER_SERVICE_DB_MIN_CONNECTIONS")
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(defaults.database.min_connections),
                sqlx_logging: lookup("USER_SERVICE_DB_LOGGING")
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(defaults.database.sqlx_logging),
            },
        }
    }
}

impl Default for UserServiceConfig {
    fn default() -> Self {
        Self {
            service: ServiceConfig {
                service_name: "user-service".to_string(),
                ..ServiceConfig::default()
            },
            database: DatabaseConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn load(vars: &[(&str, &str)]) -> UserServiceConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        UserServiceConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = load(&[]);
        assert_eq!(config.service.service_name, "user-service");
        assert_eq!(config.database.max_connections, 10);
        assert!(!config.database.sqlx_logging);
    }

    #[test]
    fn service_specific_url_wins() {
        let config = load(&[
            ("DATABASE_URL", "postgres://shared/db"),
            ("USER_SERVICE_DATABASE_URL", "postgres://users/db"),
        ]);
        assert_eq!(config.database.url, "postgres://users/db");

        let config = load(&[("DATABASE_URL", "postgres://shared/db")]);
        assert_eq!(config.database.url, "postgres://shared/db");
    }

    #[test]
    fn malformed_numbers_fall_back() {
        let config = load(&[
            ("USER_SERVICE_DB_MAX_CONNECTIONS", "lots"),
            ("USER_SERVICE_DB_MIN_CONNECTIONS", "2"),
            ("USER_SERVICE_DB_LOGGING", "true"),
        ]);
        assert_eq!(config.database.max_connections, 10);
        assert_eq!(config.database.min_connections, 2);
        assert!(config.database.sqlx_logging);
    }
}
