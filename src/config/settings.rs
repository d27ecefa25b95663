//! Application settings loaded from environment variables.

use std::env;

use super::constants::{
    DEFAULT_DATABASE_URL, DEFAULT_DB_MAX_CONNECTIONS, DEFAULT_DB_MIN_CONNECTIONS,
};

/// Application configuration
#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub db_max_connections: u32,
    pub db_min_connections: u32,
    /// Log every SQL statement through tracing
    pub db_sql_logging: bool,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("database_url", &"[REDACTED]")
            .field("db_max_connections", &self.db_max_connections)
            .field("db_min_connections", &self.db_min_connections)
            .field("db_sql_logging", &self.db_sql_logging)
            .finish()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            db_max_connections: DEFAULT_DB_MAX_CONNECTIONS,
            db_min_connections: DEFAULT_DB_MIN_CONNECTIONS,
            db_sql_logging: false,
        }
    }
}

impl Config {
    /// Load configuration from environment variables (and `.env` if present).
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let defaults = Self::default();

        Self {
            database_url: env::var("DATABASE_URL").unwrap_or(defaults.database_url),
            db_max_connections: parse_var("DB_MAX_CONNECTIONS")
                .unwrap_or(defaults.db_max_connections),
            db_min_connections: parse_var("DB_MIN_CONNECTIONS")
                .unwrap_or(defaults.db_min_connections),
            db_sql_logging: parse_var("DB_SQL_LOGGING").unwrap_or(defaults.db_sql_logging),
        }
    }

    /// Configuration pointing at the given URL with default pool settings.
    pub fn with_database_url(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            ..Self::default()
        }
    }

    /// Whether the configured store is an in-memory SQLite database.
    pub fn is_in_memory(&self) -> bool {
        self.database_url.starts_with("sqlite::memory:")
            || self.database_url.contains("mode=memory")
    }
}

fn parse_var<T: std::str::FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|v| v.parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_database_url() {
        let config = Config::with_database_url("postgres://user:secret@db/forum");
        let debug = format!("{:?}", config);

        assert!(!debug.contains("secret"));
        assert!(debug.contains("[REDACTED]"));
    }

    #[test]
    fn test_in_memory_detection() {
        assert!(Config::with_database_url("sqlite::memory:").is_in_memory());
        assert!(Config::with_database_url("sqlite://forum.db?mode=memory").is_in_memory());
        assert!(!Config::with_database_url("sqlite://forum.db?mode=rwc").is_in_memory());
    }
}
