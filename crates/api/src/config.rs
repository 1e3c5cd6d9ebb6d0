use std::str::FromStr;
use std::time::Duration;

use poetry_db::PoolConfig;

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins; `*` allows any origin.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Database pool sizing handed to `poetry_db::create_pool`.
    pub db_pool: PoolConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                   | Default   |
    /// |---------------------------|-----------|
    /// | `HOST`                    | `0.0.0.0` |
    /// | `PORT`                    | `3000`    |
    /// | `CORS_ORIGINS`            | `*`       |
    /// | `REQUEST_TIMEOUT_SECS`    | `30`      |
    /// | `DB_MAX_CONNECTIONS`      | `10`      |
    /// | `DB_ACQUIRE_TIMEOUT_SECS` | `5`       |
    ///
    /// Panics on unparseable values: misconfiguration should stop startup.
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());
        let port: u16 = env_or("PORT", 3000);
        let cors_origins = parse_origins(
            &std::env::var("CORS_ORIGINS").unwrap_or_else(|_| "*".into()),
        );
        let request_timeout_secs: u64 = env_or("REQUEST_TIMEOUT_SECS", 30);

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            db_pool: db_pool_from_env(),
        }
    }

    /// Whether the CORS layer should accept any origin.
    pub fn allows_any_origin(&self) -> bool {
        self.cors_origins.iter().any(|o| o == "*")
    }
}

/// Pool sizing from `DB_MAX_CONNECTIONS` and `DB_ACQUIRE_TIMEOUT_SECS`.
///
/// Shared by the server and `poetry-seed`.
pub fn db_pool_from_env() -> PoolConfig {
    db_pool_from(|key| std::env::var(key).ok())
}

fn db_pool_from(lookup: impl Fn(&str) -> Option<String>) -> PoolConfig {
    let defaults = PoolConfig::default();
    PoolConfig {
        max_connections: parse_or(
            "DB_MAX_CONNECTIONS",
            lookup("DB_MAX_CONNECTIONS"),
            defaults.max_connections,
        ),
        acquire_timeout: Duration::from_secs(parse_or(
            "DB_ACQUIRE_TIMEOUT_SECS",
            lookup("DB_ACQUIRE_TIMEOUT_SECS"),
            defaults.acquire_timeout.as_secs(),
        )),
    }
}

/// Read and parse an env var, falling back to `default` when unset.
fn env_or<T>(key: &str, default: T) -> T
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    parse_or(key, std::env::var(key).ok(), default)
}

fn parse_or<T>(key: &str, raw: Option<String>, default: T) -> T
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match raw {
        Some(raw) => raw
            .trim()
            .parse()
            .unwrap_or_else(|e| panic!("{key} must be a valid {}: {e}", std::any::type_name::<T>())),
        None => default,
    }
}

/// Split a comma-separated origin list, dropping blanks.
fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_origins_splits_and_trims() {
        assert_eq!(
            parse_origins("http://a.test, http://b.test ,"),
            vec!["http://a.test", "http://b.test"]
        );
    }

    #[test]
    fn wildcard_origin_allows_any() {
        let config = ServerConfig {
            host: "127.0.0.1".into(),
            port: 0,
            cors_origins: parse_origins("*"),
            request_timeout_secs: 30,
            db_pool: PoolConfig::default(),
        };
        assert!(config.allows_any_origin());
    }

    #[test]
    fn env_or_falls_back_when_unset() {
        let value: u32 = env_or("POETRY_TEST_SURELY_UNSET_VARIABLE", 17);
        assert_eq!(value, 17);
    }

    #[test]
    fn db_pool_reads_both_variables() {
        let pool = db_pool_from(|key| match key {
            "DB_MAX_CONNECTIONS" => Some("3".into()),
            "DB_ACQUIRE_TIMEOUT_SECS" => Some(" 9 ".into()),
            _ => None,
        });
        assert_eq!(pool.max_connections, 3);
        assert_eq!(pool.acquire_timeout, Duration::from_secs(9));
    }

    #[test]
    fn db_pool_defaults_when_unset() {
        let pool = db_pool_from(|_| None);
        assert_eq!(pool.max_connections, PoolConfig::default().max_connections);
        assert_eq!(pool.acquire_timeout, PoolConfig::default().acquire_timeout);
    }
}
