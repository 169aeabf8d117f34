use std::{env::var, str::FromStr, time::Duration};

use dotenvy::dotenv;
use sqlx::postgres::PgSslMode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} env param is required")]
    Missing(&'static str),
    #[error("An error occurred while parsing {name} env param: {value:?}")]
    Invalid { name: &'static str, value: String },
}

/// When the schema bootstrap runs relative to the listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootstrapMode {
    /// Await the bootstrap before accepting connections.
    Blocking,
    /// Spawn the bootstrap and start serving immediately.
    Background,
}

impl FromStr for BootstrapMode {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "blocking" => Ok(Self::Blocking),
            "background" => Ok(Self::Background),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub ssl_mode: PgSslMode,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
    pub statement_timeout: Duration,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub database: DatabaseConfig,
    pub bootstrap: BootstrapMode,
}

impl Config {
    pub fn try_parse() -> Result<Config, ConfigError> {
        let _ = dotenv();
        Self::from_lookup(|key| var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Config, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let url = lookup("DATABASE_URL")
            .filter(|url| !url.is_empty())
            .ok_or(ConfigError::Missing("DATABASE_URL"))?;

        Ok(Config {
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: parse_or(&lookup, "PORT", 3000)?,
            database: DatabaseConfig {
                url,
                // `require` encrypts without verifying the server certificate
                ssl_mode: parse_or(&lookup, "DATABASE_SSL_MODE", PgSslMode::Require)?,
                max_connections: parse_or(&lookup, "DATABASE_MAX_CONNECTIONS", 10)?,
                acquire_timeout: Duration::from_secs(parse_or(
                    &lookup,
                    "DATABASE_ACQUIRE_TIMEOUT_SECS",
                    5,
                )?),
                statement_timeout: Duration::from_millis(parse_or(
                    &lookup,
                    "DATABASE_STATEMENT_TIMEOUT_MS",
                    30_000,
                )?),
            },
            bootstrap: parse_or(&lookup, "SCHEMA_BOOTSTRAP", BootstrapMode::Blocking)?,
        })
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_or<F, T>(lookup: &F, name: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(name) {
        Some(value) => value
            .parse()
            .map_err(|_| ConfigError::Invalid { name, value }),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn parse(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn applies_defaults() {
        let config = parse(&[("DATABASE_URL", "postgres://localhost/users")]).unwrap();

        assert_eq!(config.port, 3000);
        assert_eq!(config.listen_addr(), "0.0.0.0:3000");
        assert_eq!(config.database.url, "postgres://localhost/users");
        assert!(matches!(config.database.ssl_mode, PgSslMode::Require));
        assert_eq!(config.database.max_connections, 10);
        assert_eq!(config.database.acquire_timeout, Duration::from_secs(5));
        assert_eq!(config.database.statement_timeout, Duration::from_secs(30));
        assert_eq!(config.bootstrap, BootstrapMode::Blocking);
    }

    #[test]
    fn reads_overrides() {
        let config = parse(&[
            ("DATABASE_URL", "postgres://localhost/users"),
            ("HOST", "127.0.0.1"),
            ("PORT", "8080"),
            ("DATABASE_SSL_MODE", "verify-full"),
            ("DATABASE_MAX_CONNECTIONS", "3"),
            ("DATABASE_STATEMENT_TIMEOUT_MS", "250"),
            ("SCHEMA_BOOTSTRAP", "background"),
        ])
        .unwrap();

        assert_eq!(config.listen_addr(), "127.0.0.1:8080");
        assert!(matches!(config.database.ssl_mode, PgSslMode::VerifyFull));
        assert_eq!(config.database.max_connections, 3);
        assert_eq!(config.database.statement_timeout, Duration::from_millis(250));
        assert_eq!(config.bootstrap, BootstrapMode::Background);
    }

    #[test]
    fn database_url_is_required() {
        assert!(matches!(parse(&[]), Err(ConfigError::Missing("DATABASE_URL"))));
        assert!(matches!(
            parse(&[("DATABASE_URL", "")]),
            Err(ConfigError::Missing("DATABASE_URL"))
        ));
    }

    #[test]
    fn rejects_unparsable_values() {
        let err = parse(&[
            ("DATABASE_URL", "postgres://localhost/users"),
            ("PORT", "eighty"),
        ])
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { name: "PORT", .. }));

        let err = parse(&[
            ("DATABASE_URL", "postgres://localhost/users"),
            ("SCHEMA_BOOTSTRAP", "later"),
        ])
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { name: "SCHEMA_BOOTSTRAP", .. }));
    }
}
