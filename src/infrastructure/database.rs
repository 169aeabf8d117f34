use std::str::FromStr;

use sqlx::postgres::{PgConnectOptions, PgPoolOptions};

use crate::{config::DatabaseConfig, infrastructure::repositories::postgres::PgPool};

/// Builds the shared pool without opening a connection; the first query (or
/// the schema bootstrap) connects.
pub fn connect_lazy(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    let statement_timeout = config.statement_timeout.as_millis().to_string();
    let options = PgConnectOptions::from_str(&config.url)?
        .ssl_mode(config.ssl_mode)
        .options([("statement_timeout", statement_timeout.as_str())]);

    Ok(PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout)
        .connect_lazy_with(options))
}
