use tracing::{error, info};

use crate::infrastructure::repositories::postgres::PgPool;

const CREATE_USERS: &str = include_str!("../../migrations/create_users.sql");

/// Creates the `users` table unless it already exists. Existing tables are
/// left untouched, so this is safe to run on every start.
pub async fn ensure_users_table(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query(CREATE_USERS).execute(pool).await?;
    Ok(())
}

/// Startup wrapper around [`ensure_users_table`]. Failures are logged and
/// swallowed: the server keeps running and requests fail individually until
/// the schema is fixed.
pub async fn bootstrap(pool: PgPool) {
    match ensure_users_table(&pool).await {
        Ok(()) => info!("users table verified"),
        Err(err) => error!(error = %err, "failed to create users table"),
    }
}
