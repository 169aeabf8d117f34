use std::sync::Arc;

use anyhow::Context;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, Pool, Postgres};
use tracing::debug;

use crate::domain::{
    errors::DomainError,
    models::{NewUser, User, UserSummary},
    repositories::UserRepository,
};

pub type PgPool = Pool<Postgres>;

#[derive(Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Arc<Self> {
        Arc::new(Self { pool })
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn list_recent(&self) -> Result<Vec<UserSummary>, DomainError> {
        let rows = sqlx::query_as::<_, UserSummaryRecord>(
            r#"SELECT name FROM users ORDER BY created_at DESC"#,
        )
        .fetch_all(&self.pool)
        .await
        .context("failed to list users")?;

        Ok(rows.into_iter().map(UserSummary::from).collect())
    }

    async fn create(&self, user: &NewUser) -> Result<User, DomainError> {
        let record = sqlx::query_as::<_, UserRecord>(
            r#"
            INSERT INTO users (name, email)
            VALUES ($1, $2)
            RETURNING id, name, email, created_at
            "#,
        )
        .bind(user.name())
        .bind(user.email())
        .fetch_one(&self.pool)
        .await
        .map_err(|err| map_insert_error(err, user.email()))?;

        Ok(record.into())
    }
}

/// Unique violations are told apart by SQLSTATE, not by message text.
fn map_insert_error(error: sqlx::Error, email: &str) -> DomainError {
    if let sqlx::Error::Database(db) = &error {
        if db.is_unique_violation() {
            debug!(constraint = ?db.constraint(), "insert rejected by unique constraint");
            return DomainError::AlreadyExists(format!("user with email {email}"));
        }
    }

    DomainError::Other(anyhow::Error::new(error).context("failed to insert user"))
}

#[derive(FromRow)]
struct UserRecord {
    id: i32,
    name: String,
    email: String,
    created_at: DateTime<Utc>,
}

impl From<UserRecord> for User {
    fn from(value: UserRecord) -> Self {
        Self {
            id: value.id,
            name: value.name,
            email: value.email,
            created_at: value.created_at,
        }
    }
}

#[derive(FromRow)]
struct UserSummaryRecord {
    name: String,
}

impl From<UserSummaryRecord> for UserSummary {
    fn from(value: UserSummaryRecord) -> Self {
        Self { name: value.name }
    }
}
