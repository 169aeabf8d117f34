use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::domain::{
    errors::DomainError,
    models::{NewUser, User, UserSummary},
    repositories::UserRepository,
};

#[derive(Default)]
struct UserTable {
    rows: Vec<User>,
    last_id: i32,
}

/// Process-local stand-in for the `users` table with the same id, ordering
/// and uniqueness rules.
#[derive(Default)]
pub struct InMemoryUserRepository {
    table: Arc<RwLock<UserTable>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn list_recent(&self) -> Result<Vec<UserSummary>, DomainError> {
        let table = self.table.read().await;
        let mut rows: Vec<&User> = table.rows.iter().collect();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(rows
            .into_iter()
            .map(|u| UserSummary {
                name: u.name.clone(),
            })
            .collect())
    }

    async fn create(&self, user: &NewUser) -> Result<User, DomainError> {
        let mut table = self.table.write().await;
        if table.rows.iter().any(|u| u.email == user.email()) {
            return Err(DomainError::AlreadyExists(format!(
                "user with email {}",
                user.email()
            )));
        }

        table.last_id += 1;
        let created = User {
            id: table.last_id,
            name: user.name().to_string(),
            email: user.email().to_string(),
            created_at: Utc::now(),
        };
        table.rows.push(created.clone());
        Ok(created)
    }
}
