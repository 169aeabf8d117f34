use std::sync::Arc;

use crate::domain::{errors::DomainError, models::UserSummary, repositories::UserRepository};

pub struct ListUsersUseCase {
    repo: Arc<dyn UserRepository>,
}

impl ListUsersUseCase {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self) -> Result<Vec<UserSummary>, DomainError> {
        self.repo.list_recent().await
    }
}
