use async_trait::async_trait;

use crate::domain::{
    errors::DomainError,
    models::{NewUser, User, UserSummary},
};

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// All users, most recently created first.
    async fn list_recent(&self) -> Result<Vec<UserSummary>, DomainError>;

    /// Inserts a user. A duplicate email yields [`DomainError::AlreadyExists`].
    async fn create(&self, user: &NewUser) -> Result<User, DomainError>;
}
