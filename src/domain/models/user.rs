use chrono::{DateTime, Utc};

use crate::domain::errors::DomainError;

#[derive(Debug, Clone)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserSummary {
    pub name: String,
}

/// A user that passed presence checks and is ready to be inserted.
///
/// Length limits and email uniqueness are left to the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    name: String,
    email: String,
}

impl NewUser {
    pub fn new(name: Option<String>, email: Option<String>) -> Result<Self, DomainError> {
        match (non_empty(name), non_empty(email)) {
            (Some(name), Some(email)) => Ok(Self { name, email }),
            _ => Err(DomainError::Validation(
                "name and email are required".to_string(),
            )),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
