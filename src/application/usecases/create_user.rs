use std::sync::Arc;

use crate::domain::{
    errors::DomainError,
    models::{NewUser, User},
    repositories::UserRepository,
};

pub struct CreateUserUseCase {
    repo: Arc<dyn UserRepository>,
}

pub struct CreateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl CreateUserUseCase {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, request: CreateUserRequest) -> Result<User, DomainError> {
        let user = NewUser::new(request.name, request.email)?;
        self.repo.create(&user).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        application::usecases::list_users::ListUsersUseCase,
        infrastructure::repositories::in_memory::InMemoryUserRepository,
    };

    fn request(name: &str, email: &str) -> CreateUserRequest {
        CreateUserRequest {
            name: Some(name.to_string()),
            email: Some(email.to_string()),
        }
    }

    #[tokio::test]
    async fn created_users_show_up_in_listing() {
        let repo = Arc::new(InMemoryUserRepository::new());
        let create = CreateUserUseCase::new(repo.clone());
        let list = ListUsersUseCase::new(repo);

        let pairs = [
            ("Ana", "ana@example.com"),
            ("Beto Souza", "beto@example.com"),
            ("   ", "blank@example.com"),
            ("Zoë Ñuñez", "zoe+tag@example.org"),
            ("Ana", "another.ana@example.com"),
        ];

        for (name, email) in pairs {
            let user = create.execute(request(name, email)).await.unwrap();
            assert_eq!(user.name, name);
            assert_eq!(user.email, email);

            let names: Vec<_> = list.execute().await.unwrap().into_iter().map(|u| u.name).collect();
            assert!(names.iter().any(|n| n == name), "{name:?} missing from {names:?}");
        }

        assert_eq!(list.execute().await.unwrap().len(), pairs.len());
    }

    #[tokio::test]
    async fn invalid_request_never_reaches_repository() {
        let repo = Arc::new(InMemoryUserRepository::new());
        let create = CreateUserUseCase::new(repo.clone());

        let err = create
            .execute(CreateUserRequest {
                name: Some("Ana".to_string()),
                email: None,
            })
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::Validation(_)));
        assert!(repo.list_recent().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn duplicate_email_is_a_conflict() {
        let repo = Arc::new(InMemoryUserRepository::new());
        let create = CreateUserUseCase::new(repo.clone());

        create.execute(request("Ana", "ana@example.com")).await.unwrap();
        let err = create
            .execute(request("Another Ana", "ana@example.com"))
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::AlreadyExists(_)));
        assert_eq!(repo.list_recent().await.unwrap().len(), 1);
    }
}
