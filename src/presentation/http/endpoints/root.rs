use std::sync::Arc;

use poem_openapi::Tags;

use crate::{
    application::usecases::{create_user::CreateUserUseCase, list_users::ListUsersUseCase},
    domain::repositories::UserRepository,
};

#[derive(Clone)]
pub struct ApiState {
    pub list_users_usecase: Arc<ListUsersUseCase>,
    pub create_user_usecase: Arc<CreateUserUseCase>,
}

impl ApiState {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self {
            list_users_usecase: Arc::new(ListUsersUseCase::new(repo.clone())),
            create_user_usecase: Arc::new(CreateUserUseCase::new(repo)),
        }
    }
}

/// Enum of API sections (tags)
#[derive(Tags)]
pub enum EndpointsTags {
    Health,
    Users,
}
