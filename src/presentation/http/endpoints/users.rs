use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};
use tracing::{debug, error};

use crate::{
    application::usecases::create_user::CreateUserRequest,
    domain::errors::DomainError,
    presentation::http::{
        endpoints::root::{ApiState, EndpointsTags},
        mappers::{map_created, map_summary},
        requests::{CreateUserRequestDto, string_field},
        responses::{
            CreateUserResponse, EMAIL_TAKEN_MESSAGE, ErrorDto, INTERNAL_ERROR_MESSAGE,
            ListUsersResponse, REQUIRED_FIELDS_MESSAGE,
        },
    },
};

#[derive(Clone)]
pub struct UsersEndpoints {
    state: Arc<ApiState>,
}

impl UsersEndpoints {
    pub fn new(state: Arc<ApiState>) -> Self {
        Self { state }
    }
}

#[OpenApi]
impl UsersEndpoints {
    #[oai(path = "/users", method = "get", tag = EndpointsTags::Users)]
    pub async fn list_users(&self) -> ListUsersResponse {
        match self.state.list_users_usecase.execute().await {
            Ok(users) => ListUsersResponse::Ok(Json(users.into_iter().map(map_summary).collect())),
            Err(err) => {
                error!(error = ?err, "failed to list users");
                ListUsersResponse::InternalError(ErrorDto::json(INTERNAL_ERROR_MESSAGE))
            }
        }
    }

    #[oai(path = "/users", method = "post", tag = EndpointsTags::Users)]
    pub async fn create_user(&self, request: Json<CreateUserRequestDto>) -> CreateUserResponse {
        let Json(request) = request;
        let payload = CreateUserRequest {
            name: string_field(request.name),
            email: string_field(request.email),
        };

        match self.state.create_user_usecase.execute(payload).await {
            Ok(user) => CreateUserResponse::Created(Json(map_created(user))),
            Err(DomainError::Validation(reason)) => {
                debug!(%reason, "rejected user creation");
                CreateUserResponse::BadRequest(ErrorDto::json(REQUIRED_FIELDS_MESSAGE))
            }
            Err(DomainError::AlreadyExists(_)) => {
                CreateUserResponse::Conflict(ErrorDto::json(EMAIL_TAKEN_MESSAGE))
            }
            Err(DomainError::Other(err)) => {
                error!(error = ?err, "failed to insert user");
                CreateUserResponse::InternalError(ErrorDto::json(INTERNAL_ERROR_MESSAGE))
            }
        }
    }
}
