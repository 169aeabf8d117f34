use poem_openapi::{ApiResponse, Object, payload::Json};

pub const REQUIRED_FIELDS_MESSAGE: &str = "name and email are required";
pub const EMAIL_TAKEN_MESSAGE: &str = "this email is already registered";
pub const INTERNAL_ERROR_MESSAGE: &str = "internal server error";

#[derive(Object, Debug)]
pub struct UserNameDto {
    pub name: String,
}

#[derive(Object, Debug)]
pub struct CreatedUserDto {
    pub id: i32,
    pub name: String,
    pub email: String,
}

#[derive(Object, Debug)]
pub struct ErrorDto {
    pub error: String,
}

impl ErrorDto {
    pub fn json(message: &str) -> Json<Self> {
        Json(Self {
            error: message.to_string(),
        })
    }
}

#[derive(ApiResponse)]
pub enum ListUsersResponse {
    /// Users, most recently created first
    #[oai(status = 200)]
    Ok(Json<Vec<UserNameDto>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorDto>),
}

#[derive(ApiResponse)]
#[oai(bad_request_handler = "undecodable_create_request")]
pub enum CreateUserResponse {
    #[oai(status = 201)]
    Created(Json<CreatedUserDto>),
    /// `name` or `email` missing or empty
    #[oai(status = 400)]
    BadRequest(Json<ErrorDto>),
    /// Email already registered
    #[oai(status = 409)]
    Conflict(Json<ErrorDto>),
    #[oai(status = 500)]
    InternalError(Json<ErrorDto>),
}

// A body that cannot be decoded carries no usable fields.
fn undecodable_create_request(_err: poem::Error) -> CreateUserResponse {
    CreateUserResponse::BadRequest(ErrorDto::json(REQUIRED_FIELDS_MESSAGE))
}
