use crate::{
    domain::models::{User, UserSummary},
    presentation::http::responses::{CreatedUserDto, UserNameDto},
};

pub fn map_summary(summary: UserSummary) -> UserNameDto {
    UserNameDto { name: summary.name }
}

pub fn map_created(user: User) -> CreatedUserDto {
    CreatedUserDto {
        id: user.id,
        name: user.name,
        email: user.email,
    }
}
