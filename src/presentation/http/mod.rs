use std::sync::Arc;

use poem::{
    Endpoint, EndpointExt, Route,
    middleware::{Cors, Tracing},
};
use poem_openapi::OpenApiService;

use crate::presentation::http::endpoints::{
    health::HealthEndpoints, root::ApiState, users::UsersEndpoints,
};

pub mod endpoints;
pub mod mappers;
pub mod requests;
pub mod responses;

/// Routes, OpenAPI docs under `/docs`, permissive CORS and request tracing.
pub fn app(state: Arc<ApiState>) -> impl Endpoint {
    let api_service = OpenApiService::new(
        (UsersEndpoints::new(state), HealthEndpoints),
        "Users API",
        env!("CARGO_PKG_VERSION"),
    );
    let ui = api_service.swagger_ui();

    Route::new()
        .nest("/docs", ui)
        .nest("/", api_service)
        .with(Tracing)
        .with(Cors::new())
}
