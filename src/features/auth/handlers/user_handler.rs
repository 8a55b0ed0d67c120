use axum::Json;

use crate::core::error::Result;
use crate::features::auth::dtos::GreetingDto;
use crate::features::auth::guards::{RequireAdministrator, RequireUser};
use crate::features::auth::services::AuthService;
use crate::shared::types::ApiResponse;

#[utoipa::path(
    get,
    path = "/api/users/admins",
    responses(
        (status = 200, description = "Greeting for administrators", body = ApiResponse<GreetingDto>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Administrator access required")
    ),
    tag = "users",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn admins(
    RequireAdministrator(user): RequireAdministrator,
) -> Result<Json<ApiResponse<GreetingDto>>> {
    let message = AuthService::greet(&user);
    Ok(Json(ApiResponse::success(Some(GreetingDto { message }), None, None)))
}

#[utoipa::path(
    get,
    path = "/api/users/users",
    responses(
        (status = 200, description = "Greeting for users", body = ApiResponse<GreetingDto>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "User access required")
    ),
    tag = "users",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn users(RequireUser(user): RequireUser) -> Result<Json<ApiResponse<GreetingDto>>> {
    let message = AuthService::greet(&user);
    Ok(Json(ApiResponse::success(Some(GreetingDto { message }), None, None)))
}
