use crate::api::schemas::ErrorResponse;
use crate::auth::application::use_cases::login_admin::{LoginError, LoginRequest};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;

use utoipa::ToSchema;

/// Login request from the admin console
#[derive(Deserialize, ToSchema)]
pub struct LoginRequestDto {
    #[schema(example = "admin")]
    pub username: String,

    #[schema(example = "correct horse battery staple")]
    pub password: String,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponseBody {
    /// Opaque bearer token
    #[schema(example = "q8V2kZ0m3s9XbT1hN4cWfLrP7yEoD6aJ5uGiKx2Q0zS8vBnM")]
    session_id: String,

    /// Expiry as milliseconds since the Unix epoch
    #[schema(example = 1735689600000i64)]
    expires_at: i64,
}

/// Admin login
///
/// Exchanges the administrator username and password for a bearer session.
#[utoipa::path(
    post,
    path = "/api/admin/login",
    tag = "auth",
    request_body = LoginRequestDto,
    responses(
        (status = 200, description = "Login successful", body = LoginResponseBody),
        (status = 400, description = "Malformed request", body = ErrorResponse),
        (status = 401, description = "Invalid credentials", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[post("/api/admin/login")]
pub async fn login_admin_handler(
    data: web::Data<AppState>,
    req: web::Json<LoginRequest>,
) -> impl Responder {
    match data.login_admin_use_case.execute(req.into_inner()).await {
        Ok(response) => ApiResponse::success(response),
        Err(LoginError::InvalidCredentials) => {
            ApiResponse::unauthorized("INVALID_CREDENTIALS", "Invalid credentials")
        }
        Err(e) => {
            error!("Admin login failed: {}", e);
            ApiResponse::internal_error_with("Login failed")
        }
    }
}
