use actix_web::{get, Responder};
use serde::Serialize;
use utoipa::ToSchema;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedAdmin;
use crate::shared::api::ApiResponse;

#[derive(Serialize, ToSchema)]
pub struct VerifySessionResponse {
    #[schema(example = true)]
    valid: bool,
}

/// Verify admin session
#[utoipa::path(
    get,
    path = "/api/admin/verify",
    tag = "auth",
    responses(
        (status = 200, description = "Session is valid", body = VerifySessionResponse),
        (status = 401, description = "Missing, unknown or expired session", body = ErrorResponse)
    ),
    security(("BearerAuth" = []))
)]
#[get("/api/admin/verify")]
pub async fn verify_session_handler(_admin: AuthenticatedAdmin) -> impl Responder {
    ApiResponse::success(VerifySessionResponse { valid: true })
}
