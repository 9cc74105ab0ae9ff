use actix_web::{post, web, HttpRequest, Responder};
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::auth::extract_token_from_header;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Serialize, ToSchema)]
pub struct LogoutResponseBody {
    #[schema(example = true)]
    success: bool,
}

/// Admin logout
///
/// Revokes the bearer session if one is supplied. Always succeeds.
#[utoipa::path(
    post,
    path = "/api/admin/logout",
    tag = "auth",
    responses(
        (status = 200, description = "Logged out", body = LogoutResponseBody),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("BearerAuth" = []))
)]
#[post("/api/admin/logout")]
pub async fn logout_admin_handler(req: HttpRequest, data: web::Data<AppState>) -> impl Responder {
    let token = extract_token_from_header(&req);

    match data.logout_admin_use_case.execute(token.as_deref()).await {
        Ok(()) => ApiResponse::acknowledged(),
        Err(e) => {
            error!("Logout failed: {}", e);
            ApiResponse::internal_error_with("Logout failed")
        }
    }
}
