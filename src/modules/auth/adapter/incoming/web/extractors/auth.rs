use actix_web::{dev::Payload, web, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use futures::future::LocalBoxFuture;

use crate::auth::application::use_cases::verify_session::VerifySessionError;
use crate::{shared::api::ApiResponse, AppState};

/// Present on every admin-only route. Extraction fails with 401 unless the
/// request carries a live bearer session.
#[derive(Debug, Clone)]
pub struct AuthenticatedAdmin {
    pub username: String,
    pub token: String,
}

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

impl FromRequest for AuthenticatedAdmin {
    type Error = ActixError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let state = req.app_data::<web::Data<AppState>>().cloned();
        let token = extract_token_from_header(req);

        Box::pin(async move {
            let state = state.ok_or_else(|| create_api_error(ApiResponse::internal_error()))?;

            let token = token.ok_or_else(|| {
                create_api_error(ApiResponse::unauthorized(
                    "MISSING_AUTH_HEADER",
                    "Missing or invalid authorization header",
                ))
            })?;

            match state.verify_session_use_case.execute(&token).await {
                Ok(session) => Ok(AuthenticatedAdmin {
                    username: session.username,
                    token,
                }),
                Err(VerifySessionError::Unauthenticated) => Err(create_api_error(
                    ApiResponse::unauthorized("SESSION_EXPIRED", "Session expired"),
                )),
                Err(VerifySessionError::StoreError(msg)) => {
                    tracing::error!("Session store failure: {}", msg);
                    Err(create_api_error(ApiResponse::internal_error()))
                }
            }
        })
    }
}

pub fn extract_token_from_header(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get("Authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
