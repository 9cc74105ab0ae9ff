use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::{error, warn};
use utoipa::ToSchema;

use crate::api::schemas::{AcknowledgedResponse, ErrorResponse};
use crate::email::application::domain::entities::ContactForm;
use crate::email::application::ports::incoming::ContactError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct ContactFormRequest {
    #[schema(example = "Ada Lovelace")]
    pub name: String,
    #[schema(example = "ada@example.com")]
    pub email: String,
    #[schema(example = "Consulting")]
    pub subject: String,
    pub message: String,
    /// Course of interest; `none` or absent when not applicable
    #[serde(default)]
    pub course: Option<String>,
}

/// Send a contact message
///
/// Relays a visitor's message to the site owner over the configured SMTP relay.
#[utoipa::path(
    post,
    path = "/api/contact",
    tag = "contact",
    request_body = ContactFormRequest,
    responses(
        (status = 200, description = "Message relayed", body = AcknowledgedResponse),
        (status = 400, description = "Invalid contact form", body = ErrorResponse),
        (status = 500, description = "Delivery failed", body = ErrorResponse)
    )
)]
#[post("/api/contact")]
pub async fn send_contact_handler(
    req: web::Json<ContactFormRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();
    let form = match ContactForm::new(req.name, req.email, req.subject, req.message, req.course) {
        Ok(form) => form,
        Err(e) => {
            warn!("Rejected contact form: {}", e);
            return ApiResponse::bad_request("VALIDATION_ERROR", &format!("Invalid contact form: {}", e));
        }
    };

    match data.send_contact_use_case.execute(form).await {
        Ok(()) => ApiResponse::acknowledged(),
        Err(ContactError::DeliveryFailed(e)) => {
            error!("Contact relay failed: {}", e);
            ApiResponse::error(
                actix_web::http::StatusCode::INTERNAL_SERVER_ERROR,
                "EMAIL_DELIVERY_FAILED",
                "Failed to send email",
            )
        }
    }
}
