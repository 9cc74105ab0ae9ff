use crate::api::schemas::{AcknowledgedResponse, ErrorDetail, ErrorResponse};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

// Auth
use crate::auth::adapter::incoming::web::routes::{
    LoginRequestDto, LoginResponseBody, LogoutResponseBody, VerifySessionResponse,
};
// Content
use crate::content::application::domain::entities::{
    Blog, Certification, ContactInfo, Course, Experience, NavMenuItem, ProfileInfo, Project,
    Skill, SocialIcon, SocialLink, Training,
};
// Contact relay
use crate::email::adapter::incoming::web::routes::ContactFormRequest;
use crate::email::application::domain::entities::SmtpConfig;
// Media
use crate::media::adapter::incoming::web::routes::UploadForm;
use crate::media::application::domain::entities::{StoredImage, UploadCategory};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Portfolio Content API",
        version = "1.0.0",
        description = "Public content and admin console API for the portfolio site",
    ),
    paths(
        // Auth endpoints
        crate::auth::adapter::incoming::web::routes::login_admin_handler,
        crate::auth::adapter::incoming::web::routes::logout_admin_handler,
        crate::auth::adapter::incoming::web::routes::verify_session_handler,

        // Media endpoints
        crate::media::adapter::incoming::web::routes::upload_image_handler,

        // Contact endpoints
        crate::email::adapter::incoming::web::routes::send_contact_handler,
    ),
    components(
        schemas(
            // Response wrappers
            AcknowledgedResponse,
            ErrorResponse,
            ErrorDetail,

            // Auth DTOs
            LoginRequestDto,
            LoginResponseBody,
            LogoutResponseBody,
            VerifySessionResponse,

            // Content records (collections carry an extra `id`)
            Skill,
            Project,
            Certification,
            Training,
            Experience,
            Blog,
            SocialLink,
            SocialIcon,
            NavMenuItem,
            Course,
            ContactInfo,
            ProfileInfo,
            SmtpConfig,

            // Media and contact
            UploadForm,
            UploadCategory,
            StoredImage,
            ContactFormRequest
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Admin session endpoints"),
        (name = "media", description = "Image upload endpoints"),
        (name = "contact", description = "Contact form relay"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "BearerAuth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .description(Some("Session id returned by /api/admin/login"))
                        .build(),
                ),
            )
        }
    }
}
