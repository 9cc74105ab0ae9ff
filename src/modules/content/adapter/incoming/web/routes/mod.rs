mod blog_by_slug;
mod collection;
mod singleton;

pub use blog_by_slug::get_blog_by_slug_handler;
pub use collection::{configure_collection, CollectionResource};
pub use singleton::{configure_singleton, SingletonResource, UpdateMode};

use actix_web::{web, HttpResponse};
use tracing::{error, warn};

use crate::content::application::domain::entities::{
    Blog, Certification, ContactInfo, Course, Experience, NavMenuItem, ProfileInfo, Project,
    Skill, SocialLink, Training,
};
use crate::content::application::ports::incoming::use_cases::ContentError;
use crate::shared::api::ApiResponse;

/// Registers every public content route and its admin-only mutations.
pub fn configure_content_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(get_blog_by_slug_handler);

    configure_collection::<Skill>(cfg);
    configure_collection::<Project>(cfg);
    configure_collection::<Certification>(cfg);
    configure_collection::<Training>(cfg);
    configure_collection::<Experience>(cfg);
    configure_collection::<Blog>(cfg);
    configure_collection::<SocialLink>(cfg);
    configure_collection::<NavMenuItem>(cfg);
    configure_collection::<Course>(cfg);

    configure_singleton::<ContactInfo>(cfg);
    configure_singleton::<ProfileInfo>(cfg);
}

fn capitalize(label: &str) -> String {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Maps a store failure to the client-facing envelope. Internal detail only
/// goes to the log.
pub(crate) fn content_error_response(label: &str, action: &str, err: ContentError) -> HttpResponse {
    match err {
        ContentError::NotFound => {
            ApiResponse::not_found("NOT_FOUND", &format!("{} not found", capitalize(label)))
        }
        ContentError::ValidationError(detail) => {
            warn!("Rejected {} payload: {}", label, detail);
            ApiResponse::bad_request("VALIDATION_ERROR", &format!("Invalid {} data", label))
        }
        ContentError::PersistenceError(detail) => {
            error!("Failed to {} {}: {}", action, label, detail);
            ApiResponse::internal_error_with(&format!("Failed to {} {}", action, label))
        }
    }
}
