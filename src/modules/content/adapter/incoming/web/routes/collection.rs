use std::sync::Arc;

use actix_web::{web, HttpResponse};
use serde_json::Value;

use super::content_error_response;
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedAdmin;
use crate::content::application::content_use_cases::ContentUseCases;
use crate::content::application::domain::entities::{
    Blog, Certification, Course, Experience, NavMenuItem, Project, Skill, SocialLink, Training,
};
use crate::content::application::domain::record::CollectionEntity;
use crate::content::application::ports::incoming::use_cases::CollectionUseCase;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Binds an entity type to its URL segment and use case.
pub trait CollectionResource: CollectionEntity {
    /// Segment under `/api`, e.g. `skills`.
    const PATH: &'static str;

    fn use_case(content: &ContentUseCases) -> &Arc<dyn CollectionUseCase<Self>>;
}

macro_rules! collection_resource {
    ($entity:ty, $path:literal, $field:ident) => {
        impl CollectionResource for $entity {
            const PATH: &'static str = $path;

            fn use_case(content: &ContentUseCases) -> &Arc<dyn CollectionUseCase<Self>> {
                &content.$field
            }
        }
    };
}

collection_resource!(Skill, "skills", skills);
collection_resource!(Project, "projects", projects);
collection_resource!(Certification, "certifications", certifications);
collection_resource!(Training, "training", training);
collection_resource!(Experience, "experience", experience);
collection_resource!(Blog, "blogs", blogs);
collection_resource!(SocialLink, "social", social);
collection_resource!(NavMenuItem, "nav-menu", nav_menu);
collection_resource!(Course, "courses", courses);

pub fn configure_collection<T: CollectionResource>(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource(format!("/api/{}", T::PATH))
            .route(web::get().to(list_records::<T>))
            .route(web::post().to(create_record::<T>)),
    )
    .service(
        web::resource(format!("/api/{}/{{id}}", T::PATH))
            .route(web::get().to(get_record::<T>))
            .route(web::put().to(update_record::<T>))
            .route(web::delete().to(delete_record::<T>)),
    );
}

async fn list_records<T: CollectionResource>(data: web::Data<AppState>) -> HttpResponse {
    match T::use_case(&data.content).list().await {
        Ok(records) => ApiResponse::success(records),
        Err(e) => content_error_response(T::PLURAL_LABEL, "fetch", e),
    }
}

async fn get_record<T: CollectionResource>(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> HttpResponse {
    match T::use_case(&data.content).get(&path.into_inner()).await {
        Ok(record) => ApiResponse::success(record),
        Err(e) => content_error_response(T::LABEL, "fetch", e),
    }
}

async fn create_record<T: CollectionResource>(
    _admin: AuthenticatedAdmin,
    body: web::Json<Value>,
    data: web::Data<AppState>,
) -> HttpResponse {
    match T::use_case(&data.content).create(body.into_inner()).await {
        Ok(record) => ApiResponse::success(record),
        Err(e) => content_error_response(T::LABEL, "create", e),
    }
}

async fn update_record<T: CollectionResource>(
    _admin: AuthenticatedAdmin,
    path: web::Path<String>,
    body: web::Json<Value>,
    data: web::Data<AppState>,
) -> HttpResponse {
    match T::use_case(&data.content)
        .update(&path.into_inner(), body.into_inner())
        .await
    {
        Ok(record) => ApiResponse::success(record),
        Err(e) => content_error_response(T::LABEL, "update", e),
    }
}

async fn delete_record<T: CollectionResource>(
    _admin: AuthenticatedAdmin,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> HttpResponse {
    match T::use_case(&data.content).delete(&path.into_inner()).await {
        Ok(()) => ApiResponse::acknowledged(),
        Err(e) => content_error_response(T::LABEL, "delete", e),
    }
}
