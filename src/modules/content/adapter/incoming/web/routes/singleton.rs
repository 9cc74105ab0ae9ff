use std::sync::Arc;

use actix_web::{web, HttpResponse};
use serde_json::Value;

use super::content_error_response;
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedAdmin;
use crate::content::application::domain::entities::{ContactInfo, ProfileInfo};
use crate::content::application::domain::record::SingletonDocument;
use crate::content::application::ports::incoming::use_cases::SingletonUseCase;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateMode {
    /// PUT must carry the whole document.
    Replace,
    /// PUT carries only the fields to change.
    Merge,
}

pub trait SingletonResource: SingletonDocument {
    /// Segment under `/api`, e.g. `contact-info`.
    const PATH: &'static str;
    const UPDATE_MODE: UpdateMode;
    /// Reads need a session too.
    const ADMIN_ONLY: bool = false;

    fn use_case(state: &AppState) -> &Arc<dyn SingletonUseCase<Self>>;
}

impl SingletonResource for ContactInfo {
    const PATH: &'static str = "contact-info";
    const UPDATE_MODE: UpdateMode = UpdateMode::Replace;

    fn use_case(state: &AppState) -> &Arc<dyn SingletonUseCase<Self>> {
        &state.content.contact_info
    }
}

impl SingletonResource for ProfileInfo {
    const PATH: &'static str = "profile";
    const UPDATE_MODE: UpdateMode = UpdateMode::Merge;

    fn use_case(state: &AppState) -> &Arc<dyn SingletonUseCase<Self>> {
        &state.content.profile
    }
}

pub fn configure_singleton<T: SingletonResource>(cfg: &mut web::ServiceConfig) {
    let resource = web::resource(format!("/api/{}", T::PATH));
    let resource = if T::ADMIN_ONLY {
        resource.route(web::get().to(get_guarded_document::<T>))
    } else {
        resource.route(web::get().to(get_document::<T>))
    };

    cfg.service(resource.route(web::put().to(update_document::<T>)));
}

async fn load<T: SingletonResource>(data: &AppState) -> HttpResponse {
    match T::use_case(data).get().await {
        Ok(document) => ApiResponse::success(document),
        Err(e) => content_error_response(T::LABEL, "fetch", e),
    }
}

async fn get_document<T: SingletonResource>(data: web::Data<AppState>) -> HttpResponse {
    load::<T>(&data).await
}

async fn get_guarded_document<T: SingletonResource>(
    _admin: AuthenticatedAdmin,
    data: web::Data<AppState>,
) -> HttpResponse {
    load::<T>(&data).await
}

async fn update_document<T: SingletonResource>(
    _admin: AuthenticatedAdmin,
    body: web::Json<Value>,
    data: web::Data<AppState>,
) -> HttpResponse {
    let use_case = T::use_case(&data);
    let result = match T::UPDATE_MODE {
        UpdateMode::Replace => use_case.replace(body.into_inner()).await,
        UpdateMode::Merge => use_case.merge(body.into_inner()).await,
    };

    match result {
        Ok(document) => ApiResponse::success(document),
        Err(e) => content_error_response(T::LABEL, "update", e),
    }
}
