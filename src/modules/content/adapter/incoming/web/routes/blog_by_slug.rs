use actix_web::{get, web, Responder};

use super::content_error_response;
use crate::content::application::domain::entities::Blog;
use crate::content::application::domain::record::CollectionEntity;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/blogs/slug/{slug}")]
pub async fn get_blog_by_slug_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.content.blog_by_slug.execute(&path.into_inner()).await {
        Ok(blog) => ApiResponse::success(blog),
        Err(e) => content_error_response(Blog::LABEL, "fetch", e),
    }
}
