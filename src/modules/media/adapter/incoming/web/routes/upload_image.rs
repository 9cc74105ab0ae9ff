use actix_multipart::{Field, Multipart, MultipartError};
use actix_web::{post, web, Responder};
use futures::TryStreamExt;
use serde::Deserialize;
use tracing::{error, warn};
use utoipa::ToSchema;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedAdmin;
use crate::media::application::domain::entities::{IncomingFile, StoredImage};
use crate::media::application::ports::incoming::use_cases::{UploadError, UploadImageCommand};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Longest accepted value for the `type` text field.
const MAX_TYPE_FIELD_BYTES: u64 = 64;

/// Multipart body of an image upload
#[allow(dead_code)]
#[derive(Deserialize, ToSchema)]
pub struct UploadForm {
    /// Image bytes (jpeg, png, webp or gif)
    #[schema(value_type = String)]
    file: Vec<u8>,

    /// One of blog, projects, certifications, training, profile
    #[serde(rename = "type")]
    #[schema(example = "blog")]
    upload_type: String,
}

/// Reads a field, keeping at most `cap` bytes. The returned size counts
/// everything the client sent, so an oversized part can still be reported.
async fn read_capped(field: &mut Field, cap: u64) -> Result<(Vec<u8>, u64), MultipartError> {
    let mut buf = Vec::new();
    let mut total: u64 = 0;

    while let Some(chunk) = field.try_next().await? {
        total += chunk.len() as u64;
        if total > cap {
            buf = Vec::new();
            continue;
        }
        buf.extend_from_slice(&chunk);
    }

    Ok((buf, total))
}

async fn read_upload_form(
    mut payload: Multipart,
    max_file_bytes: u64,
) -> Result<UploadImageCommand, MultipartError> {
    let mut command = UploadImageCommand {
        category: String::new(),
        file: None,
    };

    // The admin console sends `file` before `type`, so both orders are read.
    while let Some(mut field) = payload.try_next().await? {
        let name = field.name().unwrap_or_default().to_string();

        match name.as_str() {
            "type" => {
                let (bytes, _) = read_capped(&mut field, MAX_TYPE_FIELD_BYTES).await?;
                command.category = String::from_utf8_lossy(&bytes).trim().to_string();
            }
            "file" if command.file.is_none() => {
                let original_name = field
                    .content_disposition()
                    .and_then(|cd| cd.get_filename())
                    .unwrap_or_default()
                    .to_string();
                let mime_type = field
                    .content_type()
                    .map(|mime| mime.essence_str().to_string())
                    .unwrap_or_default();

                let (bytes, size_bytes) = read_capped(&mut field, max_file_bytes).await?;
                command.file = Some(IncomingFile {
                    original_name,
                    mime_type,
                    bytes,
                    size_bytes,
                });
            }
            _ => {
                read_capped(&mut field, 0).await?;
            }
        }
    }

    Ok(command)
}

/// Upload an image
///
/// Stores an image under the chosen category and returns its public path.
#[utoipa::path(
    post,
    path = "/api/upload",
    tag = "media",
    request_body(content = UploadForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Image stored", body = StoredImage),
        (status = 400, description = "Invalid type, file type, size or missing file", body = ErrorResponse),
        (status = 401, description = "Missing or expired session", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("BearerAuth" = []))
)]
#[post("/api/upload")]
pub async fn upload_image_handler(
    _admin: AuthenticatedAdmin,
    payload: Multipart,
    data: web::Data<AppState>,
) -> impl Responder {
    let command = match read_upload_form(payload, data.upload_policy.max_file_size_bytes).await {
        Ok(command) => command,
        Err(e) => {
            warn!("Malformed multipart upload: {}", e);
            return ApiResponse::bad_request("VALIDATION_ERROR", "Malformed upload");
        }
    };

    match data.upload_image_use_case.execute(command).await {
        Ok(stored) => ApiResponse::success(stored),
        Err(UploadError::InvalidUploadType(_)) => {
            ApiResponse::bad_request("INVALID_UPLOAD_TYPE", "Invalid upload type")
        }
        Err(UploadError::NoFileUploaded) => ApiResponse::bad_request("NO_FILE", "No file uploaded"),
        Err(UploadError::InvalidFileType(e)) => {
            warn!("Rejected upload: {}", e);
            ApiResponse::bad_request(
                "INVALID_FILE_TYPE",
                "Invalid file type. Only images are allowed.",
            )
        }
        Err(UploadError::FileTooLarge { max_bytes }) => ApiResponse::bad_request(
            "FILE_TOO_LARGE",
            &format!(
                "File too large. Maximum size is {}MB",
                max_bytes / (1024 * 1024)
            ),
        ),
        Err(UploadError::StorageError(e)) => {
            error!("Upload storage failed: {}", e);
            ApiResponse::internal_error_with("Failed to store upload")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::adapter::outgoing::LocalMediaStorage;
    use crate::media::application::domain::policies::UploadPolicy;
    use crate::media::application::services::UploadImageService;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use actix_web::{test, App};
    use std::sync::Arc;

    const BOUNDARY: &str = "----portfolio-test-boundary";

    struct Part<'a> {
        name: &'a str,
        file_name: Option<&'a str>,
        content_type: Option<&'a str>,
        body: &'a [u8],
    }

    fn multipart_body(parts: &[Part<'_>]) -> Vec<u8> {
        let mut body = Vec::new();
        for part in parts {
            body.extend_from_slice(format!("--{}\r\n", BOUNDARY).as_bytes());
            match part.file_name {
                Some(file_name) => body.extend_from_slice(
                    format!(
                        "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\n",
                        part.name, file_name
                    )
                    .as_bytes(),
                ),
                None => body.extend_from_slice(
                    format!("Content-Disposition: form-data; name=\"{}\"\r\n", part.name)
                        .as_bytes(),
                ),
            }
            if let Some(content_type) = part.content_type {
                body.extend_from_slice(format!("Content-Type: {}\r\n", content_type).as_bytes());
            }
            body.extend_from_slice(b"\r\n");
            body.extend_from_slice(part.body);
            body.extend_from_slice(b"\r\n");
        }
        body.extend_from_slice(format!("--{}--\r\n", BOUNDARY).as_bytes());
        body
    }

    fn file_part<'a>(file_name: &'a str, content_type: &'a str, body: &'a [u8]) -> Part<'a> {
        Part {
            name: "file",
            file_name: Some(file_name),
            content_type: Some(content_type),
            body,
        }
    }

    fn type_part(value: &str) -> Part<'_> {
        Part {
            name: "type",
            file_name: None,
            content_type: None,
            body: value.as_bytes(),
        }
    }

    async fn post_upload(
        upload_dir: &std::path::Path,
        policy: UploadPolicy,
        parts: &[Part<'_>],
    ) -> (u16, serde_json::Value) {
        let service = UploadImageService::new(LocalMediaStorage::new(upload_dir), policy.clone());
        let (state, token) = TestAppStateBuilder::default()
            .with_upload(Arc::new(service), policy)
            .build_with_admin_session()
            .await;
        let app = test::init_service(App::new().app_data(state).service(upload_image_handler)).await;

        let req = test::TestRequest::post()
            .uri("/api/upload")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .insert_header((
                "Content-Type",
                format!("multipart/form-data; boundary={}", BOUNDARY),
            ))
            .set_payload(multipart_body(parts))
            .to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status().as_u16();
        (status, test::read_body_json(resp).await)
    }

    fn files_under(dir: &std::path::Path) -> usize {
        std::fs::read_dir(dir)
            .map(|entries| {
                entries
                    .flatten()
                    .map(|e| {
                        let path = e.path();
                        if path.is_dir() {
                            files_under(&path)
                        } else {
                            1
                        }
                    })
                    .sum()
            })
            .unwrap_or(0)
    }

    #[actix_web::test]
    async fn test_upload_with_file_before_type() {
        let dir = tempfile::tempdir().unwrap();
        let (status, body) = post_upload(
            dir.path(),
            UploadPolicy::default(),
            &[file_part("shot.PNG", "image/png", b"\x89PNG"), type_part("projects")],
        )
        .await;

        assert_eq!(status, 200);
        let url = body["url"].as_str().unwrap();
        assert!(url.starts_with("/images/projects/"));
        assert!(url.ends_with(".png"));

        let stored = dir.path().join(url.trim_start_matches("/images/"));
        assert_eq!(std::fs::read(stored).unwrap(), b"\x89PNG");
    }

    #[actix_web::test]
    async fn test_path_like_type_is_rejected_and_nothing_written() {
        let dir = tempfile::tempdir().unwrap();
        let (status, body) = post_upload(
            dir.path(),
            UploadPolicy::default(),
            &[type_part("../etc"), file_part("a.png", "image/png", b"x")],
        )
        .await;

        assert_eq!(status, 400);
        assert_eq!(body["error"]["code"], "INVALID_UPLOAD_TYPE");
        assert_eq!(files_under(dir.path()), 0);
    }

    #[actix_web::test]
    async fn test_png_with_html_mime_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let (status, body) = post_upload(
            dir.path(),
            UploadPolicy::default(),
            &[type_part("blog"), file_part("a.png", "text/html", b"<script>")],
        )
        .await;

        assert_eq!(status, 400);
        assert_eq!(body["error"]["code"], "INVALID_FILE_TYPE");
        assert_eq!(files_under(dir.path()), 0);
    }

    #[actix_web::test]
    async fn test_oversized_and_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let policy = UploadPolicy {
            max_file_size_bytes: 4,
            ..UploadPolicy::default()
        };

        let (status, body) = post_upload(
            dir.path(),
            policy.clone(),
            &[file_part("big.gif", "image/gif", b"GIF89a"), type_part("blog")],
        )
        .await;
        assert_eq!(status, 400);
        assert_eq!(body["error"]["code"], "FILE_TOO_LARGE");

        let (status, body) = post_upload(dir.path(), policy, &[type_part("blog")]).await;
        assert_eq!(status, 400);
        assert_eq!(body["error"]["code"], "NO_FILE");
        assert_eq!(files_under(dir.path()), 0);
    }
}
