pub mod api;
pub mod health;
pub mod modules;
pub mod shared;

pub use modules::auth;
pub use modules::content;
pub use modules::email;
pub use modules::media;

use crate::auth::adapter::outgoing::security::hasher_for;
use crate::auth::adapter::outgoing::session_store_memory::InMemorySessionStore;
use crate::auth::application::domain::entities::AdminCredentials;
use crate::auth::application::ports::outgoing::SessionStore;
use crate::auth::application::use_cases::{
    login_admin::{ILoginAdminUseCase, LoginAdminUseCase},
    logout_admin::{ILogoutAdminUseCase, LogoutAdminUseCase},
    verify_session::{IVerifySessionUseCase, VerifySessionUseCase},
};

use crate::content::application::content_use_cases::{
    json_singleton, ContentUseCases, REQUIRED_DOCUMENTS,
};
use crate::content::application::domain::record::SingletonDocument;
use crate::content::application::ports::incoming::use_cases::SingletonUseCase;

use crate::email::adapter::outgoing::SmtpEmailSender;
use crate::email::application::domain::entities::SmtpConfig;
use crate::email::application::ports::incoming::SendContactMessageUseCase;
use crate::email::application::services::ContactRelayService;

use crate::media::adapter::outgoing::LocalMediaStorage;
use crate::media::application::domain::policies::UploadPolicy;
use crate::media::application::ports::incoming::use_cases::UploadImageUseCase;
use crate::media::application::services::UploadImageService;

use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use anyhow::Context;
use std::env;
use std::path::PathBuf;
use std::sync::Arc;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub login_admin_use_case: Arc<dyn ILoginAdminUseCase + Send + Sync>,
    pub verify_session_use_case: Arc<dyn IVerifySessionUseCase + Send + Sync>,
    pub logout_admin_use_case: Arc<dyn ILogoutAdminUseCase + Send + Sync>,
    pub content: ContentUseCases,
    pub smtp_config_use_case: Arc<dyn SingletonUseCase<SmtpConfig>>,
    pub send_contact_use_case: Arc<dyn SendContactMessageUseCase + Send + Sync>,
    pub upload_image_use_case: Arc<dyn UploadImageUseCase + Send + Sync>,
    pub upload_policy: UploadPolicy,
}

/// Documents that must exist under `DATA_DIR` before the server starts.
pub fn required_documents() -> Vec<&'static str> {
    let mut names = REQUIRED_DOCUMENTS.to_vec();
    names.push(SmtpConfig::FILE_NAME);
    names
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key)
        .ok()
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    // Environtment variable loading
    let env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    // Try .env.{environment} first, then fall back to .env
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    let host = env_or("HOST", "127.0.0.1");
    let port = env_or("PORT", "5000");
    let data_dir = PathBuf::from(env_or("DATA_DIR", "./data"));
    let storage = LocalMediaStorage::from_env();
    let upload_dir = storage.root().to_path_buf();
    tokio::fs::create_dir_all(&upload_dir)
        .await
        .with_context(|| format!("creating {}", upload_dir.display()))?;

    let missing =
        content::adapter::outgoing::missing_documents(&data_dir, &required_documents()).await;
    if !missing.is_empty() {
        anyhow::bail!(
            "missing content documents in {}: {}",
            data_dir.display(),
            missing.join(", ")
        );
    }

    // Session guard
    let credentials = AdminCredentials::from_env().context("admin credentials")?;
    let password_hasher = hasher_for(credentials.scheme());
    let sessions: Arc<dyn SessionStore> = Arc::new(InMemorySessionStore::from_env());

    let login_admin_use_case =
        LoginAdminUseCase::new(credentials, password_hasher, Arc::clone(&sessions));
    let verify_session_use_case = VerifySessionUseCase::new(Arc::clone(&sessions));
    let logout_admin_use_case = LogoutAdminUseCase::new(sessions);

    // Resource store
    let content = ContentUseCases::json_backed(&data_dir);
    let smtp_config_use_case = json_singleton::<SmtpConfig>(&data_dir);

    // Contact relay
    let contact_relay = ContactRelayService::new(
        Arc::new(SmtpEmailSender::new()),
        Arc::clone(&smtp_config_use_case),
        Arc::clone(&content.contact_info),
    )
    .with_recipient(env::var("CONTACT_RECIPIENT").ok());

    // Upload validator
    let upload_policy = UploadPolicy::from_env();
    let upload_image_use_case = UploadImageService::new(storage, upload_policy.clone());

    let state = AppState {
        login_admin_use_case: Arc::new(login_admin_use_case),
        verify_session_use_case: Arc::new(verify_session_use_case),
        logout_admin_use_case: Arc::new(logout_admin_use_case),
        content,
        smtp_config_use_case,
        send_contact_use_case: Arc::new(contact_relay),
        upload_image_use_case: Arc::new(upload_image_use_case),
        upload_policy,
    };

    let server_url = format!("{host}:{port}");
    info!("Server run on: {}", server_url);
    let data_dir = health::DataDir(data_dir);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(data_dir.clone()))
            .app_data(shared::api::custom_json_config())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", api::openapi::ApiDoc::openapi()),
            )
            .service(actix_files::Files::new("/images", upload_dir.clone()))
            .configure(init_routes)
    })
    .bind(server_url)?
    .run()
    .await?;

    Ok(())
}

fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Auth
    cfg.service(crate::auth::adapter::incoming::web::routes::login_admin_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::logout_admin_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::verify_session_handler);
    // Media
    cfg.service(crate::media::adapter::incoming::web::routes::upload_image_handler);
    // Contact relay
    cfg.service(crate::email::adapter::incoming::web::routes::send_contact_handler);
    crate::email::adapter::incoming::web::routes::configure_smtp_config(cfg);
    // Content
    crate::content::adapter::incoming::web::routes::configure_content_routes(cfg);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e:#}");
        std::process::exit(1);
    }
}
