use std::sync::Arc;

use actix_web::web;

use crate::content::adapter::incoming::web::routes::{
    configure_singleton, SingletonResource, UpdateMode,
};
use crate::content::application::ports::incoming::use_cases::SingletonUseCase;
use crate::email::application::domain::entities::SmtpConfig;
use crate::AppState;

impl SingletonResource for SmtpConfig {
    const PATH: &'static str = "smtp-config";
    const UPDATE_MODE: UpdateMode = UpdateMode::Replace;
    // Holds the relay password.
    const ADMIN_ONLY: bool = true;

    fn use_case(state: &AppState) -> &Arc<dyn SingletonUseCase<Self>> {
        &state.smtp_config_use_case
    }
}

/// `GET|PUT /api/smtp-config`, both behind an admin session.
pub fn configure_smtp_config(cfg: &mut web::ServiceConfig) {
    configure_singleton::<SmtpConfig>(cfg);
}
