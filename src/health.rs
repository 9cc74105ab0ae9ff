use actix_web::{get, web, HttpResponse, Responder};
use serde::Serialize;
use std::path::PathBuf;

use crate::content::adapter::outgoing::missing_documents;

/// Directory holding the JSON content documents.
#[derive(Debug, Clone)]
pub struct DataDir(pub PathBuf);

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

#[derive(Serialize)]
struct ReadinessResponse {
    status: &'static str,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    missing_documents: Vec<String>,
}

/// LIVENESS PROBE
/// - No I/O
#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse { status: "ok" })
}

/// READINESS PROBE
/// - Every required singleton document is present
#[get("/ready")]
pub async fn readiness(data_dir: web::Data<DataDir>) -> impl Responder {
    let missing = missing_documents(&data_dir.0, &crate::required_documents()).await;

    if missing.is_empty() {
        HttpResponse::Ok().json(ReadinessResponse {
            status: "ok",
            missing_documents: missing,
        })
    } else {
        HttpResponse::ServiceUnavailable().json(ReadinessResponse {
            status: "unhealthy",
            missing_documents: missing,
        })
    }
}
