//! Health check endpoint

use actix_web::{HttpResponse, web};
use serde::Serialize;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check));
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct HealthStatus {
    status: &'static str,
    version: &'static str,
    git_hash: &'static str,
}

/// Liveness probe; touches no upstream service
pub async fn health_check() -> HttpResponse {
    let build = crate::build_info();
    HttpResponse::Ok().json(HealthStatus {
        status: "ok",
        version: build.version,
        git_hash: build.git_hash,
    })
}
