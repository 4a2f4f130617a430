//! AI endpoints: chat, diet generation and quota status

use actix_web::{HttpRequest, HttpResponse, web};
use tracing::debug;

use crate::core::diet::DietRequest;
use crate::core::pipeline::ChatRequest;
use crate::server::state::AppState;
use crate::server::utils::caller_identity;
use crate::utils::error::Result;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/chat", web::post().to(chat))
        .route("/generate-diet", web::post().to(generate_diet))
        .route("/rate-limit-status", web::get().to(rate_limit_status));
}

async fn chat(
    state: web::Data<AppState>,
    req: HttpRequest,
    body: web::Json<ChatRequest>,
) -> Result<HttpResponse> {
    let identity = caller_identity(&req);
    debug!(caller = identity.ai_identifier(), "Chat request");

    let response = state.pipeline.chat(&identity, body.into_inner()).await?;
    Ok(HttpResponse::Ok().json(response))
}

async fn generate_diet(
    state: web::Data<AppState>,
    req: HttpRequest,
    body: web::Json<DietRequest>,
) -> Result<HttpResponse> {
    let identity = caller_identity(&req);
    debug!(caller = identity.ai_identifier(), "Diet generation request");

    let plan = state
        .pipeline
        .generate_diet(&identity, body.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(plan))
}

async fn rate_limit_status(state: web::Data<AppState>, req: HttpRequest) -> HttpResponse {
    let identity = caller_identity(&req);
    HttpResponse::Ok().json(state.pipeline.ai_status(&identity))
}
