//! Admin login and lead listing

use actix_web::{HttpRequest, HttpResponse, web};
use serde::Serialize;

use crate::auth::LoginRequest;
use crate::core::leads::Lead;
use crate::core::rate_limiter::RateLimitScope;
use crate::server::state::AppState;
use crate::server::utils::{authorization, caller_identity};
use crate::utils::error::Result;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/auth/login", web::post().to(login))
        .route("/admin/leads", web::get().to(list_leads));
}

#[derive(Debug, Serialize)]
struct LeadsResponse {
    total: usize,
    leads: Vec<Lead>,
}

async fn login(
    state: web::Data<AppState>,
    req: HttpRequest,
    body: web::Json<LoginRequest>,
) -> Result<HttpResponse> {
    let identity = caller_identity(&req);
    state.enforce_rate_limit(RateLimitScope::Auth, identity.network_address())?;

    let response = state.admin.login(body.into_inner()).await?;
    Ok(HttpResponse::Ok().json(response))
}

async fn list_leads(state: web::Data<AppState>, req: HttpRequest) -> Result<HttpResponse> {
    state.admin.authorize(authorization(&req))?;

    let leads = state.leads.list();
    Ok(HttpResponse::Ok().json(LeadsResponse {
        total: leads.len(),
        leads,
    }))
}
