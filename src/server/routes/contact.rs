//! Contact form

use actix_web::{HttpRequest, HttpResponse, web};
use serde::Serialize;
use uuid::Uuid;

use crate::core::leads::LeadSubmission;
use crate::core::rate_limiter::RateLimitScope;
use crate::server::state::AppState;
use crate::server::utils::caller_identity;
use crate::utils::error::Result;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/contact", web::post().to(submit));
}

#[derive(Debug, Serialize)]
struct ContactResponse {
    success: bool,
    id: Uuid,
}

async fn submit(
    state: web::Data<AppState>,
    req: HttpRequest,
    body: web::Json<LeadSubmission>,
) -> Result<HttpResponse> {
    let lead = body.into_inner().into_lead()?;

    let identity = caller_identity(&req);
    state.enforce_rate_limit(RateLimitScope::Contact, identity.network_address())?;

    let id = lead.id;
    state.leads.insert(lead);
    Ok(HttpResponse::Created().json(ContactResponse { success: true, id }))
}
