//! HTTP route modules

pub mod admin;
pub mod ai;
pub mod contact;
pub mod health;

use actix_web::web;

/// Mount every route
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(health::configure_routes)
        .configure(ai::configure_routes)
        .configure(admin::configure_routes)
        .configure(contact::configure_routes);
}
