//! Request helpers

use actix_web::HttpRequest;
use actix_web::http::header::AUTHORIZATION;

use crate::core::pipeline::CallerIdentity;

pub(crate) const CLIENT_ID_HEADER: &str = "x-client-id";
const FORWARDED_FOR_HEADER: &str = "x-forwarded-for";
const REAL_IP_HEADER: &str = "x-real-ip";

fn header<'a>(req: &'a HttpRequest, name: &str) -> Option<&'a str> {
    req.headers().get(name).and_then(|value| value.to_str().ok())
}

/// Caller identity from proxy headers and the socket peer
pub(crate) fn caller_identity(req: &HttpRequest) -> CallerIdentity {
    let peer = req.peer_addr().map(|addr| addr.ip().to_string());
    CallerIdentity::from_parts(
        header(req, CLIENT_ID_HEADER),
        header(req, FORWARDED_FOR_HEADER),
        header(req, REAL_IP_HEADER),
        peer.as_deref(),
    )
}

pub(crate) fn authorization(req: &HttpRequest) -> Option<&str> {
    req.headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
}
