use actix_web::{HttpResponse, get, http::StatusCode};

use crate::model::Envelope;

/// Liveness check. Touches neither the store nor the upstream.
#[get("/health")]
pub async fn health() -> HttpResponse {
    Envelope::http_message(StatusCode::OK, "ok")
}
