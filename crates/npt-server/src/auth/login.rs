use actix_web::{HttpResponse, HttpResponseBuilder, http::StatusCode, post, web};
use serde_json::Value;
use tracing::{debug, warn};

use npt_auth::LoginReply;

use crate::model::{AppState, Envelope, INVALID_JSON_MESSAGE};

/// Relay a login payload to HRIS through the configured proxy policy.
///
/// The body is read raw so that any JSON value reaches the proxy untouched.
/// An empty body is treated as `{}`.
#[post("/login")]
pub async fn login(data: web::Data<AppState>, body: web::Bytes) -> HttpResponse {
    let payload = if body.iter().all(u8::is_ascii_whitespace) {
        Value::Object(Default::default())
    } else {
        match serde_json::from_slice::<Value>(&body) {
            Ok(v) => v,
            Err(e) => {
                warn!(error = %e, "Rejected login request with malformed JSON body");
                return Envelope::http_message(StatusCode::BAD_REQUEST, INVALID_JSON_MESSAGE);
            }
        }
    };

    let proxy = &data.login_proxy;
    let reply = match proxy.login(payload).await {
        Ok(reply) => {
            debug!(mode = %proxy.mode(), status = reply.status, "Login request answered");
            reply
        }
        Err(e) => {
            warn!(mode = %proxy.mode(), kind = %e.kind(), error = %e, "HRIS login failed");
            proxy.reject(&e)
        }
    };

    to_http_response(reply)
}

fn to_http_response(reply: LoginReply) -> HttpResponse {
    let status = StatusCode::from_u16(reply.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    HttpResponseBuilder::new(status).json(reply.body)
}
