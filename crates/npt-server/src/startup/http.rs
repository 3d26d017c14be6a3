//! HTTP server setup.

use std::{sync::Arc, time::Duration};

use actix_web::{
    App, HttpRequest, HttpServer,
    dev::Server,
    error::{InternalError, JsonPayloadError, PathError},
    http::StatusCode,
    middleware::Logger,
    web,
};

use crate::{
    api, auth,
    middleware::Cors,
    model::{AppState, Envelope, INVALID_ENTRY_ID_MESSAGE, INVALID_JSON_MESSAGE},
};

fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let message = format!("{}: {}", INVALID_JSON_MESSAGE, err);
    let response = Envelope::http_message(StatusCode::BAD_REQUEST, &message);
    InternalError::from_response(err, response).into()
}

fn path_error_handler(err: PathError, _req: &HttpRequest) -> actix_web::Error {
    let response = Envelope::http_message(StatusCode::BAD_REQUEST, INVALID_ENTRY_ID_MESSAGE);
    InternalError::from_response(err, response).into()
}

/// Mount every route along with the extractor settings they rely on.
///
/// JSON bodies are accepted without a `Content-Type` header; malformed bodies
/// and non-integer ids answer 400 in the envelope format.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .content_type_required(false)
            .error_handler(json_error_handler),
    )
    .app_data(web::PathConfig::default().error_handler(path_error_handler))
    .service(api::health::health)
    .service(auth::route::routes())
    .service(api::npt::route::routes());
}

/// Creates and binds the HTTP server.
///
/// OS signals are left to the caller, which stops the server through its
/// handle once a shutdown signal arrives.
pub fn main_server(
    app_state: Arc<AppState>,
    context_path: String,
    address: String,
    port: u16,
    shutdown_timeout: Duration,
) -> Result<Server, std::io::Error> {
    Ok(HttpServer::new(move || {
        App::new()
            .wrap(Cors)
            .wrap(Logger::default())
            .app_data(web::Data::from(app_state.clone()))
            .service(web::scope(&context_path).configure(configure_routes))
    })
    .disable_signals()
    .shutdown_timeout(shutdown_timeout.as_secs())
    .bind((address, port))?
    .run())
}
