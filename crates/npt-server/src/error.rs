// Error handling for the HTTP layer
// Handlers return `AppError`; `NptError` variants are mapped onto status codes
// and the `{success: false, message}` envelope.

use std::fmt::{Display, Formatter};

use actix_web::{HttpResponse, http::StatusCode};
use tracing::debug;

use npt_common::{ENTRY_NOT_FOUND_MESSAGE, NptError};

use crate::model::{Envelope, STORAGE_FAILED_MESSAGE};

// Wrapper for application errors to implement actix-web error handling
#[derive(Debug)]
pub struct AppError {
    inner: anyhow::Error,
}

impl Display for AppError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner)
    }
}

impl From<anyhow::Error> for AppError {
    fn from(value: anyhow::Error) -> Self {
        AppError { inner: value }
    }
}

impl From<NptError> for AppError {
    fn from(value: NptError) -> Self {
        AppError {
            inner: anyhow::Error::new(value),
        }
    }
}

impl actix_web::error::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self.inner.downcast_ref::<NptError>() {
            Some(NptError::Validation(_)) => StatusCode::BAD_REQUEST,
            Some(NptError::NotFound(_)) => StatusCode::NOT_FOUND,
            Some(NptError::UpstreamUnavailable(_)) => StatusCode::SERVICE_UNAVAILABLE,
            Some(NptError::Storage(_)) | Some(NptError::Config(_)) | None => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if let Some(e) = self.inner.downcast_ref::<NptError>() {
            debug!(kind = %e.kind(), status = status.as_u16(), "Request failed");
        }
        match self.inner.downcast_ref::<NptError>() {
            Some(NptError::Validation(message)) => Envelope::http_message(status, message),
            Some(NptError::NotFound(_)) => Envelope::http_message(status, ENTRY_NOT_FOUND_MESSAGE),
            // Storage details stay in the server log
            Some(NptError::Storage(_)) => Envelope::http_message(status, STORAGE_FAILED_MESSAGE),
            Some(e) => Envelope::http_message(status, &e.to_string()),
            None => Envelope::http_message(status, &self.inner.to_string()),
        }
    }
}
