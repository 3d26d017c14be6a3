//! HTTP response envelope
//!
//! Every NPT endpoint answers with `{success, message?, data?}`.

use actix_web::{HttpResponse, HttpResponseBuilder, http::StatusCode};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T: Serialize> Envelope<T> {
    pub fn success(data: T) -> Self {
        Envelope {
            success: true,
            message: None,
            data: Some(data),
        }
    }

    pub fn success_with_message(message: &str, data: T) -> Self {
        Envelope {
            success: true,
            message: Some(message.to_string()),
            data: Some(data),
        }
    }

    pub fn http_response(status: StatusCode, envelope: Envelope<T>) -> HttpResponse {
        HttpResponseBuilder::new(status).json(envelope)
    }
}

impl Envelope<()> {
    pub fn message(success: bool, message: &str) -> Self {
        Envelope {
            success,
            message: Some(message.to_string()),
            data: None,
        }
    }

    pub fn http_message(status: StatusCode, message: &str) -> HttpResponse {
        HttpResponseBuilder::new(status).json(Envelope::message(status.is_success(), message))
    }
}
