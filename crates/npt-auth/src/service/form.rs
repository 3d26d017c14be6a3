use async_trait::async_trait;
use serde_json::Value;
use tracing::info;

use npt_common::NptError;

use super::{LoginProxy, http_client, send_json};
use crate::model::{
    HrisConfig, LOGIN_FAILED_MESSAGE, LoginMode, LoginReply, MISSING_CREDENTIALS_MESSAGE,
    SERVICE_UNAVAILABLE_MESSAGE,
};

/// Validates `username`/`password`, posts them form-encoded and normalizes
/// the HRIS reply into a `{success, message}` envelope.
pub struct FormLoginProxy {
    config: HrisConfig,
    http_client: reqwest::Client,
}

impl FormLoginProxy {
    pub fn new(config: HrisConfig) -> anyhow::Result<Self> {
        let http_client = http_client(&config)?;
        Ok(Self {
            config,
            http_client,
        })
    }
}

#[async_trait]
impl LoginProxy for FormLoginProxy {
    async fn login(&self, payload: Value) -> Result<LoginReply, NptError> {
        let (Some(username), Some(password)) = (
            credential(&payload, "username"),
            credential(&payload, "password"),
        ) else {
            return Err(NptError::Validation(MISSING_CREDENTIALS_MESSAGE.to_string()));
        };

        let request = self
            .http_client
            .post(&self.config.url)
            .form(&[("username", username.as_str()), ("password", password.as_str())]);

        let (_, body) = send_json(request).await?;
        let reply = interpret(&body);
        info!(username = %username, success = reply.is_success(), "HRIS form login completed");
        Ok(reply)
    }

    fn reject(&self, error: &NptError) -> LoginReply {
        match error {
            NptError::Validation(message) => LoginReply::envelope(400, false, message.clone()),
            _ => LoginReply::envelope(500, false, SERVICE_UNAVAILABLE_MESSAGE),
        }
    }

    fn mode(&self) -> LoginMode {
        LoginMode::Form
    }
}

/// Truthy string or number field of the request body, as text
fn credential(payload: &Value, key: &str) -> Option<String> {
    match payload.get(key)? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        v @ Value::Number(_) if is_truthy(v) => Some(v.to_string()),
        _ => None,
    }
}

/// Map the HRIS reply onto the normalized envelope.
///
/// A truthy `Success` wins over a truthy `error`; neither is a plain failure.
fn interpret(body: &Value) -> LoginReply {
    if let Some(message) = body.get("Success").filter(|v| is_truthy(v)) {
        return LoginReply::envelope(200, true, message_text(message));
    }
    if let Some(message) = body.get("error").filter(|v| is_truthy(v)) {
        return LoginReply::envelope(401, false, message_text(message));
    }
    LoginReply::envelope(401, false, LOGIN_FAILED_MESSAGE)
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn message_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
