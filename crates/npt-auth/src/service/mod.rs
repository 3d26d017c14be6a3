//! Login proxy policies
//!
//! Both policies make exactly one upstream request per accepted call and keep
//! no local state.

mod form;
mod pass_through;

use std::sync::Arc;

use anyhow::Context;
use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

use npt_common::NptError;

use crate::model::{HrisConfig, LoginMode, LoginReply};

pub use form::FormLoginProxy;
pub use pass_through::PassThroughLoginProxy;

/// Forwards a credential payload to the HRIS identity endpoint
#[async_trait]
pub trait LoginProxy: Send + Sync {
    /// Forward `payload` upstream and translate the reply.
    ///
    /// Fails with `NptError::Validation` when the payload is rejected before
    /// any upstream call, and with `NptError::UpstreamUnavailable` on
    /// transport failure, timeout or an unusable upstream response.
    async fn login(&self, payload: Value) -> Result<LoginReply, NptError>;

    /// Render a `login` failure in this policy's envelope
    fn reject(&self, error: &NptError) -> LoginReply;

    fn mode(&self) -> LoginMode;
}

/// Build the proxy selected by `config.mode`
pub fn build_login_proxy(config: HrisConfig) -> anyhow::Result<Arc<dyn LoginProxy>> {
    let proxy: Arc<dyn LoginProxy> = match config.mode {
        LoginMode::PassThrough => Arc::new(PassThroughLoginProxy::new(config)?),
        LoginMode::Form => Arc::new(FormLoginProxy::new(config)?),
    };
    Ok(proxy)
}

fn http_client(config: &HrisConfig) -> anyhow::Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(config.timeout)
        .build()
        .context("Failed to create HRIS HTTP client")
}

/// Send `request` and decode a 2xx JSON reply.
///
/// Returns the upstream status with the decoded body. Anything else maps to
/// `NptError::UpstreamUnavailable`.
async fn send_json(request: reqwest::RequestBuilder) -> Result<(u16, Value), NptError> {
    let response = request.send().await.map_err(|e| {
        let reason = if e.is_timeout() {
            "request timed out".to_string()
        } else {
            e.to_string()
        };
        NptError::UpstreamUnavailable(reason)
    })?;

    let status = response.status();
    if !status.is_success() {
        return Err(NptError::UpstreamUnavailable(format!(
            "HRIS responded with status {}",
            status.as_u16()
        )));
    }

    let body = response.json::<Value>().await.map_err(|e| {
        NptError::UpstreamUnavailable(format!("invalid HRIS response body: {}", e))
    })?;

    debug!(status = status.as_u16(), "HRIS login call completed");
    Ok((status.as_u16(), body))
}
