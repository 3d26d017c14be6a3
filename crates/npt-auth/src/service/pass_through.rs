use async_trait::async_trait;
use serde_json::{Value, json};
use tracing::info;

use npt_common::NptError;

use super::{LoginProxy, http_client, send_json};
use crate::model::{
    API_KEY_HEADER, AUTHORIZATION_HEADER, HrisConfig, LoginMode, LoginReply,
    UPSTREAM_FAILED_MESSAGE,
};

/// Relays the caller's JSON body to HRIS with the configured static headers
/// and hands the upstream JSON reply back unchanged.
pub struct PassThroughLoginProxy {
    config: HrisConfig,
    http_client: reqwest::Client,
}

impl PassThroughLoginProxy {
    pub fn new(config: HrisConfig) -> anyhow::Result<Self> {
        let http_client = http_client(&config)?;
        Ok(Self {
            config,
            http_client,
        })
    }
}

#[async_trait]
impl LoginProxy for PassThroughLoginProxy {
    async fn login(&self, payload: Value) -> Result<LoginReply, NptError> {
        let request = self
            .http_client
            .post(&self.config.url)
            .header(API_KEY_HEADER, &self.config.api_key)
            .header(AUTHORIZATION_HEADER, &self.config.authorization)
            .json(&payload);

        let (status, body) = send_json(request).await?;
        info!(status, "HRIS login relayed");
        Ok(LoginReply::new(status, body))
    }

    fn reject(&self, _error: &NptError) -> LoginReply {
        LoginReply::new(500, json!({ "error": UPSTREAM_FAILED_MESSAGE }))
    }

    fn mode(&self) -> LoginMode {
        LoginMode::PassThrough
    }
}
