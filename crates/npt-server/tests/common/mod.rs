//! Common test utilities for integration testing
//!
//! - `test_configuration`: defaults only, no config file or environment
//! - `app_state_*`: state over a chosen storage backend and HRIS config
//! - `init_app`: the production route table wrapped in CORS

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use actix_http::Request;
use actix_web::{
    App,
    body::MessageBody,
    dev::{Service, ServiceResponse},
    test, web,
};
use async_trait::async_trait;
use wiremock::MockServer;

use npt_auth::{HrisConfig, LoginMode, build_login_proxy};
use npt_persistence::{EntryStorage, MemoryStorage, NptEntry, NptEntryService, StorageMode};
use npt_server::{
    AppState, Configuration, middleware::Cors, startup::configure_routes,
};

pub const LOGIN_PATH: &str = "/v1/Login/HrisLogin";
pub const TEST_API_KEY: &str = "test-api-key";
pub const TEST_AUTHORIZATION: &str = "Basic dGVzdDp0ZXN0";

pub fn test_configuration() -> Configuration {
    Configuration::from_config(Configuration::defaults().unwrap().build().unwrap())
}

/// HRIS settings pointing at `server`
pub fn hris_config(server: &MockServer, mode: LoginMode) -> HrisConfig {
    HrisConfig {
        mode,
        url: format!("{}{}", server.uri(), LOGIN_PATH),
        api_key: TEST_API_KEY.to_string(),
        authorization: TEST_AUTHORIZATION.to_string(),
        timeout: Duration::from_millis(500),
    }
}

pub fn app_state_with(storage: Arc<dyn EntryStorage>, hris: HrisConfig) -> Arc<AppState> {
    Arc::new(AppState::new(
        test_configuration(),
        Arc::new(NptEntryService::new(storage)),
        build_login_proxy(hris).unwrap(),
    ))
}

/// In-memory store and a login proxy that is never called
pub fn app_state_in_memory() -> (Arc<AppState>, Arc<MemoryStorage>) {
    let storage = Arc::new(MemoryStorage::new());
    (
        app_state_with(storage.clone(), HrisConfig::default()),
        storage,
    )
}

pub async fn init_app(
    state: Arc<AppState>,
) -> impl Service<Request, Response = ServiceResponse<impl MessageBody>, Error = actix_web::Error> {
    test::init_service(
        App::new()
            .wrap(Cors)
            .app_data(web::Data::from(state))
            .configure(configure_routes),
    )
    .await
}

/// Storage whose reads fail, or whose reads succeed empty and writes fail
pub struct BrokenStorage {
    pub fail_load: bool,
}

#[async_trait]
impl EntryStorage for BrokenStorage {
    async fn load(&self) -> anyhow::Result<Vec<NptEntry>> {
        if self.fail_load {
            anyhow::bail!("disk unreadable");
        }
        Ok(Vec::new())
    }

    async fn save(&self, _entries: &[NptEntry]) -> anyhow::Result<()> {
        anyhow::bail!("disk full")
    }

    fn storage_mode(&self) -> StorageMode {
        StorageMode::File
    }
}
