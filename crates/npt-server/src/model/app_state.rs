//! Application state shared across all handlers

use std::sync::Arc;

use npt_auth::LoginProxy;
use npt_persistence::NptEntryService;

use super::config::Configuration;

pub struct AppState {
    pub configuration: Configuration,
    pub npt_entry_service: Arc<NptEntryService>,
    pub login_proxy: Arc<dyn LoginProxy>,
}

impl AppState {
    pub fn new(
        configuration: Configuration,
        npt_entry_service: Arc<NptEntryService>,
        login_proxy: Arc<dyn LoginProxy>,
    ) -> Self {
        Self {
            configuration,
            npt_entry_service,
            login_proxy,
        }
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("configuration", &self.configuration)
            .field("npt_entry_service", &self.npt_entry_service)
            .field("login_mode", &self.login_proxy.mode())
            .finish()
    }
}
