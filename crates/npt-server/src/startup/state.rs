//! Assembles the shared application state from configuration.

use std::sync::Arc;

use anyhow::Context;
use tracing::info;

use npt_auth::build_login_proxy;
use npt_persistence::{EntryStorage, JsonFileStorage, MemoryStorage, NptEntryService, StorageMode};

use crate::model::{AppState, Configuration};

/// Open the configured entry store and build the login proxy.
///
/// For file storage the data directory and an empty collection file are
/// created here, before the server accepts any request.
pub async fn build_app_state(configuration: Configuration) -> anyhow::Result<AppState> {
    let storage: Arc<dyn EntryStorage> = match configuration.storage_mode()? {
        StorageMode::File => {
            let storage =
                JsonFileStorage::open(configuration.data_dir(), &configuration.data_file())
                    .await
                    .context("Failed to open NPT entry store")?;
            info!(path = %storage.path().display(), "Using JSON file storage");
            Arc::new(storage)
        }
        StorageMode::Memory => {
            info!("Using in-memory storage, entries are lost on restart");
            Arc::new(MemoryStorage::new())
        }
    };

    let hris_config = configuration.hris_config()?;
    info!(mode = %hris_config.mode, url = %hris_config.url, "HRIS login proxy configured");
    let login_proxy = build_login_proxy(hris_config)?;

    Ok(AppState::new(
        configuration,
        Arc::new(NptEntryService::new(storage)),
        login_proxy,
    ))
}
