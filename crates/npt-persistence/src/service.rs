//! NPT entry CRUD service
//!
//! Every operation reloads the full collection from the backing store,
//! applies its change in memory and writes the full collection back. Nothing
//! spans the load and the save: two concurrent writers can lose one another's
//! update, but the store always holds a complete collection.

use std::sync::Arc;

use chrono::Local;
use tracing::{debug, error, info, warn};

use npt_common::{DATE_FORMAT, NptError};

use crate::id::IdAllocator;
use crate::model::{EntryListing, NptEntry, NptEntryInput, StorageMode};
use crate::traits::EntryStorage;

pub struct NptEntryService {
    storage: Arc<dyn EntryStorage>,
    ids: IdAllocator,
}

impl std::fmt::Debug for NptEntryService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NptEntryService")
            .field("storage", &self.storage.storage_mode())
            .field("ids", &self.ids)
            .finish()
    }
}

impl NptEntryService {
    pub fn new(storage: Arc<dyn EntryStorage>) -> Self {
        Self {
            storage,
            ids: IdAllocator::new(),
        }
    }

    pub fn storage_mode(&self) -> StorageMode {
        self.storage.storage_mode()
    }

    /// Create an entry from `input`, persisting it with a freshly allocated id.
    pub async fn create(&self, input: NptEntryInput) -> Result<NptEntry, NptError> {
        let mut entries = self.load_strict("create").await?;

        let floor = entries.iter().map(|e| e.id).max().unwrap_or(0);
        let today = Local::now().format(DATE_FORMAT).to_string();
        let entry = input.into_entry(self.ids.next(floor), &today);

        entries.push(entry.clone());
        self.save("create", &entries).await?;

        info!(id = entry.id, "NPT entry created");
        Ok(entry)
    }

    /// List all entries, most recent id first.
    ///
    /// A read failure is logged and yields an empty, degraded listing.
    pub async fn list(&self) -> EntryListing {
        match self.storage.load().await {
            Ok(mut entries) => {
                entries.sort_by(|a, b| b.id.cmp(&a.id));
                EntryListing::complete(entries)
            }
            Err(e) => {
                warn!(error = %format!("{:#}", e), "Failed to read NPT entries, returning empty list");
                EntryListing::degraded()
            }
        }
    }

    pub async fn get(&self, id: i64) -> Result<NptEntry, NptError> {
        self.load_strict("get")
            .await?
            .into_iter()
            .find(|e| e.id == id)
            .ok_or(NptError::NotFound(id))
    }

    /// Merge `patch` into the entry with `id` and persist the collection.
    pub async fn update(&self, id: i64, patch: NptEntryInput) -> Result<NptEntry, NptError> {
        let mut entries = self.load_strict("update").await?;

        let entry = entries
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or(NptError::NotFound(id))?;

        if patch.is_empty() {
            debug!(id, "Update carries no fields, rewriting entry unchanged");
        }
        patch.merge_into(entry);
        let updated = entry.clone();

        self.save("update", &entries).await?;

        info!(id, "NPT entry updated");
        Ok(updated)
    }

    pub async fn delete(&self, id: i64) -> Result<(), NptError> {
        let entries = self.load_strict("delete").await?;
        let before = entries.len();

        let remaining: Vec<NptEntry> = entries.into_iter().filter(|e| e.id != id).collect();
        if remaining.len() == before {
            return Err(NptError::NotFound(id));
        }

        self.save("delete", &remaining).await?;

        info!(id, "NPT entry deleted");
        Ok(())
    }

    async fn load_strict(&self, operation: &str) -> Result<Vec<NptEntry>, NptError> {
        self.storage.load().await.map_err(|e| {
            error!(operation, error = %format!("{:#}", e), "Failed to load NPT entries");
            NptError::Storage(e.to_string())
        })
    }

    async fn save(&self, operation: &str, entries: &[NptEntry]) -> Result<(), NptError> {
        self.storage.save(entries).await.map_err(|e| {
            error!(operation, error = %format!("{:#}", e), "Failed to save NPT entries");
            NptError::Storage(e.to_string())
        })
    }
}
