//! In-memory storage backend

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::model::{NptEntry, StorageMode};
use crate::traits::EntryStorage;

/// Process-local backing store with the same load/save semantics as the
/// file backend.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RwLock<Vec<NptEntry>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with `entries`
    pub fn with_entries(entries: Vec<NptEntry>) -> Self {
        Self {
            entries: RwLock::new(entries),
        }
    }

    /// Snapshot of the stored collection in storage order
    pub fn snapshot(&self) -> Vec<NptEntry> {
        self.entries.read().clone()
    }
}

#[async_trait]
impl EntryStorage for MemoryStorage {
    async fn load(&self) -> anyhow::Result<Vec<NptEntry>> {
        Ok(self.entries.read().clone())
    }

    async fn save(&self, entries: &[NptEntry]) -> anyhow::Result<()> {
        *self.entries.write() = entries.to_vec();
        Ok(())
    }

    fn storage_mode(&self) -> StorageMode {
        StorageMode::Memory
    }
}
