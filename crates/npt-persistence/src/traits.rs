//! Storage trait for the NPT entry collection
//!
//! Backends persist the whole collection at once. There is no per-entry
//! write path: callers load, modify and save the full list.

use async_trait::async_trait;

use crate::model::{NptEntry, StorageMode};

/// Whole-collection storage for NPT entries
#[async_trait]
pub trait EntryStorage: Send + Sync {
    /// Read the full collection
    async fn load(&self) -> anyhow::Result<Vec<NptEntry>>;

    /// Replace the full collection
    async fn save(&self, entries: &[NptEntry]) -> anyhow::Result<()>;

    /// Get the backend kind
    fn storage_mode(&self) -> StorageMode;
}
