//! JSON file storage backend
//!
//! The collection lives in a single file as one JSON array. Saves write the
//! full array to a sibling temporary file and rename it over the target, so a
//! failed write never leaves a truncated collection behind. Every save gets
//! its own temporary file and saves through one handle run one at a time.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use anyhow::Context;
use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::model::{NptEntry, StorageMode};
use crate::traits::EntryStorage;

const EMPTY_COLLECTION: &str = "[]";

#[derive(Clone, Debug)]
pub struct JsonFileStorage {
    path: PathBuf,
    write_lock: Arc<Mutex<()>>,
    save_seq: Arc<AtomicU64>,
}

impl JsonFileStorage {
    /// Open the store at `dir/file_name`, creating the directory and an
    /// empty collection file if either is missing.
    pub async fn open(dir: impl AsRef<Path>, file_name: &str) -> anyhow::Result<Self> {
        let dir = dir.as_ref();
        tokio::fs::create_dir_all(dir)
            .await
            .with_context(|| format!("failed to create data directory {}", dir.display()))?;

        let path = dir.join(file_name);
        if !tokio::fs::try_exists(&path).await.unwrap_or(false) {
            tokio::fs::write(&path, EMPTY_COLLECTION)
                .await
                .with_context(|| format!("failed to initialize {}", path.display()))?;
            info!(path = %path.display(), "Initialized empty NPT entry store");
        }

        Ok(Self {
            path,
            write_lock: Arc::new(Mutex::new(())),
            save_seq: Arc::new(AtomicU64::new(0)),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// `<file>.<pid>.<seq>.tmp`, unique per save within this process.
    fn temp_path(&self) -> PathBuf {
        let seq = self.save_seq.fetch_add(1, Ordering::Relaxed);
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(format!(".{}.{}.tmp", std::process::id(), seq));
        self.path.with_file_name(name)
    }
}

#[async_trait]
impl EntryStorage for JsonFileStorage {
    async fn load(&self) -> anyhow::Result<Vec<NptEntry>> {
        let raw = tokio::fs::read(&self.path)
            .await
            .with_context(|| format!("failed to read {}", self.path.display()))?;
        let entries: Vec<NptEntry> = serde_json::from_slice(&raw)
            .with_context(|| format!("failed to parse {}", self.path.display()))?;
        debug!(count = entries.len(), "Loaded NPT entries");
        Ok(entries)
    }

    async fn save(&self, entries: &[NptEntry]) -> anyhow::Result<()> {
        let body = serde_json::to_vec_pretty(entries).context("failed to encode NPT entries")?;

        let _guard = self.write_lock.lock().await;
        let temp_path = self.temp_path();
        if let Err(e) = tokio::fs::write(&temp_path, &body).await {
            let _ = tokio::fs::remove_file(&temp_path).await;
            return Err(e).with_context(|| format!("failed to write {}", temp_path.display()));
        }
        if let Err(e) = tokio::fs::rename(&temp_path, &self.path).await {
            let _ = tokio::fs::remove_file(&temp_path).await;
            return Err(e).with_context(|| format!("failed to replace {}", self.path.display()));
        }

        debug!(count = entries.len(), "Saved NPT entries");
        Ok(())
    }

    fn storage_mode(&self) -> StorageMode {
        StorageMode::File
    }
}
