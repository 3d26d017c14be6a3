//! NPT Persistence - Entry model and storage layer
//!
//! This crate provides:
//! - The NPT entry record and its lenient input form
//! - The `EntryStorage` abstraction over whole-collection load/save
//! - JSON file and in-memory storage backends
//! - `NptEntryService`, the CRUD contract built on load-modify-save

pub mod file;
pub mod id;
pub mod memory;
pub mod model;
pub mod service;
pub mod traits;

// Re-export storage backends
pub use file::JsonFileStorage;
pub use memory::MemoryStorage;

// Re-export the storage trait
pub use traits::EntryStorage;

// Re-export model types
pub use id::IdAllocator;
pub use model::{EntryListing, NptEntry, NptEntryInput, StorageMode};
pub use service::NptEntryService;
