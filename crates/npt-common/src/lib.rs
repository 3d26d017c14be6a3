//! NPT Common - Shared types and constants
//!
//! This crate provides the foundational types used across all NPT components:
//! - The error taxonomy shared by the store, the login proxy and the HTTP layer
//! - Common response messages

pub mod error;

// Re-exports for convenience
pub use error::{ErrorKind, NptError};

/// Message returned when an update/delete/get target does not exist
pub const ENTRY_NOT_FOUND_MESSAGE: &str = "Entry not found";

/// Date format used for the `date` field of NPT entries
pub const DATE_FORMAT: &str = "%Y-%m-%d";
