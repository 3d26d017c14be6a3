//! Error types for the NPT backend
//!
//! This module defines:
//! - `NptError`: Application-specific error enum
//! - `ErrorKind`: Stable error classification for logs

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::ENTRY_NOT_FOUND_MESSAGE;

/// Application-specific error types
#[derive(thiserror::Error, Debug)]
pub enum NptError {
    /// Required request fields are missing
    #[error("{0}")]
    Validation(String),

    /// No entry with the given id exists
    #[error("{}", ENTRY_NOT_FOUND_MESSAGE)]
    NotFound(i64),

    /// The backing store could not be read or written
    #[error("storage error: {0}")]
    Storage(String),

    /// The upstream identity service failed or could not be reached
    #[error("upstream unavailable: {0}")]
    UpstreamUnavailable(String),

    #[error("configuration error: {0}")]
    Config(String),
}

impl NptError {
    /// Stable kind name used in structured log fields
    pub fn kind(&self) -> ErrorKind {
        match self {
            NptError::Validation(_) => ErrorKind::Validation,
            NptError::NotFound(_) => ErrorKind::NotFound,
            NptError::Storage(_) => ErrorKind::Storage,
            NptError::UpstreamUnavailable(_) => ErrorKind::UpstreamUnavailable,
            NptError::Config(_) => ErrorKind::Config,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ErrorKind {
    Validation,
    NotFound,
    Storage,
    UpstreamUnavailable,
    Config,
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ErrorKind::Validation => "validation",
            ErrorKind::NotFound => "not_found",
            ErrorKind::Storage => "storage",
            ErrorKind::UpstreamUnavailable => "upstream_unavailable",
            ErrorKind::Config => "config",
        };
        f.write_str(name)
    }
}
