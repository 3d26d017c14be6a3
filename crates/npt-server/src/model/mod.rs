//! Data models module
//!
//! - `constants` - Configuration keys, defaults and response messages
//! - `config` - Configuration management
//! - `response` - The `{success, message, data}` response envelope
//! - `app_state` - Application state shared across handlers

pub mod app_state;
pub mod config;
pub mod constants;
pub mod response;

pub use app_state::AppState;
pub use config::Configuration;
pub use constants::*;
pub use response::Envelope;
