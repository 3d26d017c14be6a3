//! NPT Auth - HRIS login proxy
//!
//! This crate provides:
//! - `HrisConfig`: upstream endpoint, static credentials and timeout
//! - `LoginProxy`: one interface over the two login policies
//! - `PassThroughLoginProxy`: relays the JSON body verbatim
//! - `FormLoginProxy`: validates, form-encodes and normalizes the reply

pub mod model;
pub mod service;

pub use model::{HrisConfig, LoginMode, LoginReply};
pub use service::{FormLoginProxy, LoginProxy, PassThroughLoginProxy, build_login_proxy};
