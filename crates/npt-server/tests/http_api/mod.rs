//! HTTP API integration tests

pub mod login_api_test;
pub mod npt_entry_api_test;
