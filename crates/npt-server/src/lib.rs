// NPT backend server: HRIS login proxy and NPT entry CRUD over HTTP

pub mod api; // NPT entry and health handlers
pub mod auth; // HRIS login endpoint
pub mod error; // AppError and its HTTP mapping
pub mod middleware; // HTTP middleware
pub mod model; // Configuration, app state and response envelope
pub mod startup; // Logging, state assembly, server and shutdown

pub use error::AppError;
pub use model::{AppState, Configuration, Envelope};
