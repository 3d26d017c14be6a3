//! Application startup utilities module.

mod http;
mod logging;
mod shutdown;
mod state;

pub use http::{configure_routes, main_server};
pub use logging::{LogRotation, LoggingConfig, LoggingGuard, init_logging};
pub use shutdown::{ShutdownSignal, stop_server, wait_for_shutdown_signal};
pub use state::build_app_state;
