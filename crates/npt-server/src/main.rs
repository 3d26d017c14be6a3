//! Main entry point for the NPT backend server.

use std::sync::Arc;

use npt_server::{model::Configuration, startup};
use tracing::{error, info};

#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let configuration = Configuration::new()?;

    let logging_config = configuration.logging_config();
    let _logging_guard = startup::init_logging(&logging_config)?;

    let server_address = configuration.server_address();
    let server_port = configuration.server_port();
    let context_path = configuration.server_context_path();
    let shutdown_timeout = configuration.shutdown_timeout();

    let app_state = match startup::build_app_state(configuration).await {
        Ok(state) => Arc::new(state),
        Err(e) => {
            error!(error = %format!("{:#}", e), "Failed to initialize application state");
            return Err(e.into());
        }
    };

    let shutdown_signal = startup::wait_for_shutdown_signal();

    info!(
        address = %server_address,
        port = server_port,
        storage = %app_state.npt_entry_service.storage_mode(),
        "Starting NPT server"
    );
    let server = startup::main_server(
        app_state,
        context_path,
        server_address,
        server_port,
        shutdown_timeout,
    )?;
    let handle = server.handle();

    tokio::select! {
        result = server => {
            if let Err(e) = result {
                error!("Server error: {}", e);
                return Err(e.into());
            }
        }
        _ = shutdown_signal.recv() => {
            startup::stop_server(handle, shutdown_timeout).await;
        }
    }

    info!("NPT server shutdown complete");
    Ok(())
}
