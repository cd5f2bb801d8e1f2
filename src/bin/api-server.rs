//! Entry engine API server
//!
//! Serves `/health`, `/metrics` and `POST /api/entries` over MEXC market data.
//! Stateless; callers own persistence of the computed entries.

use dipline::config;
use dipline::core::http::start_server;
use dipline::logging;
use dotenvy::dotenv;
use tokio::signal;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    logging::init_logging();

    let port = config::get_port();
    let environment = config::get_environment();
    info!(environment = %environment, port = port, "Starting entry engine API server");

    let server_handle = tokio::spawn(async move {
        if let Err(e) = start_server(port).await {
            error!(error = %e, "HTTP server error");
        }
    });

    tokio::select! {
        _ = signal::ctrl_c() => {
            info!("Shutting down API server...");
        }
        _ = server_handle => {
            error!("HTTP server stopped");
        }
    }

    Ok(())
}
