/// Staffing server entry point
///
/// Loads configuration from the environment and starts the HTTP server.

use staffing::{config::Config, server::start_server};

/// Application entry point
///
/// The server provides:
/// - Manager API at /api/v1/manager/*
/// - Programmer API at /api/v1/programmer/*
/// - Project API at /api/v1/project/*
/// - Health check at /healthz
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration (defaults to 0.0.0.0:8080 and data/staffing.db)
    let config = Config::default();

    start_server(config).await?;

    Ok(())
}
