/// Server setup and initialization
///
/// Wires together the database, the three coordinators and the HTTP routes.

use crate::{
    api::{create_manager_routes, create_programmer_routes, create_project_routes, AppState},
    config::Config,
    coordinator::{ManagerCoordinator, ProgrammerCoordinator, ProjectCoordinator},
    store::Database,
};
use anyhow::Result;
use axum::{routing::get, Router};
use tokio::net::TcpListener;

/// Create the main Axum application backed by the configured database file
pub async fn create_app(config: Config) -> Result<Router> {
    tracing::info!("📁 Ensuring data directory exists: {}", config.database.data_dir);
    std::fs::create_dir_all(&config.database.data_dir)
        .map_err(|e| anyhow::anyhow!("Failed to create data directory: {}", e))?;

    let database = Database::open(&config.database.database_path())
        .await
        .map_err(|e| anyhow::anyhow!("Failed to open staffing database: {}", e))?;

    let app = build_router(database);
    tracing::info!("✅ Application initialized successfully");

    Ok(app)
}

/// Build the router over an already opened database
///
/// The project coordinator receives its own handles to the manager and
/// programmer coordinators so link writes stay with the owning side.
pub fn build_router(database: Database) -> Router {
    tracing::info!("🏗️ Creating coordinators");
    let managers = ManagerCoordinator::new(database.clone());
    let programmers = ProgrammerCoordinator::new(database.clone());
    let projects = ProjectCoordinator::new(database, managers.clone(), programmers.clone());

    let state = AppState {
        managers,
        programmers,
        projects,
    };

    tracing::info!("📡 Creating HTTP router with all endpoints");
    Router::new()
        // Health check endpoint
        .route("/healthz", get(health_check))
        .merge(create_manager_routes())
        .merge(create_programmer_routes())
        .merge(create_project_routes())
        .with_state(state)
}

/// Start the HTTP server with the given configuration
pub async fn start_server(config: Config) -> Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_thread_ids(true)
        .with_level(true)
        .init();

    tracing::info!("Starting staffing server...");

    let app = create_app(config.clone()).await?;

    let bind_addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&bind_addr).await?;

    tracing::info!("Server listening on http://{}", bind_addr);

    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}

async fn health_check() -> &'static str {
    "ok"
}
