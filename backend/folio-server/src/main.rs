use folio_config::Config;
use folio_db::{ProjectRepository, ProjectStore, seed_if_empty};
use folio_server::{AppState, ServerError, build_router, logger};

use std::error::Error;
use std::io::IsTerminal;
use std::sync::Arc;

use log::{error, info};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Load and validate configuration
    let config = Config::load()?;
    config.validate()?;

    // Ensure the log directory exists when logging to a file
    let log_file_path = config.log_file_path()?;
    if let Some(parent) = log_file_path.as_ref().and_then(|p| p.parent()) {
        std::fs::create_dir_all(parent).map_err(|e| ServerError::Io {
            path: parent.display().to_string(),
            source: e,
        })?;
    }

    // Initialize logger (before any other logging)
    let colored = config.logging.colored && std::io::stdout().is_terminal();
    logger::initialize(config.logging.level, log_file_path, colored)?;

    info!("Starting folio-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // Initialize database
    let database_path = config.database_path()?;
    if let Some(parent) = database_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| ServerError::Io {
            path: parent.display().to_string(),
            source: e,
        })?;
    }

    let pool = folio_db::connect(&database_path, config.database.max_connections).await?;
    info!("Database connection established");

    info!("Running database migrations...");
    folio_db::migrate(&pool).await?;
    info!("Migrations complete");

    let store: Arc<dyn ProjectStore> = Arc::new(ProjectRepository::new(pool));

    if config.database.seed_sample_data {
        seed_if_empty(store.as_ref()).await?;
    }

    let app = build_router(AppState::new(store, config.api.page_limits()));

    // Create TCP listener
    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr).await?;

    // Actual address matters when port is 0
    let actual_addr = listener.local_addr()?;
    info!("Server listening on {}", actual_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Graceful shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
        Err(e) => error!("Failed to listen for SIGINT: {}", e),
    }
}
