use std::{future::Future, net::SocketAddr};

use axum::Router;
use common::utils::logging::{init_logging, LogFormat};
use configs::AppConfig;
use migration::MigratorTrait;
use sea_orm::DatabaseConnection;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::routes;
use crate::state::ServerState;

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

pub fn log_format(cfg: &AppConfig) -> LogFormat {
    if cfg.logging.json { LogFormat::Json } else { LogFormat::Compact }
}

/// Install the global subscriber in the format `cfg` asks for. Must run once,
/// after the configuration is loaded and before anything logs.
pub fn init_logging_for(cfg: &AppConfig) {
    init_logging(log_format(cfg));
}

/// Open the pool and make sure the `app_ads` table exists.
pub async fn prepare_database(cfg: &AppConfig) -> anyhow::Result<DatabaseConnection> {
    let db = models::db::connect_with_config(&cfg.database).await?;
    migration::Migrator::up(&db, None).await?;
    info!(event = "migrations_applied", "database schema ready");
    Ok(db)
}

pub fn build_app(db: DatabaseConnection) -> Router {
    routes::build_router(ServerState::new(db), build_cors())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "cannot listen for Ctrl+C; running until killed");
        std::future::pending::<()>().await;
    }
    info!(event = "shutdown_signal", "received Ctrl+C, shutting down");
}

/// Serve until `shutdown` resolves, then close the pool.
pub async fn serve<F>(cfg: AppConfig, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let db = prepare_database(&cfg).await?;
    let app = build_app(db.clone());

    let addr: SocketAddr = cfg.server.bind_addr().parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "listening");

    axum::serve(listener, app).with_graceful_shutdown(shutdown).await?;

    db.close().await?;
    info!(event = "pool_closed", "database pool closed");
    Ok(())
}

/// Public entry: run the HTTP server until Ctrl+C.
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    serve(cfg, shutdown_signal()).await
}
