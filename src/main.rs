//! AHP Sherpa HTTP server.

use std::sync::Arc;

use tokio::signal;
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use ahp_sherpa::adapters::{build_router, FileRunStore, InMemoryRunStore, RunHandlers};
use ahp_sherpa::config::{AppConfig, StorageBackend};
use ahp_sherpa::ports::RunStore;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    init_tracing(&config);

    let store: Arc<dyn RunStore> = match config.storage.backend {
        StorageBackend::Memory => Arc::new(InMemoryRunStore::new()),
        StorageBackend::File => Arc::new(FileRunStore::new(&config.storage.data_dir)),
    };
    info!(
        backend = ?config.storage.backend,
        data_dir = %config.storage.data_dir.display(),
        conflict_policy = ?config.ahp.conflict_policy,
        "Run store ready"
    );

    let handlers = RunHandlers::new(store, config.ahp.conflict_policy);
    let router = build_router(handlers, &config.server);

    let addr = config.server.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, environment = ?config.server.environment, "AHP Sherpa listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("AHP Sherpa stopped");
    Ok(())
}

/// JSON lines in production, human-readable output otherwise.
/// `RUST_LOG` overrides the configured filter.
fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| config.server.log_filter())
        .unwrap_or_else(|_| EnvFilter::new("info"));

    if config.is_production() {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

async fn shutdown_signal() {
    match signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => {
            tracing::warn!(error = %e, "Cannot listen for shutdown signal");
            std::future::pending::<()>().await;
        }
    }
}
