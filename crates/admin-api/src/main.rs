//! Admin console API server: /admin/users, /admin/audit.

use admin_api::server::{self, AppState};
use admin_core::AdminService;
use admin_store::{InMemoryRecordStore, JsonFileRecordStore};
use admin_types::RecordStore;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let store: Arc<dyn RecordStore + Send + Sync> = match std::env::var("ADMIN_DATA_DIR") {
        Ok(dir) => {
            tracing::info!(dir = %dir, "using JSON file store");
            Arc::new(JsonFileRecordStore::new(dir))
        }
        Err(_) => {
            tracing::info!("ADMIN_DATA_DIR not set, using in-memory store");
            Arc::new(InMemoryRecordStore::new())
        }
    };
    let state = Arc::new(AppState {
        service: AdminService::new(store),
    });

    let app = server::router(state);
    let addr: SocketAddr = std::env::var("ADMIN_LISTEN")
        .unwrap_or_else(|_| "0.0.0.0:8002".to_string())
        .parse()?;
    tracing::info!("admin API listening on {}", addr);
    axum::serve(
        tokio::net::TcpListener::bind(addr).await?,
        app.into_make_service(),
    )
    .await?;
    Ok(())
}
