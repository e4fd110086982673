use anyhow::Result;
use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware,
    routing::{get, post},
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;

use super::error::ApiError;
use super::middleware::require_auth_key;
use super::{names, player, replay};
use crate::store::{Store, StoreSet};

/// Largest accepted upload body.
pub const MAX_UPLOAD_BYTES: usize = 300 * 1024 * 1024;

#[derive(Clone)]
pub struct ApiState {
    pub stores: Arc<StoreSet>,
    pub auth_key: Option<Arc<str>>,
}

impl ApiState {
    pub fn new(stores: StoreSet, auth_key: Option<String>) -> Self {
        Self {
            stores: Arc::new(stores),
            auth_key: auth_key.map(Arc::from),
        }
    }

    /// Resolves the `host` query parameter to a configured store. A missing
    /// host is just another unknown store.
    pub fn store(&self, host: Option<&str>) -> Result<&Arc<dyn Store>, ApiError> {
        let host = host.map(str::trim).unwrap_or_default();
        self.stores
            .get(host)
            .ok_or_else(|| ApiError::UnknownStore(host.to_string()))
    }
}

pub fn router(state: ApiState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let protected_routes = Router::new()
        .route("/replay/upload", post(replay::upload_replay))
        .route("/replay/friendlyname", post(replay::set_friendly_name))
        .layer(middleware::from_fn_with_state(state.clone(), require_auth_key))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES));

    Router::new()
        .route("/api/health", get(health_check))
        .route("/replay/info", get(replay::replay_info))
        .route("/replay/items", get(replay::item_purchases))
        .route("/player/info", get(player::player_info))
        .route("/names/:internal_name", get(names::friendly_name))
        .merge(protected_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run_api_server(addr: &str, state: ApiState) -> Result<()> {
    let app = router(state);

    let listener = TcpListener::bind(addr).await?;
    info!("API server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| anyhow::anyhow!("API server error: {}", e))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received, stopping API server");
}

async fn health_check() -> &'static str {
    "OK"
}
