//! API Server setup

use axum::Router;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::routes::create_router;
use crate::state::{ApiConfig, AppState};

/// Create the API server
pub async fn create_server(
    config: ApiConfig,
) -> Result<(Router, SocketAddr), Box<dyn std::error::Error + Send + Sync>> {
    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    let enable_cors = config.enable_cors;

    let state = AppState::new(config).await?;
    Ok((build_router(state, enable_cors), addr))
}

/// Router with tracing and optional CORS layers
pub fn build_router(state: AppState, enable_cors: bool) -> Router {
    let mut router = create_router(state).layer(TraceLayer::new_for_http());

    if enable_cors {
        router = router.layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        );
    }

    router
}

/// Run the API server
pub async fn run_server(config: ApiConfig) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let (router, addr) = create_server(config).await?;

    tracing::info!(%addr, "Raffle API server listening");

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
