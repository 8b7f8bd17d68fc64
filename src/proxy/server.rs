// HTTP listener for the proxy endpoints

use super::{ProxyState, shopping::shopping_search, video::video_search};
use crate::config::{AppConfig, Credentials};
use crate::error::{Result, ValueBidError};
use crate::log_info;
use axum::{
    Router,
    http::{Method, header::CONTENT_TYPE},
    routing::get,
};
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::signal::ctrl_c;
use tower_http::cors::{Any, CorsLayer};

pub fn build_router(state: Arc<ProxyState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    Router::new()
        .route("/shopping-search", get(shopping_search))
        .route("/video-search", get(video_search))
        .route("/health", get(health))
        .layer(cors)
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}

/// Bind to the configured address and serve until Ctrl+C or SIGTERM
pub async fn serve(config: &AppConfig, credentials: Credentials) -> Result<()> {
    log_info!("Proxy credentials: {:?}", credentials);

    let state = ProxyState::new(config.upstream.clone(), credentials, config.server.timeout())?;

    let address = config.server.bind_address();
    let listener = TcpListener::bind(&address)
        .await
        .map_err(|e| ValueBidError::Server(format!("Failed to bind {}: {}", address, e)))?;
    log_info!("Proxy listening on {}", address);
    println!("Listening on {}", address);

    serve_on(listener, Arc::new(state), shutdown_signal()).await
}

/// Serve on an already-bound listener until `shutdown` resolves
pub async fn serve_on<F>(listener: TcpListener, state: Arc<ProxyState>, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|e| ValueBidError::Server(format!("Server stopped with error: {}", e)))?;

    log_info!("Proxy shut down");
    Ok(())
}

/// Resolves on Ctrl+C, or SIGTERM on unix
pub async fn shutdown_signal() {
    let interrupt = async {
        match ctrl_c().await {
            Ok(()) => log_info!("Received Ctrl+C, shutting down"),
            Err(_) => std::future::pending::<()>().await,
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};
        match signal(SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
                log_info!("Received terminate signal, shutting down");
            }
            Err(_) => std::future::pending::<()>().await,
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = interrupt => {},
        _ = terminate => {},
    }
}
