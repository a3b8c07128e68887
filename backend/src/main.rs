mod config;
mod credentials;
mod error;
mod handlers;
mod models;
mod storage;

use anyhow::Context;
use axum::{
    http::Method,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

use config::Config;
use storage::Store;

#[derive(Clone)]
pub struct AppState {
    pub store: Store,
    pub config: Arc<Config>,
}

/// All routes: the JSON API (any origin allowed) plus the static frontend as
/// fallback for every other path.
pub fn create_router(state: AppState) -> Router {
    let cors_permissive = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([axum::http::header::CONTENT_TYPE])
        .allow_origin(tower_http::cors::Any);

    // The doubled /api/api prefix is what deployed frontends call
    let api = Router::new()
        .route("/api/api/register", post(handlers::auth::register))
        .route("/api/api/login", post(handlers::auth::login))
        .route("/api/api/contact", post(handlers::contact::submit_contact))
        .route("/api/users", get(handlers::users::list_users))
        .layer(cors_permissive);

    Router::new()
        .merge(api)
        .fallback(handlers::frontend::serve_frontend)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "portal_backend=debug,tower_http=debug".into()),
        )
        .init();

    // Load config
    let config = Arc::new(
        Config::from_env()
            .map_err(|e| anyhow::anyhow!("{}", e))
            .context("Failed to load configuration")?,
    );
    info!(
        database = ?config.database_path,
        static_root = ?config.static_root,
        "Config loaded successfully"
    );

    // Open the record store; schema failures abort startup
    let store = Store::open(&config.database_path, config.db_pool_size)
        .await
        .context("Failed to initialize database schema")?;

    let state = AppState {
        store: store.clone(),
        config: config.clone(),
    };
    let app = create_router(state);

    // Start HTTP server
    let addr = config.listen_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!("Portal backend listening on {}", addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    store.close().await;
    info!("Shutdown complete");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::warn!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
