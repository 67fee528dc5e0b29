//! Sakura Keramika Storefront - Public e-commerce site.
//!
//! This binary serves the ceramics shop's single-page storefront on
//! port 3000.
//!
//! # Architecture
//!
//! - Axum web framework with fragment endpoints for cart interactivity
//! - Askama templates for server-side rendering
//! - Static catalog embedded at compile time, loaded once at startup
//! - Markdown content files for the informational sections
//! - In-memory sessions (tower-sessions) holding the cart; nothing is
//!   persisted across restarts

#![cfg_attr(not(test), forbid(unsafe_code))]

use sakura_storefront::config::StorefrontConfig;
use sakura_storefront::{AppState, app};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Load configuration from environment
    let config = StorefrontConfig::from_env().expect("Failed to load configuration");

    // Initialize tracing with EnvFilter
    // Defaults to info level for our crate if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "sakura_storefront=info,tower_http=debug".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Build application state
    // Content is loaded from the storefront crate's `content/` directory
    let content_dir = config.content_dir.clone();
    let state = AppState::new(config.clone(), &content_dir)
        .expect("Failed to initialize application state");

    let app = app(state);

    // Start server
    let addr = config.socket_addr();
    tracing::info!("storefront listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
