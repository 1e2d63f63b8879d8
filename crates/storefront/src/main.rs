//! Naked Pineapple Cart Storefront - Optimistic cart JSON surface.
//!
//! This binary serves the cart endpoints the storefront UI calls on port 3000.
//!
//! # Architecture
//!
//! - Axum web framework with JSON request and response bodies
//! - Optimistic cart snapshots held in tower-sessions
//! - Cart arithmetic done by the `pineapple-cart` engine
//!
//! It does NOT talk to Shopify: the client layer that does posts the
//! authoritative cart to `/cart/sync`.

#![cfg_attr(not(test), forbid(unsafe_code))]

use pineapple_cart_storefront::build_app;
use pineapple_cart_storefront::config::StorefrontConfig;
use pineapple_cart_storefront::state::AppState;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Load configuration from environment
    let config = StorefrontConfig::from_env().expect("Failed to load configuration");

    // Initialize tracing with EnvFilter
    // Defaults to info level for our crates if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        "pineapple_cart_storefront=info,pineapple_cart=info,tower_http=debug".into()
    });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        default_currency = %config.cart.default_currency,
        "Cart engine configured"
    );

    let state = AppState::new(config.clone());
    let app = build_app(state);

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
