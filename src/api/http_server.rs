// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! HTTP server wiring: shared state, router construction, startup.

use axum::routing::{get, post};
use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::api::embed::embeddings_handler;
use crate::api::handlers::{health_handler, root_handler};
use crate::config::ServerConfig;
use crate::embeddings::Embedder;

/// Shared request state.
///
/// The embedder is loaded once at startup and never mutated afterwards;
/// handlers only clone the `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub embedder: Arc<dyn Embedder>,
}

impl AppState {
    pub fn new(embedder: Arc<dyn Embedder>) -> Self {
        Self { embedder }
    }
}

/// Builds the service router.
pub fn create_app(state: AppState) -> Router {
    Router::new()
        // Service identification
        .route("/", get(root_handler))
        // Health check
        .route("/health", get(health_handler))
        // Embedding endpoint
        .route("/embeddings", post(embeddings_handler))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Binds the configured address and serves until the process exits.
pub async fn start_server(config: &ServerConfig, embedder: Arc<dyn Embedder>) -> anyhow::Result<()> {
    let app = create_app(AppState::new(embedder));

    let addr: SocketAddr = config.listen_addr().parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("API server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
