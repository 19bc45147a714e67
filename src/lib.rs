// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod api;
pub mod config;
pub mod embeddings;
pub mod version;

// Re-export main types
pub use api::{create_app, start_server, ApiError, AppState, ErrorResponse};
pub use config::ServerConfig;
pub use embeddings::{Embedder, EmbedderError, OnnxEmbedder};
