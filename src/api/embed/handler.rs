// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! POST /embeddings HTTP handler.

use axum::extract::State;
use axum::Json;
use tracing::debug;

use crate::api::embed::{EmbeddingRequest, EmbeddingResponse};
use crate::api::http_server::AppState;
use crate::api::ApiError;

/// POST /embeddings handler
///
/// Validates the body, runs the shared model, and returns its vector.
/// Inference happens on the blocking thread pool so a slow model call does
/// not stall the async runtime.
///
/// # Request Body
/// ```json
/// {"text": "hello world"}
/// ```
///
/// # Response Body
/// ```json
/// {"embedding": [0.1, 0.2, ...]}
/// ```
pub async fn embeddings_handler(
    State(state): State<AppState>,
    Json(request): Json<EmbeddingRequest>,
) -> Result<Json<EmbeddingResponse>, ApiError> {
    request.validate()?;

    debug!(chars = request.text.len(), "received text for embedding");

    let model = state.embedder.clone();
    let text = request.text;
    let embedding = tokio::task::spawn_blocking(move || model.embed(&text))
        .await
        .map_err(|e| ApiError::Processing(e.to_string()))?
        .map_err(|e| ApiError::Processing(e.to_string()))?;

    debug!(dimensions = embedding.len(), "generated embedding");

    Ok(Json(EmbeddingResponse { embedding }))
}
