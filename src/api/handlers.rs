// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! System handlers: service identification and health.

use axum::Json;
use serde::{Deserialize, Serialize};

/// Response body for GET /
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceInfoResponse {
    pub message: String,
    pub status: String,
}

/// Response body for GET /health
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

/// GET / — service identification payload
pub async fn root_handler() -> Json<ServiceInfoResponse> {
    Json(ServiceInfoResponse {
        message: "LikeMind Connect - Embedding Node".to_string(),
        status: "running".to_string(),
    })
}

/// GET /health — liveness check, healthy unconditionally
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn root_identifies_service() {
        let Json(info) = root_handler().await;
        assert!(info.message.contains("LikeMind"));
        assert_eq!(info.status, "running");
    }

    #[tokio::test]
    async fn health_is_always_healthy() {
        let Json(health) = health_handler().await;
        assert_eq!(health.status, "healthy");
    }
}
