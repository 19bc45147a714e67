// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! HTTP API integration tests.
//!
//! Routes are exercised against the real router with stub embedders. Tests
//! marked #[ignore] need the ONNX model files on disk.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use likemind_nlp_node::api::http_server::{create_app, AppState};
use likemind_nlp_node::embeddings::{Embedder, EmbedderError, OnnxEmbedder};
use std::sync::Arc;
use tower::ServiceExt; // for `oneshot`

/// Deterministic stand-in for the ONNX model: the vector depends only on
/// the input text, so determinism is observable.
#[derive(Debug)]
struct FixedEmbedder {
    dimensions: usize,
}

impl Embedder for FixedEmbedder {
    fn embed(&self, text: &str) -> Result<Vec<f32>, EmbedderError> {
        let seed = text.len() as f32;
        Ok((0..self.dimensions).map(|i| seed + i as f32).collect())
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn model_name(&self) -> &str {
        "fixed-test-embedder"
    }
}

/// Embedder whose every call fails, for the 500 path.
#[derive(Debug)]
struct FailingEmbedder;

impl Embedder for FailingEmbedder {
    fn embed(&self, _text: &str) -> Result<Vec<f32>, EmbedderError> {
        Err(EmbedderError::Inference("model state corrupted".to_string()))
    }

    fn dimensions(&self) -> usize {
        0
    }

    fn model_name(&self) -> &str {
        "failing-test-embedder"
    }
}

fn test_app(embedder: Arc<dyn Embedder>) -> Router {
    create_app(AppState::new(embedder))
}

fn json_request(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn response_json(response: Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn root_returns_service_identification() {
    let app = test_app(Arc::new(FixedEmbedder { dimensions: 384 }));

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = response_json(response).await;
    assert!(json["message"].as_str().unwrap().contains("LikeMind"));
    assert_eq!(json["status"], "running");
}

#[tokio::test]
async fn health_is_always_healthy() {
    let app = test_app(Arc::new(FixedEmbedder { dimensions: 384 }));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = response_json(response).await;
    assert_eq!(json, serde_json::json!({"status": "healthy"}));
}

#[tokio::test]
async fn embeddings_returns_vector_of_model_dimensions() {
    let app = test_app(Arc::new(FixedEmbedder { dimensions: 384 }));

    let response = app
        .oneshot(json_request("/embeddings", r#"{"text": "hello world"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = response_json(response).await;
    assert_eq!(json["embedding"].as_array().unwrap().len(), 384);
}

#[tokio::test]
async fn embeddings_rejects_body_without_text() {
    let app = test_app(Arc::new(FixedEmbedder { dimensions: 384 }));

    let response = app.oneshot(json_request("/embeddings", "{}")).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = response_json(response).await;
    assert_eq!(json, serde_json::json!({"error": "No text provided"}));
}

#[tokio::test]
async fn embeddings_rejects_empty_text() {
    let app = test_app(Arc::new(FixedEmbedder { dimensions: 384 }));

    let response = app
        .oneshot(json_request("/embeddings", r#"{"text": ""}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = response_json(response).await;
    assert_eq!(json, serde_json::json!({"error": "No text provided"}));
}

#[tokio::test]
async fn identical_text_yields_identical_embeddings() {
    let embedder: Arc<dyn Embedder> = Arc::new(FixedEmbedder { dimensions: 16 });

    let first = test_app(embedder.clone())
        .oneshot(json_request("/embeddings", r#"{"text": "same text"}"#))
        .await
        .unwrap();
    let second = test_app(embedder)
        .oneshot(json_request("/embeddings", r#"{"text": "same text"}"#))
        .await
        .unwrap();

    assert_eq!(response_json(first).await, response_json(second).await);
}

#[tokio::test]
async fn model_failure_is_reported_as_500() {
    let app = test_app(Arc::new(FailingEmbedder));

    let response = app
        .oneshot(json_request("/embeddings", r#"{"text": "hello"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = response_json(response).await;
    assert!(json["error"]
        .as_str()
        .unwrap()
        .contains("model state corrupted"));
}

#[tokio::test]
async fn malformed_json_is_a_client_error() {
    let app = test_app(Arc::new(FixedEmbedder { dimensions: 384 }));

    let response = app
        .oneshot(json_request("/embeddings", "{not json"))
        .await
        .unwrap();

    assert!(response.status().is_client_error());
}

#[tokio::test]
#[ignore] // Requires model files under ./models/all-MiniLM-L6-v2-onnx/
async fn end_to_end_with_real_model() {
    let model = OnnxEmbedder::load(
        "all-MiniLM-L6-v2",
        "./models/all-MiniLM-L6-v2-onnx/model.onnx",
        "./models/all-MiniLM-L6-v2-onnx/tokenizer.json",
    )
    .unwrap();
    let dimensions = model.dimensions();
    let embedder: Arc<dyn Embedder> = Arc::new(model);

    let first = test_app(embedder.clone())
        .oneshot(json_request("/embeddings", r#"{"text": "hello world"}"#))
        .await
        .unwrap();
    assert_eq!(first.status(), StatusCode::OK);
    let first = response_json(first).await;
    assert_eq!(first["embedding"].as_array().unwrap().len(), dimensions);

    let second = test_app(embedder)
        .oneshot(json_request("/embeddings", r#"{"text": "hello world"}"#))
        .await
        .unwrap();
    assert_eq!(first["embedding"], response_json(second).await["embedding"]);
}
