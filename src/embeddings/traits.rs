// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Embedder trait definition.
//!
//! The HTTP layer holds the model as `Arc<dyn Embedder>` so the ONNX
//! implementation can be swapped for a stub in tests.

use std::fmt::Debug;
use thiserror::Error;

/// Errors that can occur while turning text into a vector.
#[derive(Debug, Error)]
pub enum EmbedderError {
    /// The tokenizer rejected the input text
    #[error("Tokenization failed: {0}")]
    Tokenization(String),

    /// Model inference failed
    #[error("Inference failed: {0}")]
    Inference(String),

    /// The model returned a vector of the wrong length
    #[error("Model produced {got} dimensions, expected {expected}")]
    DimensionMismatch { expected: usize, got: usize },
}

/// A loaded text-to-vector model.
///
/// Implementations are shared read-only across requests; `embed` must be
/// callable from any thread.
pub trait Embedder: Send + Sync + Debug {
    /// Generate the aggregate embedding for a single text.
    fn embed(&self, text: &str) -> Result<Vec<f32>, EmbedderError>;

    /// Fixed output dimensionality of this model.
    fn dimensions(&self) -> usize;

    /// Model name (e.g., "all-MiniLM-L6-v2").
    fn model_name(&self) -> &str;
}
