// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Text embedding engine.
//!
//! Provides the object-safe [`Embedder`] trait and its production
//! implementation, [`OnnxEmbedder`], which runs a sentence transformer
//! through ONNX Runtime.

pub mod onnx_model;
pub mod traits;

pub use onnx_model::OnnxEmbedder;
pub use traits::{Embedder, EmbedderError};
