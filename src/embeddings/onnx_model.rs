// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! ONNX embedding model wrapper.
//!
//! Runs a sentence-transformer model (all-MiniLM-L6-v2 class) through ONNX
//! Runtime: BERT tokenization, transformer forward pass, then mean pooling
//! of token embeddings weighted by the attention mask. The pooled vector is
//! the model's aggregate representation of the whole text.

use anyhow::{Context, Result};
use ndarray::{Array2, Axis};
use ort::execution_providers::CPUExecutionProvider;
use ort::session::builder::GraphOptimizationLevel;
use ort::session::Session;
use ort::value::Value;
use std::path::Path;
use std::sync::Mutex;
use tokenizers::Tokenizer;
use tracing::info;

use super::traits::{Embedder, EmbedderError};

/// Sentence-transformer model executed through ONNX Runtime.
///
/// The output dimensionality is discovered by a probe inference at load
/// time rather than hardcoded, so any sentence-transformer export with a
/// `[batch, seq, hidden]` output works.
pub struct OnnxEmbedder {
    /// ONNX Runtime session. Inference takes `&mut Session` in ort 2.0, so
    /// concurrent requests serialise on this lock.
    session: Mutex<Session>,

    /// BERT tokenizer
    tokenizer: Tokenizer,

    /// Model name (e.g., "all-MiniLM-L6-v2")
    model_name: String,

    /// Output dimension, discovered at load time
    dimensions: usize,
}

impl std::fmt::Debug for OnnxEmbedder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OnnxEmbedder")
            .field("model_name", &self.model_name)
            .field("dimensions", &self.dimensions)
            .finish_non_exhaustive()
    }
}

impl OnnxEmbedder {
    /// Loads the model and tokenizer from disk.
    ///
    /// Runs one probe inference to verify the model produces token-level
    /// embeddings and to record the hidden size as the output dimension.
    ///
    /// # Errors
    /// Returns an error if either file is missing, the session or tokenizer
    /// fails to initialize, or the probe output is not `[batch, seq, hidden]`.
    pub fn load<P: AsRef<Path>>(
        model_name: impl Into<String>,
        model_path: P,
        tokenizer_path: P,
    ) -> Result<Self> {
        let model_name = model_name.into();
        let model_path = model_path.as_ref();
        let tokenizer_path = tokenizer_path.as_ref();

        if !model_path.exists() {
            anyhow::bail!("ONNX model file not found: {}", model_path.display());
        }
        if !tokenizer_path.exists() {
            anyhow::bail!("Tokenizer file not found: {}", tokenizer_path.display());
        }

        let mut session = Session::builder()
            .context("Failed to create session builder")?
            .with_execution_providers([CPUExecutionProvider::default().build()])
            .context("Failed to set CPU execution provider")?
            .with_optimization_level(GraphOptimizationLevel::Level3)
            .context("Failed to set optimization level")?
            .with_intra_threads(4)
            .context("Failed to set intra threads")?
            .commit_from_file(model_path)
            .with_context(|| format!("Failed to load ONNX model from {}", model_path.display()))?;

        let tokenizer = Tokenizer::from_file(tokenizer_path)
            .map_err(|e| anyhow::anyhow!("Failed to load tokenizer: {}", e))?;

        let probe = tokenizer
            .encode("dimension probe", true)
            .map_err(|e| anyhow::anyhow!("Tokenizer self-test failed: {}", e))?;
        let dimensions =
            forward(&mut session, probe.get_ids(), probe.get_attention_mask())?.len();

        info!(model = %model_name, dimensions, "embedding model loaded");

        Ok(Self {
            session: Mutex::new(session),
            tokenizer,
            model_name,
            dimensions,
        })
    }
}

impl Embedder for OnnxEmbedder {
    fn embed(&self, text: &str) -> Result<Vec<f32>, EmbedderError> {
        let encoding = self
            .tokenizer
            .encode(text, true)
            .map_err(|e| EmbedderError::Tokenization(e.to_string()))?;

        let vector = {
            let mut session = self
                .session
                .lock()
                .map_err(|_| EmbedderError::Inference("model session lock poisoned".into()))?;
            forward(&mut session, encoding.get_ids(), encoding.get_attention_mask())?
        };

        if vector.len() != self.dimensions {
            return Err(EmbedderError::DimensionMismatch {
                expected: self.dimensions,
                got: vector.len(),
            });
        }

        Ok(vector)
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn model_name(&self) -> &str {
        &self.model_name
    }
}

/// Runs the transformer and mean-pools token embeddings into one vector.
fn forward(
    session: &mut Session,
    ids: &[u32],
    attention_mask: &[u32],
) -> Result<Vec<f32>, EmbedderError> {
    let seq_len = ids.len();

    let input_ids: Vec<i64> = ids.iter().map(|&id| id as i64).collect();
    let mask: Vec<i64> = attention_mask.iter().map(|&m| m as i64).collect();
    let token_type_ids = vec![0i64; seq_len]; // single segment

    let input_ids = Array2::from_shape_vec((1, seq_len), input_ids)
        .map_err(|e| EmbedderError::Inference(e.to_string()))?;
    let mask_array = Array2::from_shape_vec((1, seq_len), mask)
        .map_err(|e| EmbedderError::Inference(e.to_string()))?;
    let token_types = Array2::from_shape_vec((1, seq_len), token_type_ids)
        .map_err(|e| EmbedderError::Inference(e.to_string()))?;

    let input_ids =
        Value::from_array(input_ids).map_err(|e| EmbedderError::Inference(e.to_string()))?;
    let mask_array =
        Value::from_array(mask_array).map_err(|e| EmbedderError::Inference(e.to_string()))?;
    let token_types =
        Value::from_array(token_types).map_err(|e| EmbedderError::Inference(e.to_string()))?;

    let outputs = session
        .run(ort::inputs![
            "input_ids" => input_ids,
            "attention_mask" => mask_array,
            "token_type_ids" => token_types
        ])
        .map_err(|e| EmbedderError::Inference(e.to_string()))?;

    // Index [0] instead of a name: output names vary between exports.
    let output = outputs[0]
        .try_extract_array::<f32>()
        .map_err(|e| EmbedderError::Inference(e.to_string()))?;

    let shape = output.shape();
    if shape.len() != 3 {
        return Err(EmbedderError::Inference(format!(
            "model output has unexpected shape {:?} (expected [batch, seq_len, hidden])",
            shape
        )));
    }

    // [batch, seq_len, hidden] -> mean over the sequence axis, counting
    // only positions the attention mask keeps.
    let token_embeddings = output.index_axis(Axis(0), 0);
    let hidden = token_embeddings.shape()[1];

    let mut pooled = vec![0.0f32; hidden];
    let mut kept = 0.0f32;

    for (row, &m) in token_embeddings.outer_iter().zip(attention_mask) {
        if m == 0 {
            continue; // padding
        }
        kept += 1.0;
        for (acc, &v) in pooled.iter_mut().zip(row.iter()) {
            *acc += v;
        }
    }

    if kept == 0.0 {
        return Err(EmbedderError::Inference(
            "attention mask kept no tokens".to_string(),
        ));
    }
    for v in &mut pooled {
        *v /= kept;
    }

    Ok(pooled)
}
