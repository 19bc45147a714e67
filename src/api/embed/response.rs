// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! EmbeddingResponse type for the POST /embeddings endpoint.

use serde::{Deserialize, Serialize};

/// Response body for POST /embeddings
///
/// # Example
/// ```json
/// {"embedding": [0.1, 0.2, ...]}
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmbeddingResponse {
    /// The model's aggregate vector for the input text. Length is fixed by
    /// the loaded model.
    pub embedding: Vec<f32>,
}

impl EmbeddingResponse {
    /// Number of dimensions in the returned vector.
    pub fn dimensions(&self) -> usize {
        self.embedding.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_to_embedding_field() {
        let response = EmbeddingResponse {
            embedding: vec![0.25, -0.5, 1.0],
        };

        let json = serde_json::to_string(&response).unwrap();
        assert_eq!(json, r#"{"embedding":[0.25,-0.5,1.0]}"#);
        assert_eq!(response.dimensions(), 3);
    }
}
