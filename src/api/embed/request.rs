// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! EmbeddingRequest type for the POST /embeddings endpoint.

use crate::api::ApiError;
use serde::{Deserialize, Serialize};

/// Request body for POST /embeddings
///
/// A missing `text` field deserializes to the empty string, so `{}` and
/// `{"text": ""}` are rejected the same way.
///
/// # Example
/// ```json
/// {"text": "hello world"}
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmbeddingRequest {
    /// Text to embed
    #[serde(default)]
    pub text: String,
}

impl EmbeddingRequest {
    /// Rejects absent or empty text.
    ///
    /// Whitespace-only text is accepted; only the empty string fails.
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.text.is_empty() {
            return Err(ApiError::Validation("No text provided".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_text_defaults_to_empty() {
        let req: EmbeddingRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(req.text, "");
    }

    #[test]
    fn empty_text_fails_validation() {
        let req: EmbeddingRequest = serde_json::from_str(r#"{"text": ""}"#).unwrap();

        let err = req.validate().unwrap_err();
        assert_eq!(err.to_string(), "No text provided");
    }

    #[test]
    fn whitespace_only_text_is_accepted() {
        let req = EmbeddingRequest {
            text: "   ".to_string(),
        };
        assert!(req.validate().is_ok());
    }

    #[test]
    fn non_empty_text_passes() {
        let req: EmbeddingRequest = serde_json::from_str(r#"{"text": "hello world"}"#).unwrap();
        assert!(req.validate().is_ok());
        assert_eq!(req.text, "hello world");
    }
}
