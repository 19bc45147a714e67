// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Environment-driven server configuration, read once at startup.

use std::env;
use std::path::PathBuf;

/// Runtime configuration for the node.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// HTTP listen port (`PORT`, default 8000)
    pub port: u16,

    /// Verbose logging toggle (`DEBUG`, default false)
    pub debug: bool,

    /// Deployment secret (`SECRET_KEY`). No endpoint reads it.
    pub secret_key: Option<String>,

    /// Embedding model name (`MODEL_NAME`)
    pub model_name: String,

    /// Path to the ONNX model file (`MODEL_PATH`)
    pub model_path: PathBuf,

    /// Path to the tokenizer JSON file (`TOKENIZER_PATH`)
    pub tokenizer_path: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8000,
            debug: false,
            secret_key: None,
            model_name: "all-MiniLM-L6-v2".to_string(),
            model_path: PathBuf::from("./models/all-MiniLM-L6-v2-onnx/model.onnx"),
            tokenizer_path: PathBuf::from("./models/all-MiniLM-L6-v2-onnx/tokenizer.json"),
        }
    }
}

impl ServerConfig {
    /// Reads configuration from environment variables, falling back to
    /// defaults for anything unset or unparseable.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let port = env::var("PORT")
            .ok()
            .and_then(|v| v.parse::<u16>().ok())
            .unwrap_or(defaults.port);

        let debug = env::var("DEBUG")
            .map(|v| v.to_lowercase() == "true" || v == "1")
            .unwrap_or(defaults.debug);

        let secret_key = env::var("SECRET_KEY").ok();

        let model_name = env::var("MODEL_NAME").unwrap_or(defaults.model_name);

        let model_path = env::var("MODEL_PATH")
            .map(PathBuf::from)
            .unwrap_or(defaults.model_path);

        let tokenizer_path = env::var("TOKENIZER_PATH")
            .map(PathBuf::from)
            .unwrap_or(defaults.tokenizer_path);

        Self {
            port,
            debug,
            secret_key,
            model_name,
            model_path,
            tokenizer_path,
        }
    }

    /// Socket address string the server binds to.
    pub fn listen_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}
