// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use anyhow::Result;
use likemind_nlp_node::{
    api::start_server,
    config::ServerConfig,
    embeddings::OnnxEmbedder,
    version,
};
use std::{env, sync::Arc};
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    let config = ServerConfig::from_env();

    // Initialize tracing subscriber for logging
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", if config.debug { "debug" } else { "info" });
    }
    tracing_subscriber::fmt::init();

    info!("Starting {}", version::get_version_string());
    info!(
        model = %config.model_name,
        path = %config.model_path.display(),
        "loading embedding model"
    );

    let embedder = match OnnxEmbedder::load(
        config.model_name.clone(),
        &config.model_path,
        &config.tokenizer_path,
    ) {
        Ok(model) => Arc::new(model),
        Err(e) => {
            error!("Failed to load embedding model: {:#}", e);
            error!("Point MODEL_PATH and TOKENIZER_PATH at a sentence-transformer ONNX export");
            std::process::exit(1);
        }
    };

    start_server(&config, embedder).await
}
