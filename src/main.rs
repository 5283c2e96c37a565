// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use anyhow::{anyhow, Result};
use recipe_scout::{
    api::{bind_address, start_server, AppState},
    recipes::{RecipeConfig, RecipeService},
    version,
};
use std::{env, sync::Arc};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("Starting {}", version::get_version_string());
    info!("Features: {}", version::FEATURES.join(", "));

    // PORT wins so the service runs unchanged on PaaS hosts
    let host = env::var("API_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = env::var("PORT")
        .or_else(|_| env::var("API_PORT"))
        .unwrap_or_else(|_| "8000".to_string());
    let addr = bind_address(&host, &port).map_err(|e| anyhow!(e))?;

    let config = RecipeConfig::from_env();
    info!(
        "Recipe site: {} (cache TTL {}s, max {} entries)",
        config.base_url, config.cache_ttl_secs, config.cache_max_entries
    );

    let service = Arc::new(RecipeService::new(config)?);

    start_server(AppState::new(service), addr)
        .await
        .map_err(|e| anyhow!("server error: {}", e))
}
