// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use axum::{
    extract::State,
    response::IntoResponse,
    routing::{delete, get, post},
    Json, Router,
};
use std::{
    net::{IpAddr, SocketAddr},
    sync::Arc,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::recipes::{
    clear_cache_handler, full_ingredients_handler, recipe_details_handler, search_recipes_handler,
};
use super::recipes::response::HealthResponse;
use crate::recipes::RecipeService;

#[derive(Clone)]
pub struct AppState {
    pub recipe_service: Arc<RecipeService>,
}

impl AppState {
    pub fn new(recipe_service: Arc<RecipeService>) -> Self {
        Self { recipe_service }
    }
}

/// Build the application router
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health_handler))
        // Search by ingredients (primes the cache)
        .route("/recipes", get(search_recipes_handler))
        // Cached detail lookup
        .route("/recipe_details", post(recipe_details_handler))
        // Fresh detail scrape
        .route("/full_ingredients", post(full_ingredients_handler))
        // Drop every cached recipe
        .route("/cache", delete(clear_cache_handler))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

/// Listen address from a host IP (v4 or v6) and a port
pub fn bind_address(host: &str, port: &str) -> Result<SocketAddr, String> {
    let ip: IpAddr = host
        .trim()
        .parse()
        .map_err(|e| format!("invalid host '{}': {}", host, e))?;
    let port: u16 = port
        .trim()
        .parse()
        .map_err(|e| format!("invalid port '{}': {}", port, e))?;
    Ok(SocketAddr::new(ip, port))
}

pub async fn start_server(
    state: AppState,
    addr: SocketAddr,
) -> Result<(), Box<dyn std::error::Error>> {
    let app = build_router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("API server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

async fn health_handler(State(state): State<AppState>) -> impl IntoResponse {
    let stats = state.recipe_service.cache().stats();
    Json(HealthResponse {
        status: "ok".to_string(),
        version: crate::version::VERSION.to_string(),
        cache_entries: stats.total,
        cache_expired: stats.expired,
        cache_max: stats.max,
    })
}
