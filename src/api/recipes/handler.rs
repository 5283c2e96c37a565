// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Recipe API endpoint handlers

use axum::{
    extract::{rejection::JsonRejection, Query, State},
    Json,
};
use tracing::{debug, info, warn};

use super::request::{RecipeUrlRequest, SearchRecipesQuery};
use super::response::{ClearCacheResponse, RecipesResponse};
use crate::api::errors::ApiError;
use crate::api::http_server::AppState;
use crate::recipes::{FullIngredients, RecipeDetail};

/// GET /recipes - Search recipes by ingredients
///
/// # Request
/// - `q`: Ingredient text, comma or space separated (required)
/// - `limit`: Maximum recipes to return (default 3)
///
/// # Response
/// - `recipes`: Matching recipes; each is also cached for /recipe_details
///
/// # Errors
/// - 400 Bad Request: Empty query or limit over the maximum
pub async fn search_recipes_handler(
    State(state): State<AppState>,
    Query(query): Query<SearchRecipesQuery>,
) -> Result<Json<RecipesResponse>, ApiError> {
    debug!("Recipe search request: {:?}", query.q);

    let service = &state.recipe_service;
    if let Err(e) = query.validate(service.config().max_limit) {
        warn!("Recipe search validation failed: {}", e);
        return Err(e);
    }

    let recipes = service.search(&query.q, query.limit).await?;
    info!("Returning {} recipes for '{}'", recipes.len(), query.q);

    Ok(Json(RecipesResponse { recipes }))
}

/// POST /recipe_details - Cached record for a recipe URL
///
/// # Errors
/// - 400 Bad Request: Body is not JSON, or `recipe_url` is missing, blank or not a string
/// - 404 Not Found: No (unexpired) cache entry for that exact URL
pub async fn recipe_details_handler(
    State(state): State<AppState>,
    payload: Result<Json<RecipeUrlRequest>, JsonRejection>,
) -> Result<Json<RecipeDetail>, ApiError> {
    let Json(request) = payload.map_err(reject_body)?;
    let url = request.url().map_err(ApiError::InvalidRequest)?;

    let entry = state.recipe_service.recipe_details(url)?;
    Ok(Json(entry.data))
}

/// POST /full_ingredients - Freshly scraped ingredients and steps
///
/// Always re-fetches the page. An unreachable page returns empty lists.
///
/// # Errors
/// - 400 Bad Request: Body is not JSON, or `recipe_url` is missing, malformed
///   or not a public http(s) URL
pub async fn full_ingredients_handler(
    State(state): State<AppState>,
    payload: Result<Json<RecipeUrlRequest>, JsonRejection>,
) -> Result<Json<FullIngredients>, ApiError> {
    let Json(request) = payload.map_err(reject_body)?;
    let url = request.url().map_err(ApiError::InvalidRequest)?;

    let full = state.recipe_service.full_ingredients(url).await?;
    info!(
        "Scraped {} ingredients and {} steps from {}",
        full.ingredients.len(),
        full.steps_data.len(),
        url
    );
    Ok(Json(full))
}

/// DELETE /cache - Drop every cached recipe
pub async fn clear_cache_handler(State(state): State<AppState>) -> Json<ClearCacheResponse> {
    let cleared = state.recipe_service.cache().clear();
    info!("Cleared {} cached recipes", cleared);
    Json(ClearCacheResponse { cleared })
}

/// Malformed or mistyped bodies are bad requests, not axum's 415/422
fn reject_body(rejection: JsonRejection) -> ApiError {
    warn!("Rejected request body: {}", rejection.body_text());
    ApiError::InvalidRequest(rejection.body_text())
}
