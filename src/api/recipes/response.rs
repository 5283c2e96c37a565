// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Recipe API response types

use serde::{Deserialize, Serialize};

use crate::recipes::RecipeDetail;

/// Response body for GET /recipes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipesResponse {
    pub recipes: Vec<RecipeDetail>,
}

/// Response body for GET /health
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub cache_entries: usize,
    pub cache_expired: usize,
    pub cache_max: usize,
}

/// Response body for DELETE /cache
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClearCacheResponse {
    pub cleared: usize,
}
