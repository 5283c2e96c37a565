// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Recipe API request types

use serde::{Deserialize, Serialize};

use crate::api::errors::ApiError;

/// Query string for GET /recipes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchRecipesQuery {
    /// Ingredient text, comma or space separated (required)
    #[serde(default)]
    pub q: String,

    /// Maximum number of recipes (default from configuration)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<usize>,
}

impl SearchRecipesQuery {
    /// Validate the request against the configured maximum limit
    pub fn validate(&self, max_limit: usize) -> Result<(), ApiError> {
        if self.q.trim().is_empty() {
            return Err(ApiError::ValidationError {
                field: "q".to_string(),
                message: "Query cannot be empty".to_string(),
            });
        }
        if self.q.len() > 500 {
            return Err(ApiError::ValidationError {
                field: "q".to_string(),
                message: "Query too long (max 500 characters)".to_string(),
            });
        }
        if let Some(limit) = self.limit {
            if limit > max_limit {
                return Err(ApiError::ValidationError {
                    field: "limit".to_string(),
                    message: format!("limit cannot exceed {}", max_limit),
                });
            }
        }
        Ok(())
    }
}

/// Body for POST /recipe_details and POST /full_ingredients
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecipeUrlRequest {
    /// Canonical recipe URL as returned by /recipes
    #[serde(default, alias = "recipeUrl")]
    pub recipe_url: Option<String>,
}

impl RecipeUrlRequest {
    /// The URL, if present and non-blank
    pub fn url(&self) -> Result<&str, String> {
        match self.recipe_url.as_deref().map(str::trim) {
            Some(url) if !url.is_empty() => Ok(url),
            _ => Err("recipe_url is required".to_string()),
        }
    }
}
