// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Core types for recipe search and detail retrieval

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A candidate recipe as displayed on a search listing card
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeSummary {
    /// Card title
    pub title: String,
    /// Absolute recipe page URL
    pub url: String,
    /// Cover image URL
    pub image_url: String,
    /// Free-form ingredient blurb shown on the card
    pub ingredients_summary: String,
}

/// A single instruction step, in on-page order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeStep {
    pub description: String,
    /// Step photo URL (empty when the step has none)
    #[serde(default)]
    pub image: String,
}

/// One ingredient line from a recipe page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngredientLine {
    pub name: String,
    /// Free-form quantity text, possibly empty
    #[serde(default)]
    pub quantity: String,
}

/// Canonical recipe record
///
/// Every extractor populates a subset of these fields; anything it does
/// not know stays at its empty value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeDetail {
    pub title: String,
    /// Canonical page URL, used as the cache key
    pub original_url: String,
    pub image_url: String,
    /// Ingredient blurb as shown on the listing card
    pub ingredients_raw: String,
    /// Structured ingredient list, present when the detail page was fetched
    pub ingredients: Vec<IngredientLine>,
    pub steps: Vec<RecipeStep>,
}

/// Raw, loosely named fields as produced by an extractor or an older client
///
/// Field aliases absorb the naming drift between iterations of the
/// record shape; see [`crate::recipes::normalizer::normalize`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawRecipe {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default, alias = "original_url", alias = "link")]
    pub url: Option<String>,
    #[serde(default, alias = "image_url")]
    pub image: Option<String>,
    #[serde(
        default,
        alias = "ingredients_raw",
        alias = "ingredients_text",
        alias = "snippet"
    )]
    pub ingredients_summary: Option<String>,
    #[serde(default)]
    pub ingredients: Option<Vec<IngredientLine>>,
    #[serde(default, alias = "steps_data")]
    pub steps: Option<Vec<RecipeStep>>,
}

impl From<RecipeSummary> for RawRecipe {
    fn from(summary: RecipeSummary) -> Self {
        Self {
            title: Some(summary.title),
            url: Some(summary.url),
            image: Some(summary.image_url),
            ingredients_summary: Some(summary.ingredients_summary),
            ingredients: None,
            steps: None,
        }
    }
}

/// A cached recipe record with its fetch time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheEntry {
    pub data: RecipeDetail,
    pub fetched_at: DateTime<Utc>,
}

/// Freshly scraped ingredients and steps for a single recipe page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FullIngredients {
    pub recipe_url: String,
    /// One `name - quantity` line per ingredient
    pub full_ingredients_text: String,
    pub steps_data: Vec<RecipeStep>,
    pub ingredients: Vec<IngredientLine>,
}

/// Errors surfaced by recipe operations
///
/// Upstream fetch failures never appear here; extraction absorbs them
/// into empty results.
#[derive(Debug, Error)]
pub enum RecipeError {
    /// Caller input is malformed (missing URL, empty query, ...)
    #[error("Invalid request: {reason}")]
    InvalidRequest {
        /// What was wrong with the input
        reason: String,
    },

    /// No cached record exists for this exact URL
    #[error("Recipe details for {url} not found in cache")]
    NotFound {
        /// The URL that missed
        url: String,
    },

    /// Configuration could not be used
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
