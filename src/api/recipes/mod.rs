// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Recipe API endpoints
//!
//! Provides `/recipes`, `/recipe_details`, `/full_ingredients` and `/cache`.

pub mod handler;
pub mod request;
pub mod response;

pub use handler::{
    clear_cache_handler, full_ingredients_handler, recipe_details_handler, search_recipes_handler,
};
pub use request::{RecipeUrlRequest, SearchRecipesQuery};
pub use response::{ClearCacheResponse, RecipesResponse};
