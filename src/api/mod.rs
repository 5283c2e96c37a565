// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod errors;
pub mod http_server;
pub mod recipes;

pub use errors::{ApiError, ErrorResponse};
pub use http_server::{bind_address, build_router, start_server, AppState};
pub use recipes::{
    clear_cache_handler, full_ingredients_handler, recipe_details_handler, search_recipes_handler,
    ClearCacheResponse, RecipeUrlRequest, RecipesResponse, SearchRecipesQuery,
};
