// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod api;
pub mod cli;
pub mod recipes;
pub mod version;

pub use recipes::{
    RecipeCache, RecipeConfig, RecipeDetail, RecipeError, RecipeService, RecipeSummary,
};
