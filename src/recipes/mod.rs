// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Recipe search and scraping
//!
//! Finds recipes on the recipe site that use a given set of ingredients,
//! and scrapes individual recipe pages for their full details.
//!
//! ## Architecture
//!
//! ```text
//! query → tokenize_terms → listing URL → PageFetcher → ListingExtractor ─┐
//!                                                                        ↓
//!            RecipeCache ← normalize ← DetailExtractor ← PageFetcher ← cards
//! ```
//!
//! Key features:
//! - Site markup isolated in [`selectors::SiteMarkup`]
//! - Soft failure: unreachable pages yield empty results, never errors
//! - URL-keyed cache with TTL enforced on read
//! - Outbound rate limiting and a browser User-Agent

pub mod cache;
pub mod config;
pub mod detail;
pub mod fetcher;
pub mod format;
pub mod image;
pub mod listing;
pub mod normalizer;
pub mod query;
pub mod rate_limiter;
pub mod selectors;
pub mod service;
pub mod types;

// Re-export commonly used types
pub use cache::{RecipeCache, RecipeCacheStats};
pub use config::RecipeConfig;
pub use detail::DetailExtractor;
pub use fetcher::{FetchError, HttpPageFetcher, PageFetcher};
pub use image::resolve_image;
pub use listing::ListingExtractor;
pub use normalizer::normalize;
pub use query::tokenize_terms;
pub use selectors::SiteMarkup;
pub use service::RecipeService;
pub use types::{
    CacheEntry, FullIngredients, IngredientLine, RawRecipe, RecipeDetail, RecipeError, RecipeStep,
    RecipeSummary,
};
