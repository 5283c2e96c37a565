// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Recipe service orchestration
//!
//! Coordinates listing search, detail scraping, normalization and the
//! recipe cache.

use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};
use url::Url;

use super::cache::RecipeCache;
use super::config::RecipeConfig;
use super::detail::DetailExtractor;
use super::fetcher::{check_safe_url, HttpPageFetcher, PageFetcher};
use super::format::format_full_ingredients;
use super::listing::ListingExtractor;
use super::normalizer::normalize;
use super::query::tokenize_terms;
use super::types::{
    CacheEntry, FullIngredients, IngredientLine, RawRecipe, RecipeDetail, RecipeError, RecipeStep,
    RecipeSummary,
};

/// Main recipe service: search, cached detail lookup, fresh detail scrape
pub struct RecipeService {
    fetcher: Arc<dyn PageFetcher>,
    cache: Arc<RecipeCache>,
    listing: ListingExtractor,
    detail: DetailExtractor,
    config: RecipeConfig,
}

impl RecipeService {
    /// Create a service with an HTTP fetcher and a fresh cache
    pub fn new(config: RecipeConfig) -> Result<Self, RecipeError> {
        config.validate().map_err(RecipeError::InvalidConfig)?;
        let fetcher = HttpPageFetcher::new(&config)
            .map_err(|e| RecipeError::InvalidConfig(e.to_string()))?;
        let cache = Arc::new(RecipeCache::new(
            config.cache_ttl(),
            config.cache_max_entries,
        ));
        Self::with_parts(config, Arc::new(fetcher), cache)
    }

    /// Create a service from explicitly owned parts
    pub fn with_parts(
        config: RecipeConfig,
        fetcher: Arc<dyn PageFetcher>,
        cache: Arc<RecipeCache>,
    ) -> Result<Self, RecipeError> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| RecipeError::InvalidConfig(format!("base_url: {}", e)))?;
        let listing = ListingExtractor::new(
            base_url,
            config.search_segment.clone(),
            config.markup.clone(),
        );
        let detail = DetailExtractor::new(config.markup.clone());

        Ok(Self {
            fetcher,
            cache,
            listing,
            detail,
            config,
        })
    }

    /// Search for recipes containing every ingredient in `query`
    ///
    /// # Arguments
    /// * `query` - Free-form ingredient text, split on commas and whitespace
    /// * `limit` - Maximum records returned (uses the configured default if None,
    ///   never more than the configured maximum)
    ///
    /// Every returned record with a URL is written to the cache.
    pub async fn search(
        &self,
        query: &str,
        limit: Option<usize>,
    ) -> Result<Vec<RecipeDetail>, RecipeError> {
        let terms = tokenize_terms(query);
        if terms.is_empty() {
            return Err(RecipeError::InvalidRequest {
                reason: "query must contain at least one ingredient".to_string(),
            });
        }
        let limit = limit
            .unwrap_or(self.config.default_limit)
            .min(self.config.max_limit);
        let start = Instant::now();

        let summaries = self.fetch_listing(&terms, limit).await?;

        let raws: Vec<RawRecipe> = if self.config.fetch_details_on_search {
            let pages = summaries.into_iter().map(|s| self.enrich_summary(s));
            futures::future::join_all(pages).await
        } else {
            summaries.into_iter().map(RawRecipe::from).collect()
        };

        let records: Vec<RecipeDetail> = raws.into_iter().map(normalize).collect();
        for record in &records {
            self.cache.put(&record.original_url, record.clone());
        }

        info!(
            "Search complete: {} recipes for {:?} in {}ms",
            records.len(),
            terms,
            start.elapsed().as_millis()
        );
        Ok(records)
    }

    /// Fetch and filter the listing page; upstream failure yields no cards
    pub async fn fetch_listing(
        &self,
        terms: &[String],
        limit: usize,
    ) -> Result<Vec<RecipeSummary>, RecipeError> {
        if limit == 0 {
            return Ok(Vec::new());
        }
        let url = self.listing.listing_url(terms)?;

        match self.fetcher.fetch_page(url.as_str()).await {
            Ok(html) => Ok(self.listing.extract(&html, terms, limit)),
            Err(e) => {
                warn!("Listing fetch failed, returning no results: {}", e);
                Ok(Vec::new())
            }
        }
    }

    /// Instruction steps of a recipe page; empty on fetch failure
    pub async fn fetch_steps(&self, url: &str) -> Vec<RecipeStep> {
        match self.fetch_detail_html(url).await {
            Some(html) => self.detail.extract_steps(&html),
            None => Vec::new(),
        }
    }

    /// Ingredient lines of a recipe page; empty on fetch failure
    pub async fn fetch_ingredients(&self, url: &str) -> Vec<IngredientLine> {
        match self.fetch_detail_html(url).await {
            Some(html) => self.detail.extract_full_ingredients(&html),
            None => Vec::new(),
        }
    }

    /// Cached record for an exact recipe URL
    pub fn recipe_details(&self, url: &str) -> Result<CacheEntry, RecipeError> {
        let url = require_url(url)?;

        match self.cache.get(url) {
            Some(entry) => {
                debug!("Recipe cache hit for: {}", url);
                Ok(entry)
            }
            None => {
                debug!("Recipe cache miss for: {}", url);
                Err(RecipeError::NotFound {
                    url: url.to_string(),
                })
            }
        }
    }

    /// Re-scrape a recipe page for its full ingredients and steps
    ///
    /// Always fetches the page; the normalized result is written back to the
    /// cache. Fields only a listing card provides (the ingredient blurb and
    /// cover image) are carried over from an existing entry. An unreachable
    /// page yields empty lists.
    pub async fn full_ingredients(&self, url: &str) -> Result<FullIngredients, RecipeError> {
        let url = require_url(url)?;
        check_safe_url(url).map_err(|e| RecipeError::InvalidRequest {
            reason: e.to_string(),
        })?;

        let raw = match self.fetch_detail_html(url).await {
            Some(html) => self.detail.extract_page(&html, url),
            None => {
                return Ok(FullIngredients {
                    recipe_url: url.to_string(),
                    ..Default::default()
                })
            }
        };

        let mut record = normalize(raw);
        if let Some(previous) = self.cache.get(&record.original_url) {
            keep_listing_fields(&mut record, previous.data);
        }
        self.cache.put(&record.original_url, record.clone());
        Ok(format_full_ingredients(&record))
    }

    /// The cache backing this service
    pub fn cache(&self) -> &Arc<RecipeCache> {
        &self.cache
    }

    /// Get the configuration
    pub fn config(&self) -> &RecipeConfig {
        &self.config
    }

    /// Merge a listing card with whatever its detail page provides
    async fn enrich_summary(&self, summary: RecipeSummary) -> RawRecipe {
        let html = if summary.url.is_empty() {
            None
        } else {
            self.fetch_detail_html(&summary.url).await
        };

        let mut raw = RawRecipe::from(summary);
        if let Some(html) = html {
            raw.ingredients = Some(self.detail.extract_full_ingredients(&html));
            raw.steps = Some(self.detail.extract_steps(&html));
        }
        raw
    }

    async fn fetch_detail_html(&self, url: &str) -> Option<String> {
        match self.fetcher.fetch_page(url).await {
            Ok(html) => Some(html),
            Err(e) => {
                warn!("Detail fetch failed for {}: {}", url, e);
                None
            }
        }
    }
}

/// Fill fields a detail page lacks from a previously cached record
fn keep_listing_fields(record: &mut RecipeDetail, previous: RecipeDetail) {
    if record.ingredients_raw.is_empty() {
        record.ingredients_raw = previous.ingredients_raw;
    }
    // Search results show the listing cover; keep it stable
    if !previous.image_url.is_empty() {
        record.image_url = previous.image_url;
    }
    if record.title.is_empty() {
        record.title = previous.title;
    }
}

fn require_url(url: &str) -> Result<&str, RecipeError> {
    let url = url.trim();
    if url.is_empty() {
        return Err(RecipeError::InvalidRequest {
            reason: "recipe_url is required".to_string(),
        });
    }
    Ok(url)
}
