// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Configuration for recipe scraping and caching

use std::env;
use std::time::Duration;
use url::Url;

use super::selectors::SiteMarkup;

/// Desktop browser identity; the recipe site rejects default client strings
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Configuration for recipe search
#[derive(Debug, Clone)]
pub struct RecipeConfig {
    /// Site origin for listing queries and relative link resolution
    pub base_url: String,
    /// First path segment of the listing URL
    pub search_segment: String,
    /// Default number of results per search (default: 3)
    pub default_limit: usize,
    /// Largest limit accepted from callers (default: 20)
    pub max_limit: usize,
    /// Timeout per upstream request in seconds (default: 10)
    pub fetch_timeout_secs: u64,
    /// Also scrape each candidate's detail page during search (default: true)
    pub fetch_details_on_search: bool,
    /// Cache TTL in seconds (default: 3600)
    pub cache_ttl_secs: u64,
    /// Maximum cache entries (default: 500)
    pub cache_max_entries: usize,
    /// Outbound requests per minute (default: 60)
    pub rate_limit_per_minute: u32,
    /// User-Agent header for upstream requests
    pub user_agent: String,
    /// Site selectors
    pub markup: SiteMarkup,
}

impl RecipeConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            base_url: env::var("RECIPE_SITE_BASE_URL").unwrap_or(defaults.base_url),
            search_segment: env::var("RECIPE_SEARCH_SEGMENT").unwrap_or(defaults.search_segment),
            default_limit: env_parse("RECIPE_DEFAULT_LIMIT").unwrap_or(defaults.default_limit),
            max_limit: env_parse("RECIPE_MAX_LIMIT").unwrap_or(defaults.max_limit),
            fetch_timeout_secs: env_parse("RECIPE_FETCH_TIMEOUT_SECS")
                .unwrap_or(defaults.fetch_timeout_secs),
            fetch_details_on_search: env::var("RECIPE_FETCH_DETAILS_ON_SEARCH")
                .map(|v| v.to_lowercase() != "false")
                .unwrap_or(defaults.fetch_details_on_search),
            cache_ttl_secs: env_parse("RECIPE_CACHE_TTL_SECS").unwrap_or(defaults.cache_ttl_secs),
            cache_max_entries: env_parse("RECIPE_CACHE_MAX_ENTRIES")
                .unwrap_or(defaults.cache_max_entries),
            rate_limit_per_minute: env_parse("RECIPE_RATE_LIMIT_PER_MINUTE")
                .unwrap_or(defaults.rate_limit_per_minute),
            user_agent: env::var("RECIPE_USER_AGENT").unwrap_or(defaults.user_agent),
            markup: defaults.markup,
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), String> {
        let base = Url::parse(&self.base_url)
            .map_err(|e| format!("base_url is not a valid URL: {}", e))?;
        if base.cannot_be_a_base() {
            return Err("base_url cannot be used as a base".to_string());
        }
        if self.search_segment.trim().is_empty() {
            return Err("search_segment must not be empty".to_string());
        }
        if self.max_limit == 0 {
            return Err("max_limit must be at least 1".to_string());
        }
        if self.default_limit > self.max_limit {
            return Err("default_limit cannot exceed max_limit".to_string());
        }
        if self.fetch_timeout_secs == 0 {
            return Err("fetch_timeout_secs must be at least 1".to_string());
        }
        if self.cache_ttl_secs == 0 {
            return Err("Cache TTL must be greater than 0".to_string());
        }
        if self.cache_max_entries == 0 {
            return Err("cache_max_entries must be at least 1".to_string());
        }
        if self.rate_limit_per_minute == 0 {
            return Err("Rate limit must be greater than 0".to_string());
        }
        Ok(())
    }

    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }

    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }
}

impl Default for RecipeConfig {
    fn default() -> Self {
        Self {
            base_url: "https://icook.tw".to_string(),
            search_segment: "search".to_string(),
            default_limit: 3,
            max_limit: 20,
            fetch_timeout_secs: 10,
            fetch_details_on_search: true,
            cache_ttl_secs: 3600,
            cache_max_entries: 500,
            rate_limit_per_minute: 60,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            markup: SiteMarkup::default(),
        }
    }
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|v| v.parse().ok())
}
