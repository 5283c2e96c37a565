// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
// Version information for Recipe Scout

/// Full version string with feature description
pub const VERSION: &str = "v0.1.0-recipe-cache-ttl-2026-10-19";

/// Semantic version number
pub const VERSION_NUMBER: &str = "0.1.0";

/// Build date
pub const BUILD_DATE: &str = "2026-10-19";

/// Supported features in this version
pub const FEATURES: &[&str] = &[
    "ingredient-search",
    "detail-scrape",
    "recipe-cache",
    "cache-ttl",
    "lazy-image-resolution",
    "rate-limiting",
];

/// Get formatted version string for logging
pub fn get_version_string() -> String {
    format!("Recipe Scout {} ({})", VERSION_NUMBER, BUILD_DATE)
}
