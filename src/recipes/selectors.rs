// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Site-specific CSS selectors
//!
//! The only place that knows the recipe site's markup. If the upstream
//! templates change, this is the file to update; extractors only see
//! these selector strings.

use scraper::Selector;
use tracing::warn;

/// CSS selectors for the listing page and the recipe detail page
#[derive(Debug, Clone)]
pub struct SiteMarkup {
    /// One search result card
    pub listing_card: String,
    /// Card title, relative to the card
    pub listing_title: String,
    /// Link to the recipe page, relative to the card
    pub listing_link: String,
    /// Cover image, relative to the card
    pub listing_image: String,
    /// Ingredient blurb, relative to the card
    pub listing_ingredients: String,

    /// One instruction step section
    pub step_item: String,
    /// Step description paragraph, relative to the step
    pub step_description: String,
    /// Step image, relative to the step
    pub step_image: String,

    /// One ingredient line
    pub ingredient_item: String,
    /// Ingredient name, relative to the line
    pub ingredient_name: String,
    /// Ingredient quantity, relative to the line
    pub ingredient_quantity: String,

    /// Recipe title heading on the detail page
    pub detail_title: String,
}

impl Default for SiteMarkup {
    fn default() -> Self {
        Self {
            listing_card: "li.browse-recipe-item".to_string(),
            listing_title: ".browse-recipe-name".to_string(),
            listing_link: "a.browse-recipe-link".to_string(),
            listing_image: "img.browse-recipe-cover-img".to_string(),
            listing_ingredients: ".browse-recipe-content-ingredient".to_string(),
            step_item: "li.recipe-details-step-item".to_string(),
            step_description: "p.recipe-step-description-content".to_string(),
            step_image: "img".to_string(),
            ingredient_item: "div.ingredient".to_string(),
            ingredient_name: ".ingredient-name".to_string(),
            ingredient_quantity: ".ingredient-unit".to_string(),
            detail_title: "h1#recipe-name".to_string(),
        }
    }
}

/// Parse a selector, logging instead of failing on bad syntax
pub(crate) fn compile(css: &str) -> Option<Selector> {
    match Selector::parse(css) {
        Ok(selector) => Some(selector),
        Err(e) => {
            warn!("Invalid selector '{}': {:?}", css, e);
            None
        }
    }
}
