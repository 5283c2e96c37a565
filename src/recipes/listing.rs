// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Search listing extraction
//!
//! Turns a search-results page into [`RecipeSummary`] cards, keeping only
//! cards whose ingredient blurb mentions every required term.

use scraper::{ElementRef, Html, Selector};
use tracing::debug;
use url::Url;

use super::image::resolve_image;
use super::selectors::{compile, SiteMarkup};
use super::types::{RecipeError, RecipeSummary};

/// Listing page extractor bound to one site origin
#[derive(Debug, Clone)]
pub struct ListingExtractor {
    base_url: Url,
    search_segment: String,
    markup: SiteMarkup,
}

/// Selectors compiled once per page
struct CardSelectors {
    title: Option<Selector>,
    link: Option<Selector>,
    image: Option<Selector>,
    ingredients: Option<Selector>,
}

impl ListingExtractor {
    /// Create an extractor for a site
    ///
    /// # Arguments
    /// * `base_url` - Site origin used for the search path and link resolution
    /// * `search_segment` - First path segment of the listing URL
    /// * `markup` - Site selectors
    pub fn new(base_url: Url, search_segment: impl Into<String>, markup: SiteMarkup) -> Self {
        Self {
            base_url,
            search_segment: search_segment.into(),
            markup,
        }
    }

    /// Build the listing URL for a set of ingredient terms
    ///
    /// Terms are joined with spaces into a single percent-encoded path
    /// segment: `{base}/{search_segment}/{terms}/`.
    pub fn listing_url(&self, terms: &[String]) -> Result<Url, RecipeError> {
        let mut url = self.base_url.clone();
        url.set_query(None);
        url.set_fragment(None);
        url.path_segments_mut()
            .map_err(|_| {
                RecipeError::InvalidConfig(format!(
                    "base URL cannot carry a path: {}",
                    self.base_url
                ))
            })?
            .clear()
            .push(&self.search_segment)
            .push(&terms.join(" "))
            .push("");
        Ok(url)
    }

    /// Extract up to `limit` matching cards from a listing page, in page order
    ///
    /// A card is kept only if every term occurs verbatim (case-sensitive
    /// substring) in its ingredient blurb. Parsing stops as soon as `limit`
    /// cards are kept. Cards with missing fields are kept with empty strings.
    pub fn extract(&self, html: &str, required_terms: &[String], limit: usize) -> Vec<RecipeSummary> {
        if limit == 0 {
            return Vec::new();
        }

        let card_selector = match compile(&self.markup.listing_card) {
            Some(s) => s,
            None => return Vec::new(),
        };
        let selectors = CardSelectors {
            title: compile(&self.markup.listing_title),
            link: compile(&self.markup.listing_link),
            image: compile(&self.markup.listing_image),
            ingredients: compile(&self.markup.listing_ingredients),
        };

        let document = Html::parse_document(html);
        let mut kept = Vec::new();
        let mut seen = 0usize;

        for card in document.select(&card_selector) {
            seen += 1;
            let summary = self.parse_card(&card, &selectors);

            if matches_all_terms(&summary.ingredients_summary, required_terms) {
                kept.push(summary);
                if kept.len() >= limit {
                    break;
                }
            }
        }

        debug!(
            "Listing: kept {} of {} parsed cards (limit {})",
            kept.len(),
            seen,
            limit
        );
        kept
    }

    fn parse_card(&self, card: &ElementRef<'_>, selectors: &CardSelectors) -> RecipeSummary {
        let title = first_text(card, selectors.title.as_ref());

        let url = selectors
            .link
            .as_ref()
            .and_then(|s| card.select(s).next())
            .or_else(|| (card.value().name() == "a").then_some(*card))
            .and_then(|a| a.value().attr("href"))
            .map(|href| self.absolutize(href))
            .unwrap_or_default();

        let image_url = resolve_image(
            selectors
                .image
                .as_ref()
                .and_then(|s| card.select(s).next()),
        );

        let ingredients_summary = first_text(card, selectors.ingredients.as_ref());

        RecipeSummary {
            title,
            url,
            image_url,
            ingredients_summary,
        }
    }

    /// Resolve a possibly relative link against the site origin
    fn absolutize(&self, href: &str) -> String {
        let href = href.trim();
        if href.is_empty() {
            return String::new();
        }
        self.base_url
            .join(href)
            .map(|u| u.to_string())
            .unwrap_or_default()
    }
}

/// Whether a blurb contains every term as an exact substring
pub fn matches_all_terms(text: &str, terms: &[String]) -> bool {
    terms.iter().all(|term| text.contains(term.as_str()))
}

/// Whitespace-collapsed text of the first match under `parent`
pub(crate) fn first_text(parent: &ElementRef<'_>, selector: Option<&Selector>) -> String {
    selector
        .and_then(|s| parent.select(s).next())
        .map(|el| collapse_whitespace(&el.text().collect::<Vec<_>>().join(" ")))
        .unwrap_or_default()
}

pub(crate) fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
