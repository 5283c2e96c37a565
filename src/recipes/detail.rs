// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Recipe detail page extraction
//!
//! Pulls ordered instruction steps, the full ingredient list and the page
//! title/cover image out of a single recipe page.

use scraper::{Html, Selector};

use super::image::resolve_image;
use super::listing::{collapse_whitespace, first_text};
use super::selectors::{compile, SiteMarkup};
use super::types::{IngredientLine, RawRecipe, RecipeStep};

/// Detail page extractor
#[derive(Debug, Clone, Default)]
pub struct DetailExtractor {
    markup: SiteMarkup,
}

impl DetailExtractor {
    pub fn new(markup: SiteMarkup) -> Self {
        Self { markup }
    }

    /// Extract instruction steps in page order
    ///
    /// Every step section yields a record, even when both its description
    /// and image are empty.
    pub fn extract_steps(&self, html: &str) -> Vec<RecipeStep> {
        let document = Html::parse_document(html);
        self.steps_from(&document)
    }

    /// Extract ingredient lines; lines without a name are dropped
    pub fn extract_full_ingredients(&self, html: &str) -> Vec<IngredientLine> {
        let document = Html::parse_document(html);
        self.ingredients_from(&document)
    }

    /// Extract everything a detail page offers in one parse
    ///
    /// `url` is recorded as the page's canonical URL.
    pub fn extract_page(&self, html: &str, url: &str) -> RawRecipe {
        let document = Html::parse_document(html);

        RawRecipe {
            title: page_title(&document, compile(&self.markup.detail_title).as_ref()),
            url: Some(url.to_string()),
            image: meta_content(&document, "og:image"),
            ingredients_summary: None,
            ingredients: Some(self.ingredients_from(&document)),
            steps: Some(self.steps_from(&document)),
        }
    }

    fn steps_from(&self, document: &Html) -> Vec<RecipeStep> {
        let item = match compile(&self.markup.step_item) {
            Some(s) => s,
            None => return Vec::new(),
        };
        let description = compile(&self.markup.step_description);
        let image = compile(&self.markup.step_image);

        document
            .select(&item)
            .map(|step| RecipeStep {
                description: first_text(&step, description.as_ref()),
                image: resolve_image(image.as_ref().and_then(|s| step.select(s).next())),
            })
            .collect()
    }

    fn ingredients_from(&self, document: &Html) -> Vec<IngredientLine> {
        let item = match compile(&self.markup.ingredient_item) {
            Some(s) => s,
            None => return Vec::new(),
        };
        let name = compile(&self.markup.ingredient_name);
        let quantity = compile(&self.markup.ingredient_quantity);

        document
            .select(&item)
            .filter_map(|line| {
                let name = first_text(&line, name.as_ref());
                if name.is_empty() {
                    return None;
                }
                Some(IngredientLine {
                    name,
                    quantity: first_text(&line, quantity.as_ref()),
                })
            })
            .collect()
    }
}

/// `og:title`, then the recipe heading
fn page_title(document: &Html, heading: Option<&Selector>) -> Option<String> {
    if let Some(title) = meta_content(document, "og:title") {
        return Some(title);
    }
    let heading = heading?;
    document
        .select(heading)
        .next()
        .map(|el| collapse_whitespace(&el.text().collect::<String>()))
        .filter(|s| !s.is_empty())
}

fn meta_content(document: &Html, property: &str) -> Option<String> {
    let selector = compile(&format!(r#"meta[property="{}"]"#, property))?;
    document
        .select(&selector)
        .next()
        .and_then(|m| m.value().attr("content"))
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
