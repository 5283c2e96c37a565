// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
// In-memory recipe site serving canned HTML per URL

use async_trait::async_trait;
use recipe_scout::recipes::{FetchError, PageFetcher};
use std::collections::HashMap;
use std::sync::Mutex;

/// Serves registered pages; any other URL answers 404
#[derive(Default)]
pub struct MockSite {
    pages: Mutex<HashMap<String, String>>,
    requests: Mutex<Vec<String>>,
}

impl MockSite {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_page(&self, url: &str, html: &str) {
        self.pages
            .lock()
            .unwrap()
            .insert(url.to_string(), html.to_string());
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self, url: &str) -> usize {
        self.requests().iter().filter(|u| u.as_str() == url).count()
    }
}

#[async_trait]
impl PageFetcher for MockSite {
    async fn fetch_page(&self, url: &str) -> Result<String, FetchError> {
        self.requests.lock().unwrap().push(url.to_string());
        self.pages
            .lock()
            .unwrap()
            .get(url)
            .cloned()
            .ok_or_else(|| FetchError::HttpStatus(404, url.to_string()))
    }
}

/// One listing card in the site's markup
pub fn card(id: u32, title: &str, ingredients: &str) -> String {
    format!(
        r#"<li class="browse-recipe-item">
             <a class="browse-recipe-link" href="/recipes/{id}">
               <img class="browse-recipe-cover-img" src="blank.gif"
                    data-src="https://img.example/{id}.jpg">
               <h2 class="browse-recipe-name">{title}</h2>
               <p class="browse-recipe-content-ingredient">{ingredients}</p>
             </a>
           </li>"#
    )
}

pub fn listing_page(cards: &[String]) -> String {
    format!(
        "<html><body><ul class=\"browse-recipe-list\">{}</ul></body></html>",
        cards.join("\n")
    )
}

/// A recipe page with the given ingredient lines and step texts
pub fn detail_page(title: &str, ingredients: &[(&str, &str)], steps: &[&str]) -> String {
    let ingredients: String = ingredients
        .iter()
        .map(|(name, qty)| {
            format!(
                r#"<div class="ingredient"><div class="ingredient-name">{name}</div><div class="ingredient-unit">{qty}</div></div>"#
            )
        })
        .collect();
    let steps: String = steps
        .iter()
        .enumerate()
        .map(|(i, text)| {
            format!(
                r#"<li class="recipe-details-step-item"><img data-src="https://img.example/step-{i}.jpg"><p class="recipe-step-description-content">{text}</p></li>"#
            )
        })
        .collect();
    format!(
        r#"<html><head><meta property="og:title" content="{title}"><meta property="og:image" content="https://img.example/cover.jpg"></head>
           <body><h1 id="recipe-name">{title}</h1><div class="ingredients">{ingredients}</div><ul>{steps}</ul></body></html>"#
    )
}
