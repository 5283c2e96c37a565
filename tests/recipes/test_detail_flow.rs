// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
// Tests for detail page scraping and the full-ingredients operation

use recipe_scout::recipes::{RecipeCache, RecipeConfig, RecipeError, RecipeService};
use std::sync::Arc;
use std::time::Duration;

use super::mock_site::{card, detail_page, listing_page, MockSite};

const RECIPE_URL: &str = "https://icook.tw/recipes/101";

fn service_with(site: Arc<MockSite>) -> RecipeService {
    let cache = Arc::new(RecipeCache::new(Duration::from_secs(3600), 100));
    RecipeService::with_parts(RecipeConfig::default(), site, cache).unwrap()
}

fn site_with_recipe() -> Arc<MockSite> {
    let site = Arc::new(MockSite::new());
    site.add_page(
        RECIPE_URL,
        &detail_page(
            "Three Cup Chicken",
            &[("chicken thigh", "600 g"), ("basil", ""), ("", "2 tbsp")],
            &["Brown the chicken.", "Add basil and serve."],
        ),
    );
    site
}

#[tokio::test]
async fn test_fetch_steps_and_ingredients() {
    let service = service_with(site_with_recipe());

    let steps = service.fetch_steps(RECIPE_URL).await;
    assert_eq!(steps.len(), 2);
    assert_eq!(steps[0].description, "Brown the chicken.");

    let ingredients = service.fetch_ingredients(RECIPE_URL).await;
    assert_eq!(ingredients.len(), 2);
    assert_eq!(ingredients[1].name, "basil");
    assert_eq!(ingredients[1].quantity, "");
}

#[tokio::test]
async fn test_non_success_status_yields_empty_sequences() {
    let service = service_with(Arc::new(MockSite::new()));

    assert!(service.fetch_steps(RECIPE_URL).await.is_empty());
    assert!(service.fetch_ingredients(RECIPE_URL).await.is_empty());
}

#[tokio::test]
async fn test_full_ingredients_always_refetches() {
    let site = site_with_recipe();
    let service = service_with(site.clone());

    let first = service.full_ingredients(RECIPE_URL).await.unwrap();
    let second = service.full_ingredients(RECIPE_URL).await.unwrap();

    assert_eq!(first, second);
    assert_eq!(site.request_count(RECIPE_URL), 2);
    assert_eq!(first.recipe_url, RECIPE_URL);
    assert_eq!(first.full_ingredients_text, "chicken thigh - 600 g\nbasil");
    assert_eq!(first.steps_data.len(), 2);
}

#[tokio::test]
async fn test_full_ingredients_writes_cache() {
    let service = service_with(site_with_recipe());

    service.full_ingredients(RECIPE_URL).await.unwrap();

    let entry = service.recipe_details(RECIPE_URL).unwrap();
    assert_eq!(entry.data.title, "Three Cup Chicken");
    assert_eq!(entry.data.image_url, "https://img.example/cover.jpg");
    assert_eq!(entry.data.ingredients.len(), 2);
    assert_eq!(entry.data.steps.len(), 2);
}

#[tokio::test]
async fn test_full_ingredients_keeps_listing_fields() {
    let site = site_with_recipe();
    site.add_page(
        "https://icook.tw/search/chicken/",
        &listing_page(&[card(101, "Three Cup Chicken", "chicken, basil")]),
    );
    let service = service_with(site);

    service.search("chicken", None).await.unwrap();
    let before = service.recipe_details(RECIPE_URL).unwrap().data;
    assert_eq!(before.ingredients_raw, "chicken, basil");
    assert_eq!(before.image_url, "https://img.example/101.jpg");

    service.full_ingredients(RECIPE_URL).await.unwrap();

    let after = service.recipe_details(RECIPE_URL).unwrap().data;
    assert_eq!(after.ingredients_raw, "chicken, basil");
    assert_eq!(after.image_url, "https://img.example/101.jpg");
    assert_eq!(after.ingredients.len(), 2);
    assert_eq!(after.steps.len(), 2);
}

#[tokio::test]
async fn test_full_ingredients_bad_input() {
    let site = Arc::new(MockSite::new());
    let service = service_with(site.clone());

    assert!(matches!(
        service.full_ingredients("").await,
        Err(RecipeError::InvalidRequest { .. })
    ));
    assert!(matches!(
        service.full_ingredients("not a url").await,
        Err(RecipeError::InvalidRequest { .. })
    ));
    assert!(matches!(
        service.full_ingredients("http://192.168.0.10/recipes/1").await,
        Err(RecipeError::InvalidRequest { .. })
    ));
    // Rejected before any network access
    assert!(site.requests().is_empty());
}
