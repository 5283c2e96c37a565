// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
// Tests for ingredient search: tokenization, filtering, limits and cache priming

use recipe_scout::recipes::{
    ListingExtractor, RecipeCache, RecipeConfig, RecipeService, SiteMarkup,
};
use std::sync::Arc;
use std::time::Duration;
use url::Url;

use super::mock_site::{card, detail_page, listing_page, MockSite};

const BASE: &str = "https://icook.tw";

fn listing_url(terms: &[&str]) -> String {
    let extractor = ListingExtractor::new(Url::parse(BASE).unwrap(), "search", SiteMarkup::default());
    let terms: Vec<String> = terms.iter().map(|t| t.to_string()).collect();
    extractor.listing_url(&terms).unwrap().to_string()
}

fn service_with(site: Arc<MockSite>, fetch_details: bool) -> RecipeService {
    let mut config = RecipeConfig::default();
    config.fetch_details_on_search = fetch_details;
    let cache = Arc::new(RecipeCache::new(Duration::from_secs(3600), 100));
    RecipeService::with_parts(config, site, cache).unwrap()
}

fn five_card_listing() -> String {
    listing_page(&[
        card(1, "Three Cup Chicken", "chicken, basil, garlic"),
        card(2, "Beef Noodles", "beef, noodles"),
        card(3, "Chicken Congee", "rice, chicken, ginger"),
        card(4, "Braised Pork", "pork, soy sauce"),
        card(5, "Chicken Curry", "chicken, potato, onion"),
    ])
}

#[tokio::test]
async fn test_filter_keeps_matching_cards_in_page_order() {
    let site = Arc::new(MockSite::new());
    site.add_page(&listing_url(&["chicken"]), &five_card_listing());
    let service = service_with(site.clone(), false);

    let records = service.search("chicken", Some(3)).await.unwrap();

    let urls: Vec<&str> = records.iter().map(|r| r.original_url.as_str()).collect();
    assert_eq!(
        urls,
        vec![
            "https://icook.tw/recipes/1",
            "https://icook.tw/recipes/3",
            "https://icook.tw/recipes/5"
        ]
    );
    for record in &records {
        assert!(record.ingredients_raw.contains("chicken"));
    }
}

#[tokio::test]
async fn test_every_term_required() {
    let site = Arc::new(MockSite::new());
    site.add_page(
        &listing_url(&["chicken", "onion"]),
        &listing_page(&[
            card(10, "Chicken Stew", "chicken, carrot"),
            card(11, "Chicken Curry", "chicken, potato, onion"),
        ]),
    );
    let service = service_with(site.clone(), false);

    let records = service.search("chicken, onion", None).await.unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].title, "Chicken Curry");
    assert_eq!(site.requests(), vec![listing_url(&["chicken", "onion"])]);
}

#[tokio::test]
async fn test_limit_is_never_exceeded() {
    let site = Arc::new(MockSite::new());
    site.add_page(&listing_url(&["chicken"]), &five_card_listing());
    let service = service_with(site, false);

    for limit in 0..=6 {
        let records = service.search("chicken", Some(limit)).await.unwrap();
        assert!(records.len() <= limit, "limit {} returned {}", limit, records.len());
        assert_eq!(records.len(), limit.min(3));
    }
}

#[tokio::test]
async fn test_huge_limit_is_capped_at_max() {
    let site = Arc::new(MockSite::new());
    let cards: Vec<String> = (1..=25).map(|i| card(i, "Egg Dish", "egg")).collect();
    site.add_page(&listing_url(&["egg"]), &listing_page(&cards));
    let service = service_with(site, false);

    let records = service.search("egg", Some(usize::MAX)).await.unwrap();
    assert_eq!(records.len(), 20);

    let records = service.search("egg", Some(1 << 40)).await.unwrap();
    assert_eq!(records.len(), 20);
}

#[tokio::test]
async fn test_default_limit_is_three() {
    let site = Arc::new(MockSite::new());
    let cards: Vec<String> = (1..=6).map(|i| card(i, "Egg Dish", "egg")).collect();
    site.add_page(&listing_url(&["egg"]), &listing_page(&cards));
    let service = service_with(site, false);

    let records = service.search("egg", None).await.unwrap();
    assert_eq!(records.len(), 3);
}

#[tokio::test]
async fn test_listing_unreachable_yields_empty() {
    let site = Arc::new(MockSite::new());
    let service = service_with(site.clone(), true);

    let records = service.search("chicken", None).await.unwrap();

    assert!(records.is_empty());
    assert_eq!(site.requests().len(), 1);
    assert!(service.cache().is_empty());
}

#[tokio::test]
async fn test_search_primes_cache() {
    let site = Arc::new(MockSite::new());
    site.add_page(&listing_url(&["chicken"]), &five_card_listing());
    let service = service_with(site, false);

    let records = service.search("chicken", None).await.unwrap();

    for record in &records {
        let entry = service.recipe_details(&record.original_url).unwrap();
        assert_eq!(&entry.data, record);
    }
    assert_eq!(service.cache().len(), 3);
}

#[tokio::test]
async fn test_search_fetches_detail_pages() {
    let site = Arc::new(MockSite::new());
    site.add_page(
        &listing_url(&["chicken"]),
        &listing_page(&[
            card(1, "Three Cup Chicken", "chicken, basil"),
            card(3, "Chicken Congee", "rice, chicken"),
        ]),
    );
    site.add_page(
        "https://icook.tw/recipes/1",
        &detail_page(
            "Three Cup Chicken",
            &[("chicken thigh", "600 g"), ("basil", "")],
            &["Brown the chicken.", "Add basil."],
        ),
    );
    // recipes/3 is missing upstream
    let service = service_with(site.clone(), true);

    let records = service.search("chicken", None).await.unwrap();

    assert_eq!(records.len(), 2);
    let full = &records[0];
    assert_eq!(full.title, "Three Cup Chicken");
    assert_eq!(full.image_url, "https://img.example/1.jpg");
    assert_eq!(full.ingredients.len(), 2);
    assert_eq!(full.ingredients[0].quantity, "600 g");
    assert_eq!(full.steps.len(), 2);
    assert_eq!(full.steps[1].description, "Add basil.");
    assert_eq!(full.steps[0].image, "https://img.example/step-0.jpg");

    let partial = &records[1];
    assert_eq!(partial.title, "Chicken Congee");
    assert!(partial.ingredients.is_empty());
    assert!(partial.steps.is_empty());

    let cached = service
        .recipe_details("https://icook.tw/recipes/1")
        .unwrap();
    assert_eq!(cached.data.steps.len(), 2);
    assert_eq!(site.request_count("https://icook.tw/recipes/3"), 1);
}

#[tokio::test]
async fn test_summary_only_skips_detail_pages() {
    let site = Arc::new(MockSite::new());
    site.add_page(&listing_url(&["chicken"]), &five_card_listing());
    let service = service_with(site.clone(), false);

    let records = service.search("chicken", None).await.unwrap();

    assert_eq!(records.len(), 3);
    assert_eq!(site.requests().len(), 1);
    assert!(records.iter().all(|r| r.steps.is_empty()));
}
