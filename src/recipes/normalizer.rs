// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Mapping raw extracted fields into the canonical record

use super::types::{RawRecipe, RecipeDetail};

/// Map raw fields to a [`RecipeDetail`], defaulting anything missing to empty
pub fn normalize(raw: RawRecipe) -> RecipeDetail {
    RecipeDetail {
        title: raw.title.unwrap_or_default(),
        original_url: raw.url.unwrap_or_default(),
        image_url: raw.image.unwrap_or_default(),
        ingredients_raw: raw.ingredients_summary.unwrap_or_default(),
        ingredients: raw.ingredients.unwrap_or_default(),
        steps: raw.steps.unwrap_or_default(),
    }
}
