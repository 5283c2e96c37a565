// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Human-readable rendering of a scraped recipe

use super::types::{FullIngredients, IngredientLine, RecipeDetail};

/// Render the ingredient list as text for chat/LLM consumers
pub fn format_full_ingredients(detail: &RecipeDetail) -> FullIngredients {
    FullIngredients {
        recipe_url: detail.original_url.clone(),
        full_ingredients_text: ingredients_text(&detail.ingredients),
        steps_data: detail.steps.clone(),
        ingredients: detail.ingredients.clone(),
    }
}

/// One `name - quantity` line per ingredient; bare name when quantity is empty
pub fn ingredients_text(lines: &[IngredientLine]) -> String {
    lines
        .iter()
        .map(|line| {
            if line.quantity.is_empty() {
                line.name.clone()
            } else {
                format!("{} - {}", line.name, line.quantity)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
