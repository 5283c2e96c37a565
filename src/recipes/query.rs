// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Ingredient query tokenization

/// Separators besides whitespace: ASCII, full-width and ideographic commas
const COMMAS: [char; 3] = [',', '，', '、'];

/// Split free-form ingredient text into required terms
///
/// Splits on commas and whitespace, trims, and drops empty pieces.
/// Order and duplicates are preserved.
pub fn tokenize_terms(query: &str) -> Vec<String> {
    query
        .split(|c: char| c.is_whitespace() || COMMAS.contains(&c))
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}
