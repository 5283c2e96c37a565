// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Image URL resolution for lazy-loaded and responsive `<img>` markup

use scraper::ElementRef;

/// Responsive candidate attributes, checked in order
const SRCSET_ATTRS: [&str; 2] = ["srcset", "data-srcset"];

/// Pick the best available URL for an image element
///
/// Resolution order, first match wins:
/// 1. the first entry of `srcset` (or `data-srcset`), URL token only
/// 2. a non-empty `data-src`
/// 3. `src`, or empty text
///
/// The first srcset entry is used as listed; entries are not assumed to be
/// sorted by resolution. Never fails: a missing element yields `""`.
pub fn resolve_image(img: Option<ElementRef<'_>>) -> String {
    let img = match img {
        Some(el) => el,
        None => return String::new(),
    };
    let element = img.value();

    for attr in SRCSET_ATTRS {
        if let Some(url) = element.attr(attr).and_then(first_srcset_url) {
            return url;
        }
    }

    if let Some(lazy) = element.attr("data-src") {
        if !lazy.trim().is_empty() {
            return lazy.to_string();
        }
    }

    element.attr("src").unwrap_or_default().to_string()
}

/// URL token of the first srcset entry, if that entry has one
fn first_srcset_url(srcset: &str) -> Option<String> {
    srcset
        .split(',')
        .next()?
        .split_whitespace()
        .next()
        .map(str::to_string)
}
