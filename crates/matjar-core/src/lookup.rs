//! Slug resolution and live-search filtering over an in-memory catalog.
//!
//! Both are linear scans. The catalog is a single storefront's feed (tens to
//! low hundreds of entries), so no index is built.

use crate::products::Product;
use crate::slug::slugify;

/// Number of suggestions the search widget shows.
pub const DEFAULT_SUGGESTION_LIMIT: usize = 5;

/// Returns the first product whose title normalizes to `target_slug`.
///
/// Returns `None` for an empty slug or when nothing matches. When several
/// titles share a slug, catalog order decides.
#[must_use]
pub fn resolve<'a>(catalog: &'a [Product], target_slug: &str) -> Option<&'a Product> {
    if target_slug.is_empty() {
        return None;
    }
    catalog
        .iter()
        .find(|product| slugify(&product.title) == target_slug)
}

/// Returns up to `limit` products whose title contains `query`,
/// case-insensitively, in catalog order.
///
/// A blank query yields no suggestions rather than the whole catalog.
#[must_use]
pub fn filter_suggestions<'a>(
    catalog: &'a [Product],
    query: &str,
    limit: usize,
) -> Vec<&'a Product> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }
    catalog
        .iter()
        .filter(|product| product.title.to_lowercase().contains(&needle))
        .take(limit)
        .collect()
}
