//! Merge platform-catalog matches with external search results.
//!
//! Ordering invariant: platform listings always come before external
//! results, each group in insertion order. This is origin ordering, not a
//! quality ranking.

use rand::Rng;

use crate::properties::models::Property;

use super::client::ExternalSnippet;
use super::extract;
use super::responses::SearchResult;

/// Stock description for snippets that arrive without one.
const STOCK_DESCRIPTION: &str =
    "Experience authentic Indian hospitality in this lovely homestay.";

/// Filter the platform catalog with a case-insensitive substring match
/// against location, title and description. An empty query matches every
/// listing; catalog order is preserved.
pub fn filter_platform(listings: &[Property], query: &str) -> Vec<SearchResult> {
    let query = query.to_lowercase();
    listings
        .iter()
        .filter(|property| {
            query.is_empty()
                || property.location.to_lowercase().contains(&query)
                || property.title.to_lowercase().contains(&query)
                || property.description.to_lowercase().contains(&query)
        })
        .map(platform_result)
        .collect()
}

/// Map a platform listing into the unified result shape.
fn platform_result(property: &Property) -> SearchResult {
    SearchResult {
        title: property.title.clone(),
        description: property.description.clone(),
        url: format!("/property/{}", property.id),
        location: property.location.clone(),
        price: format!("₹{}", property.price),
        rating: property.rating,
        verified: property.verified,
        is_platform_property: true,
    }
}

/// Map an external snippet into the unified result shape, recovering
/// location, price and rating from the free text. Draw order for
/// synthesized fields is price, rating, verified; seeded tests rely on it.
pub fn external_result(snippet: &ExternalSnippet, rng: &mut impl Rng) -> SearchResult {
    let text = snippet.text();
    let location = extract::extract_location(&text);

    SearchResult {
        title: snippet
            .name
            .clone()
            .unwrap_or_else(|| format!("Beautiful Homestay in {location}")),
        description: snippet
            .snippet
            .as_deref()
            .or(snippet.description.as_deref())
            .unwrap_or(STOCK_DESCRIPTION)
            .to_string(),
        url: snippet.url.clone().unwrap_or_else(|| "#".to_string()),
        location,
        price: extract::extract_price(&text, rng),
        rating: extract::extract_rating(&text, rng),
        verified: extract::sample_verified(rng),
        is_platform_property: false,
    }
}

/// Compose the final ordered result list: platform matches first, then the
/// external snippets mapped through the extraction heuristics.
pub fn compose(
    listings: &[Property],
    query: &str,
    snippets: &[ExternalSnippet],
    rng: &mut impl Rng,
) -> Vec<SearchResult> {
    let mut results = filter_platform(listings, query);
    results.extend(snippets.iter().map(|snippet| external_result(snippet, rng)));
    results
}
