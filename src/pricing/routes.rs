//! Pricing route handlers

use axum::Json;
use tracing::debug;

use super::calculators::suggest_price;
use super::models::MarketFactors;
use super::requests::SuggestPriceRequest;
use super::responses::PricingSuggestionResponse;

/// Suggest a nightly price for a listing.
///
/// Total over its inputs, so this handler has no error path.
pub async fn suggest(Json(req): Json<SuggestPriceRequest>) -> Json<PricingSuggestionResponse> {
    let factors = MarketFactors::sample(&mut rand::thread_rng());
    let quote = suggest_price(req.base_price, req.rating, req.amenities.len(), factors);

    debug!(
        base_price = req.base_price,
        suggested_price = quote.suggested_price,
        confidence = quote.confidence,
        "pricing suggestion computed"
    );

    Json(PricingSuggestionResponse::from_quote(
        quote,
        req.amenities,
        req.location,
        req.rating,
    ))
}
