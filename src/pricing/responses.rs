//! Response DTOs for the pricing API.
//!
//! Field names are camelCase to match what the pricing panel in the web
//! client already consumes.

use serde::Serialize;

use super::calculators::PriceQuote;
use super::models::{Competition, Demand, Seasonality};

/// Factors echoed back alongside a suggestion
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingFactorsResponse {
    pub demand: Demand,
    pub seasonality: Seasonality,
    pub competition: Competition,
    pub amenities: Vec<String>,
    pub location: String,
    pub rating: f64,
}

/// Itemized price breakdown
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceBreakdownResponse {
    pub base_rate: i64,
    pub demand_adjustment: i64,
    pub seasonality_adjustment: i64,
    pub competition_adjustment: i64,
    pub amenities_bonus: i64,
    pub rating_bonus: i64,
    /// True when the suggestion was clamped to the floor, so the terms
    /// above no longer sum to `suggestedPrice`.
    pub floor_applied: bool,
}

/// Response for a pricing suggestion
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingSuggestionResponse {
    pub base_price: i64,
    pub suggested_price: i64,
    pub confidence: f64,
    pub factors: PricingFactorsResponse,
    pub breakdown: PriceBreakdownResponse,
}

impl PricingSuggestionResponse {
    /// Build the wire response from a quote plus the echoed request fields.
    pub fn from_quote(quote: PriceQuote, amenities: Vec<String>, location: String, rating: f64) -> Self {
        Self {
            base_price: quote.base_price,
            suggested_price: quote.suggested_price,
            confidence: quote.confidence,
            factors: PricingFactorsResponse {
                demand: quote.factors.demand,
                seasonality: quote.factors.seasonality,
                competition: quote.factors.competition,
                amenities,
                location,
                rating,
            },
            breakdown: PriceBreakdownResponse {
                base_rate: quote.breakdown.base_rate,
                demand_adjustment: quote.breakdown.demand_adjustment,
                seasonality_adjustment: quote.breakdown.seasonality_adjustment,
                competition_adjustment: quote.breakdown.competition_adjustment,
                amenities_bonus: quote.breakdown.amenities_bonus,
                rating_bonus: quote.breakdown.rating_bonus,
                floor_applied: quote.breakdown.floor_applied,
            },
        }
    }
}
