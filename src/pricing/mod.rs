//! Pricing engine module.
//!
//! Computes suggested nightly prices for listings from a base price, the
//! property rating, selected amenities and three sampled market factors.
//! The math itself lives in `calculators` and is pure; sampling happens at
//! the route boundary through an injectable random source.

pub mod calculators;
pub mod models;
pub mod requests;
pub mod responses;
pub mod routes;

// Re-export commonly used items
pub use calculators::{suggest_price, PriceBreakdown, PriceQuote, PRICE_FLOOR};
pub use models::{Competition, Demand, MarketFactors, Seasonality};
