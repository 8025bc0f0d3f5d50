//! Core pricing calculation functions.
//!
//! Pure functions for the suggestion math - no I/O and no sampling. The
//! market factors arrive already sampled so every function here is total
//! and exactly reproducible.

use super::models::MarketFactors;

/// A suggestion never goes below this nightly price.
pub const PRICE_FLOOR: i64 = 1000;

/// Flat bonus per selected amenity.
pub const AMENITY_BONUS: i64 = 50;

/// Bonus for each selected amenity: 50 rupees apiece.
pub fn amenities_bonus(amenity_count: usize) -> i64 {
    AMENITY_BONUS * amenity_count as i64
}

/// Rating bonus: 200 above 4.5 stars, 100 above 4.0, nothing below.
pub fn rating_bonus(rating: f64) -> i64 {
    if rating > 4.5 {
        200
    } else if rating > 4.0 {
        100
    } else {
        0
    }
}

/// Confidence percentage for a suggestion, bounded to [0, 95].
///
/// Starts at 60 and grows with the property rating and the number of
/// amenities the host has declared.
pub fn confidence(rating: f64, amenity_count: usize) -> f64 {
    let raw = 60.0 + (rating - 3.0) * 10.0 + amenity_count as f64 * 5.0;
    raw.clamp(0.0, 95.0)
}

/// Itemized terms of a suggestion. Summing `base_rate` and the five
/// adjustments reproduces the suggested price exactly unless
/// `floor_applied` is set, in which case the suggestion is the floor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceBreakdown {
    pub base_rate: i64,
    pub demand_adjustment: i64,
    pub seasonality_adjustment: i64,
    pub competition_adjustment: i64,
    pub amenities_bonus: i64,
    pub rating_bonus: i64,
    pub floor_applied: bool,
}

/// A complete pricing suggestion.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceQuote {
    pub base_price: i64,
    pub suggested_price: i64,
    pub confidence: f64,
    pub factors: MarketFactors,
    pub breakdown: PriceBreakdown,
}

/// Compute a suggested nightly price from the base price, the property
/// rating, the amenity count and the sampled market factors.
///
/// Negative base prices are clamped to zero; beyond that the function is
/// total over its inputs.
pub fn suggest_price(
    base_price: i64,
    rating: f64,
    amenity_count: usize,
    factors: MarketFactors,
) -> PriceQuote {
    let base_rate = base_price.max(0);

    let demand_adjustment = factors.demand.adjustment();
    let seasonality_adjustment = factors.seasonality.adjustment();
    let competition_adjustment = factors.competition.adjustment();
    let amenities_bonus = amenities_bonus(amenity_count);
    let rating_bonus = rating_bonus(rating);

    let unclamped = base_rate
        + demand_adjustment
        + seasonality_adjustment
        + competition_adjustment
        + amenities_bonus
        + rating_bonus;
    let suggested_price = unclamped.max(PRICE_FLOOR);

    PriceQuote {
        base_price: base_rate,
        suggested_price,
        confidence: confidence(rating, amenity_count),
        factors,
        breakdown: PriceBreakdown {
            base_rate,
            demand_adjustment,
            seasonality_adjustment,
            competition_adjustment,
            amenities_bonus,
            rating_bonus,
            floor_applied: unclamped < PRICE_FLOOR,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::models::{Competition, Demand, Seasonality};

    fn fixed_factors() -> MarketFactors {
        MarketFactors {
            demand: Demand::Medium,
            seasonality: Seasonality::Normal,
            competition: Competition::Medium,
        }
    }

    fn worst_factors() -> MarketFactors {
        MarketFactors {
            demand: Demand::Low,
            seasonality: Seasonality::Off,
            competition: Competition::High,
        }
    }

    // ==================== suggest_price tests ====================

    #[test]
    fn test_suggest_price_additive_model() {
        // 2500 + 150 + 100 + 0 + 2*50 + 100 (rating 4.2) = 2950
        let quote = suggest_price(2500, 4.2, 2, fixed_factors());
        assert_eq!(quote.suggested_price, 2950);
        assert_eq!(quote.breakdown.demand_adjustment, 150);
        assert_eq!(quote.breakdown.seasonality_adjustment, 100);
        assert_eq!(quote.breakdown.competition_adjustment, 0);
        assert_eq!(quote.breakdown.amenities_bonus, 100);
        assert_eq!(quote.breakdown.rating_bonus, 100);
        assert!(!quote.breakdown.floor_applied);
    }

    #[test]
    fn test_suggest_price_floor_invariant() {
        for base in [0, 500, 1000, 1250, 9999] {
            let quote = suggest_price(base, 3.0, 0, worst_factors());
            assert!(quote.suggested_price >= PRICE_FLOOR);
        }
    }

    #[test]
    fn test_suggest_price_floor_flag_set_when_clamped() {
        // 1000 - 100 - 200 - 150 = 550, clamped to 1000
        let quote = suggest_price(1000, 3.0, 0, worst_factors());
        assert_eq!(quote.suggested_price, PRICE_FLOOR);
        assert!(quote.breakdown.floor_applied);

        let quote = suggest_price(5000, 3.0, 0, worst_factors());
        assert_eq!(quote.suggested_price, 4550);
        assert!(!quote.breakdown.floor_applied);
    }

    #[test]
    fn test_breakdown_reconciles_with_suggested_price() {
        let quote = suggest_price(3200, 4.8, 4, fixed_factors());
        let b = &quote.breakdown;
        let sum = b.base_rate
            + b.demand_adjustment
            + b.seasonality_adjustment
            + b.competition_adjustment
            + b.amenities_bonus
            + b.rating_bonus;
        assert_eq!(sum, quote.suggested_price);
        assert!(!b.floor_applied);
    }

    #[test]
    fn test_negative_base_price_is_clamped_to_zero() {
        let quote = suggest_price(-500, 4.0, 0, fixed_factors());
        assert_eq!(quote.base_price, 0);
        assert_eq!(quote.breakdown.base_rate, 0);
        assert_eq!(quote.suggested_price, PRICE_FLOOR);
    }

    #[test]
    fn test_each_amenity_adds_exactly_fifty() {
        for count in 0..8 {
            let a = suggest_price(2500, 4.2, count, fixed_factors());
            let b = suggest_price(2500, 4.2, count + 1, fixed_factors());
            assert_eq!(
                b.breakdown.amenities_bonus - a.breakdown.amenities_bonus,
                AMENITY_BONUS
            );
            assert!(b.suggested_price >= a.suggested_price);
        }
    }

    // ==================== rating_bonus tests ====================

    #[test]
    fn test_rating_bonus_tiers() {
        assert_eq!(rating_bonus(5.0), 200);
        assert_eq!(rating_bonus(4.6), 200);
        assert_eq!(rating_bonus(4.5), 100); // boundary: strictly above 4.5
        assert_eq!(rating_bonus(4.1), 100);
        assert_eq!(rating_bonus(4.0), 0); // boundary: strictly above 4.0
        assert_eq!(rating_bonus(3.0), 0);
    }

    // ==================== confidence tests ====================

    #[test]
    fn test_confidence_bounds() {
        assert_eq!(confidence(3.0, 0), 60.0);
        assert_eq!(confidence(4.2, 2), 82.0);
        // 60 + 20 + 30 = 110, capped at 95
        assert_eq!(confidence(5.0, 6), 95.0);
        // Out-of-range rating still cannot go negative
        assert_eq!(confidence(-10.0, 0), 0.0);
    }

    #[test]
    fn test_confidence_non_decreasing_in_rating() {
        let mut prev = 0.0;
        for tenths in 30..=50 {
            let c = confidence(tenths as f64 / 10.0, 2);
            assert!(c >= prev);
            assert!((0.0..=95.0).contains(&c));
            prev = c;
        }
    }
}
