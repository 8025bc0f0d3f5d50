//! Market factor types for the pricing engine.
//!
//! Live market data is out of scope, so each factor is sampled per request
//! from an injectable random source. Adjustment values are whole rupees.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Booking demand level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Demand {
    High,
    Medium,
    Low,
}

impl Demand {
    /// Sample from a single uniform draw: high with p=0.4, medium with p=0.3.
    pub fn sample(rng: &mut impl Rng) -> Self {
        let draw: f64 = rng.gen();
        if draw > 0.6 {
            Demand::High
        } else if draw > 0.3 {
            Demand::Medium
        } else {
            Demand::Low
        }
    }

    pub fn adjustment(self) -> i64 {
        match self {
            Demand::High => 300,
            Demand::Medium => 150,
            Demand::Low => -100,
        }
    }
}

/// Seasonal position of the booking window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Seasonality {
    Peak,
    Normal,
    Off,
}

impl Seasonality {
    /// Sample from a single uniform draw: peak with p=0.3, normal with p=0.4.
    pub fn sample(rng: &mut impl Rng) -> Self {
        let draw: f64 = rng.gen();
        if draw > 0.7 {
            Seasonality::Peak
        } else if draw > 0.3 {
            Seasonality::Normal
        } else {
            Seasonality::Off
        }
    }

    pub fn adjustment(self) -> i64 {
        match self {
            Seasonality::Peak => 400,
            Seasonality::Normal => 100,
            Seasonality::Off => -200,
        }
    }
}

/// Competing supply in the listing's market.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Competition {
    High,
    Medium,
    Low,
}

impl Competition {
    /// Sample from a single uniform draw: high with p=0.4, medium with p=0.3.
    pub fn sample(rng: &mut impl Rng) -> Self {
        let draw: f64 = rng.gen();
        if draw > 0.6 {
            Competition::High
        } else if draw > 0.3 {
            Competition::Medium
        } else {
            Competition::Low
        }
    }

    /// High competition pushes the suggestion down, low pushes it up.
    pub fn adjustment(self) -> i64 {
        match self {
            Competition::High => -150,
            Competition::Medium => 0,
            Competition::Low => 200,
        }
    }
}

/// The three market factors that feed a pricing suggestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarketFactors {
    pub demand: Demand,
    pub seasonality: Seasonality,
    pub competition: Competition,
}

impl MarketFactors {
    /// Sample all three factors. Draw order is demand, seasonality,
    /// competition; seeded tests rely on that order.
    pub fn sample(rng: &mut impl Rng) -> Self {
        Self {
            demand: Demand::sample(rng),
            seasonality: Seasonality::sample(rng),
            competition: Competition::sample(rng),
        }
    }
}
