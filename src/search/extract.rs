//! Field-extraction heuristics for unstructured search snippets.
//!
//! External results arrive as free text, so location, price and rating are
//! recovered by a small ordered set of extractor rules, each with an
//! explicit default. Missing prices and ratings are synthesized from the
//! injected random source; the values are display decoration, not data.

use lazy_static::lazy_static;
use rand::Rng;
use regex::Regex;

/// Place names the extractor recognizes. The first entry of this list
/// found in the text wins, not the first occurrence in the text.
pub const KNOWN_PLACES: [&str; 11] = [
    "Mumbai",
    "Delhi",
    "Bangalore",
    "Goa",
    "Kerala",
    "Rajasthan",
    "Pune",
    "Chennai",
    "Manali",
    "Jaipur",
    "Alleppey",
];

/// Fallback location when no known place matches.
pub const DEFAULT_LOCATION: &str = "India";

lazy_static! {
    /// Rupee-prefixed amount, e.g. "₹2,500".
    static ref PRICE_RE: Regex = Regex::new(r"₹[\d,]+").unwrap();
    /// Rating out of five, e.g. "4.8/5" or "4 / 5".
    static ref RATING_RE: Regex = Regex::new(r"(\d+\.?\d*)\s*/\s*5").unwrap();
}

/// Extract a location from snippet text.
pub fn extract_location(text: &str) -> String {
    let lower = text.to_lowercase();
    KNOWN_PLACES
        .iter()
        .find(|place| lower.contains(&place.to_lowercase()))
        .map(|place| place.to_string())
        .unwrap_or_else(|| DEFAULT_LOCATION.to_string())
}

/// Extract a display price from snippet text, or synthesize one in the
/// 1500-4999 rupee range.
pub fn extract_price(text: &str, rng: &mut impl Rng) -> String {
    if let Some(found) = PRICE_RE.find(text) {
        return found.as_str().to_string();
    }
    format!("₹{}", rng.gen_range(1500..5000))
}

/// Extract a rating from snippet text, or synthesize one in [3.5, 5.0]
/// rounded to one decimal place.
pub fn extract_rating(text: &str, rng: &mut impl Rng) -> f64 {
    if let Some(caps) = RATING_RE.captures(text) {
        if let Ok(rating) = caps[1].parse::<f64>() {
            return rating;
        }
    }
    let sampled = rng.gen::<f64>() * 1.5 + 3.5;
    (sampled * 10.0).round() / 10.0
}

/// Sample a verification badge, true with p=0.7. External results carry no
/// persisted identity, so this is demo decoration rather than a trust
/// signal.
pub fn sample_verified(rng: &mut impl Rng) -> bool {
    rng.gen::<f64>() > 0.3
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_extract_location_known_place() {
        assert_eq!(
            extract_location("Beautiful beachside property in Goa with traditional architecture"),
            "Goa"
        );
        assert_eq!(extract_location("cozy flat in JAIPUR old town"), "Jaipur");
    }

    #[test]
    fn test_extract_location_defaults_to_india() {
        assert_eq!(extract_location("A lovely homestay near the hills"), "India");
        assert_eq!(extract_location(""), "India");
    }

    #[test]
    fn test_extract_location_list_order_wins_over_text_order() {
        // Alleppey appears first in the text, but Kerala comes first in the
        // known-places list.
        assert_eq!(extract_location("Alleppey backwaters, Kerala"), "Kerala");
    }

    #[test]
    fn test_extract_price_verbatim_match() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(extract_price("Rooms from ₹2,500 per night", &mut rng), "₹2,500");
        assert_eq!(extract_price("only ₹1800!", &mut rng), "₹1800");
    }

    #[test]
    fn test_extract_price_synthesizes_in_range() {
        let mut rng = StdRng::seed_from_u64(2);
        for _ in 0..100 {
            let price = extract_price("no price mentioned here", &mut rng);
            let amount: i64 = price.strip_prefix('₹').unwrap().parse().unwrap();
            assert!((1500..5000).contains(&amount));
        }
    }

    #[test]
    fn test_extract_rating_parses_out_of_five() {
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(extract_rating("Guests rate it 4.8/5", &mut rng), 4.8);
        assert_eq!(extract_rating("scored 4 / 5 overall", &mut rng), 4.0);
    }

    #[test]
    fn test_extract_rating_synthesizes_in_range() {
        let mut rng = StdRng::seed_from_u64(4);
        for _ in 0..100 {
            let rating = extract_rating("no rating in this text", &mut rng);
            assert!((3.5..=5.0).contains(&rating));
            // One decimal place
            assert_eq!((rating * 10.0).round() / 10.0, rating);
        }
    }

    #[test]
    fn test_sample_verified_is_seed_deterministic() {
        let mut a = StdRng::seed_from_u64(5);
        let mut b = StdRng::seed_from_u64(5);
        for _ in 0..20 {
            assert_eq!(sample_verified(&mut a), sample_verified(&mut b));
        }
    }
}
