//! Request DTOs for the pricing API.

use serde::Deserialize;

/// Request to calculate a suggested nightly price
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestPriceRequest {
    pub base_price: i64,
    pub rating: f64,
    #[serde(default)]
    pub amenities: Vec<String>,
    #[serde(default = "default_location")]
    pub location: String,
}

fn default_location() -> String {
    "Goa, India".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_minimal_request() {
        let req: SuggestPriceRequest =
            serde_json::from_str(r#"{"basePrice": 2500, "rating": 4.2}"#).unwrap();
        assert_eq!(req.base_price, 2500);
        assert!(req.amenities.is_empty());
        assert_eq!(req.location, "Goa, India");
    }

    #[test]
    fn test_deserialize_full_request() {
        let req: SuggestPriceRequest = serde_json::from_str(
            r#"{"basePrice": 8500, "rating": 4.9, "amenities": ["WiFi", "Pool"], "location": "Jaipur, Rajasthan"}"#,
        )
        .unwrap();
        assert_eq!(req.amenities.len(), 2);
        assert_eq!(req.location, "Jaipur, Rajasthan");
    }
}
