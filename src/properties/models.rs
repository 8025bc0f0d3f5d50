//! Property listing models

use serde::{Deserialize, Serialize};

/// A listing on the platform.
///
/// The seed catalog is reference data created at startup; submitted
/// listings are appended through the repository and share this shape.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub id: String,
    pub title: String,
    pub description: String,
    pub location: String,
    /// Nightly price in whole rupees.
    pub price: i64,
    /// Guest rating in [0, 5].
    pub rating: f64,
    pub verified: bool,
}

/// A host's listing submission.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProperty {
    pub title: String,
    pub description: String,
    pub location: String,
    pub price: i64,
    #[serde(default)]
    pub property_type: Option<String>,
    #[serde(default)]
    pub max_guests: Option<u32>,
    #[serde(default)]
    pub amenities: Vec<String>,
    #[serde(default)]
    pub host_name: Option<String>,
    #[serde(default)]
    pub host_email: Option<String>,
}

/// The fixed platform catalog the marketplace launches with.
pub fn platform_catalog() -> Vec<Property> {
    vec![
        Property {
            id: "platform-1".to_string(),
            title: "Luxury Heritage Villa with Private Pool".to_string(),
            description: "Experience the perfect blend of traditional Indian architecture and \
                          modern luxury in this stunning heritage villa located in Jaipur."
                .to_string(),
            location: "Jaipur, Rajasthan".to_string(),
            price: 8500,
            rating: 4.9,
            verified: true,
        },
        Property {
            id: "platform-2".to_string(),
            title: "Cozy Beachside Cottage in Goa".to_string(),
            description: "Beautiful beachfront property with modern amenities and stunning \
                          ocean views. Perfect for romantic getaways."
                .to_string(),
            location: "South Goa, Goa".to_string(),
            price: 3500,
            rating: 4.7,
            verified: true,
        },
        Property {
            id: "platform-3".to_string(),
            title: "Traditional Kerala Houseboat".to_string(),
            description: "Authentic houseboat experience with traditional Kerala cuisine and \
                          serene backwater views."
                .to_string(),
            location: "Alleppey, Kerala".to_string(),
            price: 4500,
            rating: 4.8,
            verified: false,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_catalog_golden_fields() {
        let catalog = platform_catalog();
        assert_eq!(catalog.len(), 3);

        assert_eq!(catalog[0].id, "platform-1");
        assert_eq!(catalog[0].price, 8500);
        assert_eq!(catalog[0].rating, 4.9);
        assert!(catalog[0].verified);

        assert_eq!(catalog[1].location, "South Goa, Goa");
        assert_eq!(catalog[1].price, 3500);
        assert_eq!(catalog[1].rating, 4.7);
        assert!(catalog[1].verified);

        assert_eq!(catalog[2].location, "Alleppey, Kerala");
        assert_eq!(catalog[2].price, 4500);
        assert_eq!(catalog[2].rating, 4.8);
        assert!(!catalog[2].verified);
    }

    #[test]
    fn test_property_serializes_camel_case() {
        let json = serde_json::to_value(&platform_catalog()[0]).unwrap();
        assert_eq!(json["id"], "platform-1");
        assert_eq!(json["price"], 8500);
        assert_eq!(json["verified"], true);
    }
}
