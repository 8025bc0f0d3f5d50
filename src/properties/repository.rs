//! Property storage.
//!
//! Listings live behind an explicit repository interface rather than
//! ambient browser storage. The only implementation is in-memory, seeded
//! with the fixed platform catalog; there is no persistence layer.

use std::sync::RwLock;

use crate::error::{AppError, Result};

use super::models::{platform_catalog, NewProperty, Property};

/// Create/list access to the listing catalog.
pub trait PropertyRepository: Send + Sync {
    /// Append a submitted listing and return it with its assigned id.
    fn create(&self, submission: NewProperty) -> Result<Property>;

    /// All listings in insertion order, seed catalog first.
    fn list(&self) -> Result<Vec<Property>>;
}

/// In-memory repository seeded with the platform catalog.
pub struct InMemoryPropertyRepository {
    entries: RwLock<Vec<Property>>,
}

impl InMemoryPropertyRepository {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(platform_catalog()),
        }
    }
}

impl Default for InMemoryPropertyRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl PropertyRepository for InMemoryPropertyRepository {
    fn create(&self, submission: NewProperty) -> Result<Property> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| AppError::Internal("property store lock poisoned".to_string()))?;

        let property = Property {
            id: format!("platform-{}", entries.len() + 1),
            title: submission.title,
            description: submission.description,
            location: submission.location,
            price: submission.price,
            // New submissions start unrated and unverified.
            rating: 0.0,
            verified: false,
        };
        entries.push(property.clone());
        Ok(property)
    }

    fn list(&self) -> Result<Vec<Property>> {
        let entries = self
            .entries
            .read()
            .map_err(|_| AppError::Internal("property store lock poisoned".to_string()))?;
        Ok(entries.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission(title: &str) -> NewProperty {
        NewProperty {
            title: title.to_string(),
            description: "A quiet homestay near the old town.".to_string(),
            location: "Pune, Maharashtra".to_string(),
            price: 2200,
            property_type: Some("Apartment".to_string()),
            max_guests: Some(3),
            amenities: vec!["WiFi".to_string()],
            host_name: Some("Asha Kulkarni".to_string()),
            host_email: Some("asha@example.com".to_string()),
        }
    }

    #[test]
    fn test_repository_starts_with_seed_catalog() {
        let repo = InMemoryPropertyRepository::new();
        let listings = repo.list().unwrap();
        assert_eq!(listings.len(), 3);
        assert_eq!(listings[0].id, "platform-1");
        assert_eq!(listings[2].id, "platform-3");
    }

    #[test]
    fn test_create_appends_and_assigns_next_id() {
        let repo = InMemoryPropertyRepository::new();
        let created = repo.create(submission("Old Town Apartment")).unwrap();
        assert_eq!(created.id, "platform-4");
        assert_eq!(created.rating, 0.0);
        assert!(!created.verified);

        let listings = repo.list().unwrap();
        assert_eq!(listings.len(), 4);
        assert_eq!(listings[3].title, "Old Town Apartment");
    }

    #[test]
    fn test_created_listings_preserve_insertion_order() {
        let repo = InMemoryPropertyRepository::new();
        repo.create(submission("First")).unwrap();
        repo.create(submission("Second")).unwrap();
        let listings = repo.list().unwrap();
        assert_eq!(listings[3].title, "First");
        assert_eq!(listings[4].title, "Second");
    }
}
