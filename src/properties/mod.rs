//! Listing catalog module.
//!
//! Holds the platform catalog and the repository interface that listing
//! submissions go through. Search reads listings from here.

pub mod models;
pub mod repository;
pub mod routes;

pub use models::{platform_catalog, NewProperty, Property};
pub use repository::{InMemoryPropertyRepository, PropertyRepository};
