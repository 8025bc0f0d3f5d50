//! Property route handlers

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;
use tracing::info;

use crate::error::{AppError, Result};
use crate::AppState;

use super::models::{NewProperty, Property};

/// Response for the listing index
#[derive(Debug, Serialize)]
pub struct PropertyListResponse {
    pub properties: Vec<Property>,
}

/// List all platform listings
pub async fn list(State(state): State<AppState>) -> Result<Json<PropertyListResponse>> {
    let properties = state.properties.list()?;
    Ok(Json(PropertyListResponse { properties }))
}

/// Accept a host's listing submission
pub async fn create(
    State(state): State<AppState>,
    Json(submission): Json<NewProperty>,
) -> Result<(StatusCode, Json<Property>)> {
    if submission.title.trim().is_empty()
        || submission.description.trim().is_empty()
        || submission.location.trim().is_empty()
    {
        return Err(AppError::BadRequest(
            "Title, description and location are required".to_string(),
        ));
    }
    if submission.price <= 0 {
        return Err(AppError::BadRequest("Price must be positive".to_string()));
    }

    let property = state.properties.create(submission)?;
    info!(id = %property.id, "listing submitted");
    Ok((StatusCode::CREATED, Json(property)))
}
