use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::Value;
use uuid::Uuid;

use reviewd_core::review::{validate_review_payload, Review, ReviewFields};

use crate::{error::ApiError, state::AppState};

/// List all reviews (GET /reviews).
///
/// Returns the whole collection: unfiltered, unordered, unpaginated.
pub async fn list_reviews(State(state): State<AppState>) -> Result<Json<Vec<Review>>, ApiError> {
    let reviews = state.reviews.scan_reviews().await?;
    Ok(Json(reviews))
}

/// Create a new review (POST /reviews).
pub async fn create_review(
    State(state): State<AppState>,
    body: String,
) -> Result<(StatusCode, Json<Review>), ApiError> {
    let fields = parse_payload(&body)?;
    let review = fields.into_review(Uuid::new_v4().to_string());

    state.reviews.put_review(&review).await?;

    tracing::info!(review_id = %review.review_id, se_id = %review.se_id, "Created new review");

    Ok((StatusCode::CREATED, Json(review)))
}

/// Get a single review by ID (GET /reviews/{id}).
pub async fn get_review(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Review>, ApiError> {
    let review = fetch_review(&state, &id).await?;
    Ok(Json(review))
}

/// Replace a review by ID (PUT /reviews/{id}).
///
/// Every field is overwritten except the identifier, which always comes
/// from the path regardless of the request body. Updating an absent
/// identifier never creates a record.
pub async fn update_review(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: String,
) -> Result<Json<Review>, ApiError> {
    fetch_review(&state, &id).await?;

    let fields = parse_payload(&body)?;
    let review = fields.into_review(id);

    state.reviews.put_review(&review).await?;

    tracing::info!(review_id = %review.review_id, "Replaced review");

    Ok(Json(review))
}

/// Delete a review by ID (DELETE /reviews/{id}).
///
/// Returns 204 with an empty body.
pub async fn delete_review(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    fetch_review(&state, &id).await?;

    state.reviews.delete_review(&id).await?;

    tracing::info!(review_id = %id, "Deleted review");

    Ok(StatusCode::NO_CONTENT)
}

/// Fetches a review or fails with the not-found response.
async fn fetch_review(state: &AppState, id: &str) -> Result<Review, ApiError> {
    state
        .reviews
        .get_review(id)
        .await?
        .ok_or(ApiError::NotFound)
}

/// Decodes a request body and validates it into review fields.
fn parse_payload(body: &str) -> Result<ReviewFields, ApiError> {
    let payload: Value =
        serde_json::from_str(body).map_err(|e| ApiError::MalformedBody(e.to_string()))?;
    validate_review_payload(&payload).map_err(ApiError::Validation)
}
