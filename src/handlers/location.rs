use axum::{extract::State, Json};
use tracing::debug;

use super::{error::ApiError, AppState};
use crate::models::{ResolveLocationRequest, ResolvedLocation};
use crate::services::location::enrich;

/// Enrich a fix that the client obtained itself.
///
/// Geocoding failures still answer 200 with the coordinate string as the
/// address; only coordinates outside valid ranges are rejected.
pub async fn resolve_location(
    State(state): State<AppState>,
    Json(request): Json<ResolveLocationRequest>,
) -> Result<Json<ResolvedLocation>, ApiError> {
    let coordinates = request.coordinates();
    debug!(
        "Resolving location ({}, {})",
        coordinates.latitude, coordinates.longitude
    );

    if !coordinates.is_valid() {
        return Err(ApiError::InvalidCoordinates);
    }

    Ok(Json(enrich(state.geocoder.as_ref(), coordinates).await))
}
