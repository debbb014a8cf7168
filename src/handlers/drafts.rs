use axum::{extract::State, Json};
use tracing::info;

use super::{error::ApiError, AppState};
use crate::libraries::assembler::assemble;
use crate::models::{
    CreateDraftRequest, ImagePayload, LocationOutcome, ReportDraft, UnavailableReason,
};
use crate::services::location::enrich;

/// Assemble a draft from an image the client captured and an optional fix
pub async fn create_draft(
    State(state): State<AppState>,
    Json(request): Json<CreateDraftRequest>,
) -> Result<Json<ReportDraft>, ApiError> {
    let image = ImagePayload::from_data_url(&request.image)?;

    let location = match request.location {
        Some(coordinates) if coordinates.is_valid() => {
            LocationOutcome::Resolved(enrich(state.geocoder.as_ref(), coordinates).await)
        }
        Some(_) => return Err(ApiError::InvalidCoordinates),
        None => LocationOutcome::unavailable(UnavailableReason::NotSupported),
    };

    let mut draft = assemble(image, location);
    if let Some(issue_type) = request.issue_type {
        draft = draft.with_issue_type(issue_type);
    }
    if let Some(description) = request.description {
        draft = draft.with_description(description);
    }

    info!(
        "Assembled draft {} ({}, location: {})",
        draft.id,
        draft.image.mime(),
        draft.location.is_some()
    );
    Ok(Json(draft))
}
