use chrono::Utc;
use uuid::Uuid;

use crate::models::{ImagePayload, LocationOutcome, ReportDraft};

/// Combine a captured image and a settled location outcome into a draft.
///
/// Pure: an `Unavailable` outcome simply means the draft carries no location.
pub fn assemble(image: ImagePayload, location: LocationOutcome) -> ReportDraft {
    ReportDraft {
        id: Uuid::new_v4(),
        image,
        location: location.into_location(),
        issue_type: None,
        description: None,
        created_at: Utc::now(),
    }
}
