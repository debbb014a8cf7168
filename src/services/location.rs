use std::sync::Arc;

use tracing::{debug, info, warn};

use super::capabilities::{GeolocationError, Geolocator, PositionOptions};
use super::geocoding::ReverseGeocoder;
use crate::libraries::address::resolve_address;
use crate::models::{Coordinates, LocationOutcome, ResolvedLocation, UnavailableReason};

/// Turns a device fix into a location record, degrading step by step:
/// no capability or no fix means `Unavailable`, a failed lookup keeps the
/// coordinate string. Never returns an error to the caller.
#[derive(Clone)]
pub struct LocationResolver {
    geolocator: Option<Arc<dyn Geolocator>>,
    geocoder: Arc<dyn ReverseGeocoder>,
    options: PositionOptions,
}

impl LocationResolver {
    /// `geolocator` is `None` when the device has no location capability
    pub fn new(
        geolocator: Option<Arc<dyn Geolocator>>,
        geocoder: Arc<dyn ReverseGeocoder>,
        options: PositionOptions,
    ) -> Self {
        Self {
            geolocator,
            geocoder,
            options,
        }
    }

    pub async fn resolve(&self) -> LocationOutcome {
        let Some(geolocator) = &self.geolocator else {
            warn!("Location capability not supported");
            return LocationOutcome::unavailable(UnavailableReason::NotSupported);
        };

        let fix = tokio::time::timeout(
            self.options.timeout,
            geolocator.current_position(self.options),
        )
        .await
        .unwrap_or(Err(GeolocationError::Timeout));

        let coordinates = match fix {
            Ok(coordinates) => coordinates,
            Err(e) => {
                warn!("Error getting location: {}", e);
                return LocationOutcome::unavailable(match e {
                    GeolocationError::PermissionDenied => UnavailableReason::PermissionDenied,
                    GeolocationError::Timeout => UnavailableReason::Timeout,
                    GeolocationError::PositionUnavailable(_) => UnavailableReason::FixFailed,
                });
            }
        };

        if !coordinates.is_valid() {
            warn!(
                "Discarding invalid fix ({}, {})",
                coordinates.latitude, coordinates.longitude
            );
            return LocationOutcome::unavailable(UnavailableReason::InvalidFix);
        }

        LocationOutcome::Resolved(self.enrich(coordinates).await)
    }

    pub async fn enrich(&self, coordinates: Coordinates) -> ResolvedLocation {
        enrich(self.geocoder.as_ref(), coordinates).await
    }
}

/// Best-effort reverse geocoding of an already validated fix
pub async fn enrich(geocoder: &dyn ReverseGeocoder, coordinates: Coordinates) -> ResolvedLocation {
    let response = match geocoder.reverse(coordinates).await {
        Ok(response) => Some(response),
        Err(e) => {
            info!("Geocoding failed, using coordinates: {}", e);
            None
        }
    };

    let location = resolve_address(coordinates, response.as_ref());
    debug!(
        "Resolved ({}, {}) to {:?} ({:?})",
        coordinates.latitude, coordinates.longitude, location.address, location.enrichment
    );
    location
}
