use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    /// Create a new coordinate pair
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// Validate that coordinates are finite and within valid GPS ranges
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }
}

/// Provisional address: both axes to 4 decimal places, e.g. "19.0760, 72.8777"
impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {}",
            fixed_four(self.latitude),
            fixed_four(self.longitude)
        )
    }
}

/// Four decimal places, exact midpoints rounded away from zero.
///
/// `{:.4}` sends midpoints to even. A 4-place midpoint is always an odd
/// multiple of 1/32, so its exact expansion ends within 20 digits and its
/// neighbours differ from it before the 20th.
fn fixed_four(value: f64) -> String {
    // -0.0 prints as "0.0000"
    let value = value + 0.0;
    let exact = format!("{:.20}", value.abs());
    let is_midpoint = exact
        .split_once('.')
        .and_then(|(_, fraction)| fraction.get(4..))
        .is_some_and(|tail| tail == "5000000000000000");

    if !is_midpoint {
        return format!("{:.4}", value);
    }

    // value * 10_000 is an exact half-integer here
    let magnitude = (value.abs() * 10_000.0).ceil() / 10_000.0;
    let sign = if value < 0.0 { "-" } else { "" };
    format!("{}{:.4}", sign, magnitude)
}

/// Where a resolved address came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Enrichment {
    /// Address extracted from a reverse geocoding response
    Geocoded,
    /// Lookup failed or yielded nothing; address is the coordinate string
    CoordinatesOnly,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedLocation {
    pub coordinates: Coordinates,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    pub enrichment: Enrichment,
}

impl ResolvedLocation {
    /// Degraded location whose address is the formatted coordinates
    pub fn coordinates_only(coordinates: Coordinates) -> Self {
        Self {
            coordinates,
            address: Some(coordinates.to_string()),
            enrichment: Enrichment::CoordinatesOnly,
        }
    }

    pub fn geocoded(coordinates: Coordinates, address: String) -> Self {
        Self {
            coordinates,
            address: Some(address),
            enrichment: Enrichment::Geocoded,
        }
    }

    /// Text shown under the location heading
    pub fn label(&self) -> String {
        self.address
            .clone()
            .unwrap_or_else(|| self.coordinates.to_string())
    }
}

/// Why a location could not be attached to a report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[serde(rename_all = "snake_case")]
pub enum UnavailableReason {
    #[error("Location services are not supported on this device.")]
    NotSupported,

    #[error("Location permission was denied.")]
    PermissionDenied,

    #[error("Timed out waiting for a position fix.")]
    Timeout,

    #[error("The device could not determine its position.")]
    FixFailed,

    #[error("The device reported invalid coordinates.")]
    InvalidFix,
}

/// Terminal result of one location resolution attempt
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum LocationOutcome {
    Resolved(ResolvedLocation),
    Unavailable { reason: UnavailableReason },
}

impl LocationOutcome {
    pub fn unavailable(reason: UnavailableReason) -> Self {
        Self::Unavailable { reason }
    }

    pub fn into_location(self) -> Option<ResolvedLocation> {
        match self {
            Self::Resolved(location) => Some(location),
            Self::Unavailable { .. } => None,
        }
    }
}
