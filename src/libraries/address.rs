use crate::models::{AddressComponents, Coordinates, GeocodeResponse, ResolvedLocation};

type FieldExtractor = fn(&AddressComponents) -> Option<&str>;

/// Place name candidates, most specific settlement first. First non-empty wins.
pub const PLACE_FIELDS: &[(&str, FieldExtractor)] = &[
    ("city", |a| a.city.as_deref()),
    ("town", |a| a.town.as_deref()),
    ("village", |a| a.village.as_deref()),
    ("suburb", |a| a.suburb.as_deref()),
    ("neighbourhood", |a| a.neighbourhood.as_deref()),
];

/// Region candidates. First non-empty wins.
pub const REGION_FIELDS: &[(&str, FieldExtractor)] = &[
    ("state", |a| a.state.as_deref()),
    ("province", |a| a.province.as_deref()),
    ("region", |a| a.region.as_deref()),
];

/// Evaluate extractors in order and return the first non-blank value.
///
/// Values are trimmed before the check, and the trimmed slice is returned.
pub fn first_match<'a>(
    components: &'a AddressComponents,
    extractors: &[(&str, FieldExtractor)],
) -> Option<&'a str> {
    extractors
        .iter()
        .filter_map(|(_, extract)| extract(components))
        .map(str::trim)
        .find(|value| !value.is_empty())
}

/// Build a short human readable address from a reverse geocoding response.
///
/// Returns `None` when the response has nothing usable, in which case the
/// caller keeps the provisional coordinate string.
pub fn compose_address(response: &GeocodeResponse) -> Option<String> {
    let empty = AddressComponents::default();
    let components = response.address.as_ref().unwrap_or(&empty);
    let place = first_match(components, PLACE_FIELDS);
    let region = first_match(components, REGION_FIELDS);

    match (place, region) {
        (Some(place), Some(region)) => Some(format!("{}, {}", place, region)),
        (Some(place), None) => Some(place.to_string()),
        // Region alone is never used
        (None, _) => response
            .display_name
            .as_deref()
            .and_then(address_from_display_name),
    }
}

/// "Place, ..., Region, Country" -> "Place, Region"
pub fn address_from_display_name(display_name: &str) -> Option<String> {
    if display_name.trim().is_empty() {
        return None;
    }

    let parts: Vec<&str> = display_name.split(',').map(str::trim).collect();
    if parts.len() >= 2 {
        Some(format!("{}, {}", parts[0], parts[parts.len() - 2]))
    } else {
        parts
            .first()
            .filter(|first| !first.is_empty())
            .map(|first| first.to_string())
    }
}

/// Turn a fix plus an optional lookup result into a location, degrading to
/// the coordinate string whenever no address can be extracted
pub fn resolve_address(
    coordinates: Coordinates,
    response: Option<&GeocodeResponse>,
) -> ResolvedLocation {
    match response.and_then(compose_address) {
        Some(address) => ResolvedLocation::geocoded(coordinates, address),
        None => ResolvedLocation::coordinates_only(coordinates),
    }
}
