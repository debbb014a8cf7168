use serde::{Deserialize, Serialize};

/// Reverse geocoding response body (`format=json&addressdetails=1`).
/// Only the fields the address extraction reads are kept.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GeocodeResponse {
    #[serde(default)]
    pub address: Option<AddressComponents>,
    #[serde(default)]
    pub display_name: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AddressComponents {
    pub city: Option<String>,
    pub town: Option<String>,
    pub village: Option<String>,
    pub suburb: Option<String>,
    pub neighbourhood: Option<String>,
    pub state: Option<String>,
    pub province: Option<String>,
    pub region: Option<String>,
}
