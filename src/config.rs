use std::time::Duration;

use serde::Deserialize;

use crate::services::capabilities::{CameraOptions, PositionOptions};

/// Service and device settings read from the environment.
///
/// The HTTP server only uses `PORT` and the `GEOCODER_*` settings. The
/// `LOCATION_*` and `CAMERA_QUALITY` settings are for embedders that drive a
/// `ReportSession` with real device capabilities; see `position_options` and
/// `camera_options`.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_port")]
    pub port: u16,

    // Base URL of the Nominatim-compatible reverse geocoding service
    #[serde(default = "default_geocoder_url")]
    pub geocoder_url: String,

    // Nominatim's usage policy rejects requests without an identifying agent
    #[serde(default = "default_geocoder_user_agent")]
    pub geocoder_user_agent: String,

    #[serde(default = "default_geocoder_timeout_secs")]
    pub geocoder_timeout_secs: u64,

    // Optional Accept-Language for place names (e.g. "en", "hi")
    #[serde(default)]
    pub geocoder_language: Option<String>,

    #[serde(default = "default_location_timeout_secs")]
    pub location_timeout_secs: u64,

    // Oldest cached fix the device may hand back
    #[serde(default = "default_location_max_age_secs")]
    pub location_max_age_secs: u64,

    #[serde(default = "default_camera_quality")]
    pub camera_quality: u8,
}

impl Config {
    pub fn from_env() -> Result<Self, envy::Error> {
        envy::from_env::<Config>()
    }

    pub fn geocoder_timeout(&self) -> Duration {
        Duration::from_secs(self.geocoder_timeout_secs)
    }

    /// Options for the one-shot position fix requested on screen entry
    pub fn position_options(&self) -> PositionOptions {
        PositionOptions {
            high_accuracy: true,
            timeout: Duration::from_secs(self.location_timeout_secs),
            maximum_age: Duration::from_secs(self.location_max_age_secs),
        }
    }

    /// Options for the camera request behind `PhotoAcquirer`
    pub fn camera_options(&self) -> CameraOptions {
        CameraOptions {
            quality: self.camera_quality.min(100),
            ..CameraOptions::default()
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: default_port(),
            geocoder_url: default_geocoder_url(),
            geocoder_user_agent: default_geocoder_user_agent(),
            geocoder_timeout_secs: default_geocoder_timeout_secs(),
            geocoder_language: None,
            location_timeout_secs: default_location_timeout_secs(),
            location_max_age_secs: default_location_max_age_secs(),
            camera_quality: default_camera_quality(),
        }
    }
}

fn default_port() -> u16 {
    3000
}

fn default_geocoder_url() -> String {
    "https://nominatim.openstreetmap.org".to_string()
}

fn default_geocoder_user_agent() -> String {
    format!("civic-report/{}", env!("CARGO_PKG_VERSION"))
}

fn default_geocoder_timeout_secs() -> u64 {
    10
}

fn default_location_timeout_secs() -> u64 {
    10
}

fn default_location_max_age_secs() -> u64 {
    300
}

fn default_camera_quality() -> u8 {
    90
}
