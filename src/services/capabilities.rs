//! Device capabilities the pipeline calls into.
//!
//! The embedding client implements these on top of whatever the platform
//! offers (native camera plugin, browser file input, browser geolocation).

use std::time::Duration;

use axum::async_trait;
use serde::{Deserialize, Serialize};

use crate::models::Coordinates;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CameraResultType {
    DataUrl,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CameraSource {
    Camera,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CameraOptions {
    pub quality: u8, // 0-100
    pub allow_editing: bool,
    pub result_type: CameraResultType,
    pub source: CameraSource,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            quality: 90,
            allow_editing: false,
            result_type: CameraResultType::DataUrl,
            source: CameraSource::Camera,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CameraPhoto {
    pub data_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CameraError {
    #[error("Camera is not available on this device.")]
    Unavailable,

    #[error("Camera permission was denied.")]
    PermissionDenied,

    #[error("Camera was closed without taking a photo.")]
    Cancelled,

    #[error("Camera failed: {0}")]
    Other(String),
}

#[async_trait]
pub trait Camera: Send + Sync {
    async fn get_photo(&self, options: CameraOptions) -> Result<CameraPhoto, CameraError>;
}

/// Hint to the OS about which camera a capture-capable chooser should open
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaptureHint {
    Environment,
    User,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilePickOptions {
    pub accept: String,
    pub capture: Option<CaptureHint>,
    pub multiple: bool,
}

impl Default for FilePickOptions {
    fn default() -> Self {
        Self {
            accept: "image/*".to_string(),
            capture: Some(CaptureHint::Environment),
            multiple: false,
        }
    }
}

/// A fully read file handed back by the chooser
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickedFile {
    pub name: String,
    pub mime: Option<String>,
    pub bytes: Vec<u8>,
}

#[derive(Debug, thiserror::Error)]
pub enum FilePickError {
    #[error("File selection is not available.")]
    Unavailable,

    #[error("Failed to read the selected file: {0}")]
    Io(#[from] std::io::Error),
}

#[async_trait]
pub trait FilePicker: Send + Sync {
    /// `Ok(None)` means the chooser was dismissed without a file
    async fn pick(&self, options: FilePickOptions) -> Result<Option<PickedFile>, FilePickError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionOptions {
    pub high_accuracy: bool,
    pub timeout: Duration,
    pub maximum_age: Duration,
}

impl Default for PositionOptions {
    fn default() -> Self {
        Self {
            high_accuracy: true,
            timeout: Duration::from_secs(10),
            maximum_age: Duration::from_secs(5 * 60),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GeolocationError {
    #[error("Location permission was denied.")]
    PermissionDenied,

    #[error("Timed out waiting for a position fix.")]
    Timeout,

    #[error("Position unavailable: {0}")]
    PositionUnavailable(String),
}

#[async_trait]
pub trait Geolocator: Send + Sync {
    async fn current_position(
        &self,
        options: PositionOptions,
    ) -> Result<Coordinates, GeolocationError>;
}
