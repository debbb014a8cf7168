use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info, warn};

use super::capabilities::{Camera, CameraError, CameraOptions, FilePickOptions, FilePicker};
use crate::models::{ImageError, ImagePayload, PhotoSource};

/// Terminal result of one photo gesture
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PhotoOutcome {
    Captured {
        image: ImagePayload,
        source: PhotoSource,
    },
    /// The fallback chooser was dismissed without a file
    Cancelled,
    Failed {
        #[serde(serialize_with = "serialize_display")]
        error: PhotoError,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PhotoError {
    #[error("File selection failed: {0}")]
    Picker(String),

    #[error(transparent)]
    Image(#[from] ImageError),
}

/// One `acquire()` call: its outcome plus the camera error, if any, that
/// sent it down the file-pick path
#[derive(Debug, Clone, PartialEq)]
pub struct Acquisition {
    pub outcome: PhotoOutcome,
    pub camera_error: Option<CameraError>,
}

/// Gets an image from the camera, or from a manual file pick when the
/// camera cannot deliver one
#[derive(Clone)]
pub struct PhotoAcquirer {
    camera: Option<Arc<dyn Camera>>,
    picker: Arc<dyn FilePicker>,
    options: CameraOptions,
}

impl PhotoAcquirer {
    /// `camera` is `None` when the platform has no camera capability
    pub fn new(
        camera: Option<Arc<dyn Camera>>,
        picker: Arc<dyn FilePicker>,
        options: CameraOptions,
    ) -> Self {
        Self {
            camera,
            picker,
            options,
        }
    }

    /// Always starts from the camera; a previous failure is not remembered
    pub async fn acquire(&self) -> Acquisition {
        let camera_error = match self.capture().await {
            Ok(image) => {
                info!("Photo captured ({})", image.mime());
                return Acquisition {
                    outcome: PhotoOutcome::Captured {
                        image,
                        source: PhotoSource::Camera,
                    },
                    camera_error: None,
                };
            }
            Err(e) => e,
        };

        warn!("Camera unavailable ({}), falling back to file selection", camera_error);
        Acquisition {
            outcome: self.pick().await,
            camera_error: Some(camera_error),
        }
    }

    async fn capture(&self) -> Result<ImagePayload, CameraError> {
        let camera = self.camera.as_ref().ok_or(CameraError::Unavailable)?;
        let photo = camera.get_photo(self.options).await?;
        let data_url = photo
            .data_url
            .ok_or_else(|| CameraError::Other("camera returned no image data".to_string()))?;

        ImagePayload::from_data_url(&data_url)
            .map_err(|e| CameraError::Other(format!("camera returned an unusable image: {}", e)))
    }

    async fn pick(&self) -> PhotoOutcome {
        let file = match self.picker.pick(FilePickOptions::default()).await {
            Ok(Some(file)) => file,
            Ok(None) => {
                debug!("File selection dismissed");
                return PhotoOutcome::Cancelled;
            }
            Err(e) => {
                warn!("File selection failed: {}", e);
                return PhotoOutcome::Failed {
                    error: PhotoError::Picker(e.to_string()),
                };
            }
        };

        match ImagePayload::from_bytes(&file.bytes, file.mime.as_deref()) {
            Ok(image) => {
                info!("Photo selected: {} ({})", file.name, image.mime());
                PhotoOutcome::Captured {
                    image,
                    source: PhotoSource::FilePick,
                }
            }
            Err(e) => {
                warn!("Rejected selected file {}: {}", file.name, e);
                PhotoOutcome::Failed { error: e.into() }
            }
        }
    }
}

fn serialize_display<S: serde::Serializer>(
    error: &PhotoError,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_str(error)
}
