use std::fs;
use std::sync::Arc;

use axum::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use tempfile::tempdir;

use civic_report::config::Config;
use civic_report::models::{Coordinates, GeocodeResponse, PhotoSource};
use civic_report::services::capabilities::{
    Camera, CameraError, CameraOptions, CameraPhoto, GeolocationError, Geolocator,
    PositionOptions,
};
use civic_report::services::{
    GeocodeError, LocationResolver, LocationState, PathFilePicker, PhotoAcquirer, PhotoOutcome,
    PhotoState, ReportSession, ReverseGeocoder,
};

// Minimal JFIF header; enough for format detection
const JPEG_BYTES: &[u8] = &[
    0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, b'J', b'F', b'I', b'F', 0x00, 0x01, 0x01, 0x00, 0x00,
    0x01, 0x00, 0x01, 0x00, 0x00, 0xFF, 0xD9,
];

struct ThrowingCamera;

#[async_trait]
impl Camera for ThrowingCamera {
    async fn get_photo(&self, _options: CameraOptions) -> Result<CameraPhoto, CameraError> {
        Err(CameraError::Other("Not implemented on web.".to_string()))
    }
}

struct DeniedGeolocator;

#[async_trait]
impl Geolocator for DeniedGeolocator {
    async fn current_position(
        &self,
        _options: PositionOptions,
    ) -> Result<Coordinates, GeolocationError> {
        Err(GeolocationError::PermissionDenied)
    }
}

struct OfflineGeocoder;

#[async_trait]
impl ReverseGeocoder for OfflineGeocoder {
    async fn reverse(&self, _coordinates: Coordinates) -> Result<GeocodeResponse, GeocodeError> {
        Err(GeocodeError::Http("offline".to_string()))
    }
}

#[tokio::test]
async fn test_camera_failure_falls_back_to_selected_jpeg() {
    let temp_dir = tempdir().unwrap();
    let photo_path = temp_dir.path().join("pothole.jpg");
    fs::write(&photo_path, JPEG_BYTES).unwrap();

    let acquirer = PhotoAcquirer::new(
        Some(Arc::new(ThrowingCamera)),
        Arc::new(PathFilePicker::new(Some(photo_path))),
        CameraOptions::default(),
    );

    let acquisition = acquirer.acquire().await;

    assert!(matches!(acquisition.camera_error, Some(CameraError::Other(_))));
    let PhotoOutcome::Captured { image, source } = acquisition.outcome else {
        panic!("Expected the selected file to be captured");
    };
    assert_eq!(source, PhotoSource::FilePick);
    assert_eq!(
        image.data_url(),
        format!("data:image/jpeg;base64,{}", STANDARD.encode(JPEG_BYTES))
    );
    assert_eq!(image.decode().unwrap(), JPEG_BYTES);
}

#[tokio::test]
async fn test_dismissed_fallback_is_cancelled() {
    let acquirer = PhotoAcquirer::new(
        None,
        Arc::new(PathFilePicker::default()),
        CameraOptions::default(),
    );

    assert_eq!(acquirer.acquire().await.outcome, PhotoOutcome::Cancelled);
}

#[tokio::test]
async fn test_denied_location_report_flow() {
    let temp_dir = tempdir().unwrap();
    let photo_path = temp_dir.path().join("streetlight.jpg");
    fs::write(&photo_path, JPEG_BYTES).unwrap();

    let config = Config::default();
    let session = ReportSession::new(
        PhotoAcquirer::new(
            Some(Arc::new(ThrowingCamera)),
            Arc::new(PathFilePicker::new(Some(photo_path))),
            config.camera_options(),
        ),
        LocationResolver::new(
            Some(Arc::new(DeniedGeolocator)),
            Arc::new(OfflineGeocoder),
            config.position_options(),
        ),
    );

    let background = session.begin();
    let photo = session.capture_photo().await;
    let location = background.await.unwrap();

    assert!(matches!(photo, PhotoState::Captured { source: PhotoSource::FilePick, .. }));
    assert!(location.is_terminal());
    assert!(matches!(location, LocationState::Unavailable { .. }));

    let draft = session.confirm().await.unwrap();
    assert!(draft.location.is_none());
    assert_eq!(draft.image.mime(), "image/jpeg");

    let titles: Vec<String> = session
        .drain_notices()
        .await
        .into_iter()
        .map(|notice| notice.title)
        .collect();
    assert!(titles.contains(&"Photo selected!".to_string()));
    assert!(titles.contains(&"Location access denied".to_string()));
}
