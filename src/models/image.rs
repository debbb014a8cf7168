use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize};

const DATA_URL_PREFIX: &str = "data:";
const BASE64_MARKER: &str = ";base64,";

/// Which capability produced a captured image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhotoSource {
    Camera,
    FilePick,
}

/// An encoded image held as a self-contained data URL.
///
/// Camera captures and picked files end up in this same representation, so
/// nothing downstream needs to know where the image came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ImagePayload {
    mime: String,
    data_url: String,
}

impl ImagePayload {
    /// Encode raw file bytes. A declared `image/*` type wins; anything else
    /// falls back to sniffing the bytes.
    pub fn from_bytes(bytes: &[u8], declared_mime: Option<&str>) -> Result<Self, ImageError> {
        if bytes.is_empty() {
            return Err(ImageError::Empty);
        }

        let mime = match declared_mime.map(str::trim) {
            Some(mime) if is_image_mime(mime) => mime.to_ascii_lowercase(),
            _ => sniff_mime(bytes).ok_or(ImageError::NotAnImage)?.to_string(),
        };

        let data_url = format!("{DATA_URL_PREFIX}{mime}{BASE64_MARKER}{}", STANDARD.encode(bytes));
        Ok(Self { mime, data_url })
    }

    /// Parse and validate a `data:image/...;base64,...` URL.
    pub fn from_data_url(data_url: &str) -> Result<Self, ImageError> {
        let rest = data_url
            .strip_prefix(DATA_URL_PREFIX)
            .ok_or(ImageError::NotADataUrl)?;
        let (mime, payload) = rest.split_once(BASE64_MARKER).ok_or(ImageError::NotBase64)?;

        if !is_image_mime(mime) {
            return Err(ImageError::UnsupportedMime(mime.to_string()));
        }
        if payload.is_empty() {
            return Err(ImageError::Empty);
        }
        STANDARD
            .decode(payload)
            .map_err(|e| ImageError::InvalidPayload(e.to_string()))?;

        Ok(Self {
            mime: mime.to_ascii_lowercase(),
            data_url: data_url.to_string(),
        })
    }

    pub fn mime(&self) -> &str {
        &self.mime
    }

    pub fn data_url(&self) -> &str {
        &self.data_url
    }

    /// Decode the image bytes back out of the data URL
    pub fn decode(&self) -> Result<Vec<u8>, ImageError> {
        let payload = self
            .data_url
            .split_once(BASE64_MARKER)
            .map(|(_, payload)| payload)
            .ok_or(ImageError::NotBase64)?;
        STANDARD
            .decode(payload)
            .map_err(|e| ImageError::InvalidPayload(e.to_string()))
    }
}

impl TryFrom<String> for ImagePayload {
    type Error = ImageError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_data_url(&value)
    }
}

impl From<ImagePayload> for String {
    fn from(payload: ImagePayload) -> Self {
        payload.data_url
    }
}

fn is_image_mime(mime: &str) -> bool {
    mime.len() > "image/".len()
        && mime
            .get(..6)
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case("image/"))
}

fn sniff_mime(bytes: &[u8]) -> Option<&'static str> {
    image::guess_format(bytes)
        .ok()
        .map(|format| format.to_mime_type())
        .filter(|mime| mime.starts_with("image/"))
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ImageError {
    #[error("Image is empty.")]
    Empty,

    #[error("Expected a data: URL.")]
    NotADataUrl,

    #[error("Only base64 data URLs are supported.")]
    NotBase64,

    #[error("Unsupported media type: {0}")]
    UnsupportedMime(String),

    #[error("Image data is not valid base64: {0}")]
    InvalidPayload(String),

    #[error("The selected file is not an image.")]
    NotAnImage,
}

#[cfg(test)]
mod tests {
    use super::*;

    // SOI marker plus the start of a JFIF APP0 segment
    const JPEG_HEADER: &[u8] = &[0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, b'J', b'F', b'I', b'F', 0x00];
    const PNG_HEADER: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0, 0, 0, 0x0D];

    #[test]
    fn test_declared_mime_is_used() {
        let payload = ImagePayload::from_bytes(b"raw", Some("image/heic")).unwrap();

        assert_eq!(payload.mime(), "image/heic");
        assert_eq!(payload.data_url(), "data:image/heic;base64,cmF3");
    }

    #[test]
    fn test_missing_mime_is_sniffed() {
        let jpeg = ImagePayload::from_bytes(JPEG_HEADER, None).unwrap();
        assert_eq!(jpeg.mime(), "image/jpeg");

        let png = ImagePayload::from_bytes(PNG_HEADER, Some("application/octet-stream")).unwrap();
        assert_eq!(png.mime(), "image/png");
    }

    #[test]
    fn test_non_image_bytes_rejected() {
        assert_eq!(
            ImagePayload::from_bytes(b"%PDF-1.7", Some("application/pdf")),
            Err(ImageError::NotAnImage)
        );
        assert_eq!(ImagePayload::from_bytes(&[], None), Err(ImageError::Empty));
    }

    #[test]
    fn test_decode_returns_original_bytes() {
        let payload = ImagePayload::from_bytes(JPEG_HEADER, Some("image/jpeg")).unwrap();
        assert_eq!(payload.decode().unwrap(), JPEG_HEADER);
    }

    #[test]
    fn test_parse_data_url() {
        let payload = ImagePayload::from_data_url("data:image/png;base64,iVBORw0KGgo=").unwrap();
        assert_eq!(payload.mime(), "image/png");

        assert_eq!(
            ImagePayload::from_data_url("https://example.com/a.png"),
            Err(ImageError::NotADataUrl)
        );
        assert_eq!(
            ImagePayload::from_data_url("data:image/png,rawtext"),
            Err(ImageError::NotBase64)
        );
        assert!(matches!(
            ImagePayload::from_data_url("data:text/plain;base64,aGk="),
            Err(ImageError::UnsupportedMime(_))
        ));
        assert!(matches!(
            ImagePayload::from_data_url("data:image/png;base64,@@@"),
            Err(ImageError::InvalidPayload(_))
        ));
    }

    #[test]
    fn test_serializes_as_plain_data_url() {
        let payload = ImagePayload::from_bytes(b"raw", Some("image/jpeg")).unwrap();
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json, serde_json::json!("data:image/jpeg;base64,cmF3"));

        let invalid: Result<ImagePayload, _> = serde_json::from_value(serde_json::json!("nope"));
        assert!(invalid.is_err());
    }
}
