use serde::{Deserialize, Serialize};

use super::location::UnavailableReason;
use super::image::PhotoSource;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeVariant {
    Default,
    Destructive,
}

/// A short user-facing message the UI shows as a toast
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub title: String,
    pub description: String,
    pub variant: NoticeVariant,
}

impl Notice {
    fn new(title: &str, description: &str, variant: NoticeVariant) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            variant,
        }
    }

    pub fn photo_ready(source: PhotoSource) -> Self {
        let title = match source {
            PhotoSource::Camera => "Photo captured!",
            PhotoSource::FilePick => "Photo selected!",
        };
        Self::new(
            title,
            "Review your photo and confirm to continue.",
            NoticeVariant::Default,
        )
    }

    pub fn location_unavailable(reason: UnavailableReason) -> Self {
        match reason {
            UnavailableReason::NotSupported => Self::new(
                "Location not supported",
                "Your device doesn't support location services.",
                NoticeVariant::Destructive,
            ),
            _ => Self::new(
                "Location access denied",
                "Location will not be included in the report.",
                NoticeVariant::Destructive,
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_photo_notice_depends_on_source() {
        assert_eq!(Notice::photo_ready(PhotoSource::Camera).title, "Photo captured!");
        assert_eq!(Notice::photo_ready(PhotoSource::FilePick).title, "Photo selected!");
    }

    #[test]
    fn test_location_notices() {
        let unsupported = Notice::location_unavailable(UnavailableReason::NotSupported);
        assert_eq!(unsupported.title, "Location not supported");
        assert_eq!(unsupported.variant, NoticeVariant::Destructive);

        for reason in [
            UnavailableReason::PermissionDenied,
            UnavailableReason::Timeout,
            UnavailableReason::FixFailed,
            UnavailableReason::InvalidFix,
        ] {
            let notice = Notice::location_unavailable(reason);
            assert_eq!(notice.title, "Location access denied");
            assert_eq!(notice.description, "Location will not be included in the report.");
        }
    }
}
