pub mod draft;
pub mod geocode;
pub mod image;
pub mod location;
pub mod notice;
pub mod requests;

// Re-export commonly used types
pub use draft::{IssueType, ReportDraft};
pub use geocode::{AddressComponents, GeocodeResponse};
pub use image::{ImageError, ImagePayload, PhotoSource};
pub use location::{Coordinates, Enrichment, LocationOutcome, ResolvedLocation, UnavailableReason};
pub use notice::{Notice, NoticeVariant};
pub use requests::{CreateDraftRequest, ErrorResponse, ResolveLocationRequest};
