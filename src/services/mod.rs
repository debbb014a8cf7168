pub mod capabilities;
pub mod file_picker;
pub mod geocoding;
pub mod location;
pub mod photo;
pub mod session;

pub use file_picker::PathFilePicker;
pub use geocoding::{GeocodeError, NominatimClient, ReverseGeocoder};
pub use location::LocationResolver;
pub use photo::{Acquisition, PhotoAcquirer, PhotoError, PhotoOutcome};
pub use session::{LocationState, PhotoState, ReportSession, SessionError};
