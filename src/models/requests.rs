use serde::{Deserialize, Serialize};

use super::draft::IssueType;
use super::location::Coordinates;

/// A raw device fix sent by a client that cannot geocode on its own
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolveLocationRequest {
    pub latitude: f64,
    pub longitude: f64,
}

impl ResolveLocationRequest {
    pub fn coordinates(&self) -> Coordinates {
        Coordinates::new(self.latitude, self.longitude)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateDraftRequest {
    pub image: String, // data URL
    #[serde(default)]
    pub location: Option<Coordinates>,
    #[serde(default)]
    pub issue_type: Option<IssueType>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: false,
            error: message.into(),
        }
    }
}
