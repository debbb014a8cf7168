use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::image::ImagePayload;
use super::location::ResolvedLocation;

/// Kinds of municipal issue offered on the new-report form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IssueType {
    Pothole,
    StreetLight,
    Sidewalk,
    TrafficSign,
    Garbage,
    Other,
}

impl IssueType {
    pub const ALL: [IssueType; 6] = [
        IssueType::Pothole,
        IssueType::StreetLight,
        IssueType::Sidewalk,
        IssueType::TrafficSign,
        IssueType::Garbage,
        IssueType::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            IssueType::Pothole => "Pothole",
            IssueType::StreetLight => "Street Light",
            IssueType::Sidewalk => "Sidewalk",
            IssueType::TrafficSign => "Traffic Sign",
            IssueType::Garbage => "Garbage",
            IssueType::Other => "Other",
        }
    }
}

/// An in-memory, not yet submitted report.
///
/// `location` is either absent or carries valid coordinates; a draft is
/// only built once both acquisition stages have settled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportDraft {
    pub id: Uuid,
    pub image: ImagePayload,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<ResolvedLocation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issue_type: Option<IssueType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl ReportDraft {
    pub fn with_issue_type(mut self, issue_type: IssueType) -> Self {
        self.issue_type = Some(issue_type);
        self
    }

    /// Attach the optional free-text description; blank text is dropped
    pub fn with_description(mut self, description: impl AsRef<str>) -> Self {
        let trimmed = description.as_ref().trim();
        self.description = (!trimmed.is_empty()).then(|| trimmed.to_string());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_type_wire_names() {
        let json = serde_json::to_value(IssueType::StreetLight).unwrap();
        assert_eq!(json, "street-light");

        let parsed: IssueType = serde_json::from_value(serde_json::json!("traffic-sign")).unwrap();
        assert_eq!(parsed, IssueType::TrafficSign);
        assert_eq!(parsed.label(), "Traffic Sign");
    }

    #[test]
    fn test_every_issue_type_has_a_label() {
        for issue_type in IssueType::ALL {
            assert!(!issue_type.label().is_empty());
        }
    }
}
