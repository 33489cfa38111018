//! Report entity - moderation ticket

use chrono::{DateTime, Utc};

/// Lifecycle status of a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportStatus {
    #[default]
    Open,
    InReview,
    Resolved,
    Rejected,
}

impl ReportStatus {
    /// Parse a resolution status argument.
    ///
    /// Accepts the four documented values; anything else falls back to
    /// `Resolved`, matching the lenient contract of the resolve command.
    #[must_use]
    pub fn parse_or_resolved(value: &str) -> Self {
        match value {
            "open" => Self::Open,
            "inReview" => Self::InReview,
            "rejected" => Self::Rejected,
            _ => Self::Resolved,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::InReview => "inReview",
            Self::Resolved => "resolved",
            Self::Rejected => "rejected",
        }
    }
}

/// A target-independent moderation ticket filed by a user.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub id: String,
    pub reporter_id: String,
    /// Free-form reference to the reported content or account.
    pub subject: String,
    pub reason: String,
    pub status: ReportStatus,
    pub assigned_to: Option<String>,
    pub resolution_notes: Option<String>,
    pub resolution_actions: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Report {
    pub fn new(
        id: impl Into<String>,
        reporter_id: impl Into<String>,
        subject: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: id.into(),
            reporter_id: reporter_id.into(),
            subject: subject.into(),
            reason: reason.into(),
            status: ReportStatus::Open,
            assigned_to: None,
            resolution_notes: None,
            resolution_actions: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_statuses() {
        assert_eq!(ReportStatus::parse_or_resolved("open"), ReportStatus::Open);
        assert_eq!(
            ReportStatus::parse_or_resolved("inReview"),
            ReportStatus::InReview
        );
        assert_eq!(
            ReportStatus::parse_or_resolved("rejected"),
            ReportStatus::Rejected
        );
        assert_eq!(
            ReportStatus::parse_or_resolved("resolved"),
            ReportStatus::Resolved
        );
    }

    #[test]
    fn test_parse_unrecognized_defaults_to_resolved() {
        assert_eq!(
            ReportStatus::parse_or_resolved("escalated"),
            ReportStatus::Resolved
        );
        assert_eq!(ReportStatus::parse_or_resolved(""), ReportStatus::Resolved);
    }
}
