//! Response DTOs for the RPC surface

use serde::Serialize;

use crate::services::{ActionReport, BackfillSummary};

/// Envelope returned by every admin/moderator action.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionResponse {
    pub success: bool,
    pub action: &'static str,
    /// Non-fatal sub-failures (audit write, token cleanup); present only
    /// when something was swallowed.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub side_effect_failures: Vec<String>,
}

impl From<ActionReport> for ActionResponse {
    fn from(report: ActionReport) -> Self {
        Self {
            success: true,
            action: report.action,
            side_effect_failures: report
                .side_effects
                .iter()
                .map(ToString::to_string)
                .collect(),
        }
    }
}

/// Envelope returned by the backfill endpoint.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BackfillResponse {
    pub success: bool,
    pub updated: u64,
    /// Unix milliseconds of the backfill timestamp.
    pub timestamp: i64,
}

impl From<BackfillSummary> for BackfillResponse {
    fn from(summary: BackfillSummary) -> Self {
        Self {
            success: true,
            updated: summary.updated,
            timestamp: summary.timestamp.timestamp_millis(),
        }
    }
}

/// Liveness probe response.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
}

impl HealthResponse {
    #[must_use]
    pub fn healthy() -> Self {
        Self {
            status: "ok",
            service: "herald",
        }
    }
}
