//! Domain models for the read-only insight endpoints.

use serde::{Deserialize, Serialize};

/// Response of `/predict_server_failure/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct FailurePrediction {
    /// Echo of the requested identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server_id: Option<String>,
    pub is_likely_to_fail: bool,
}

/// Response of `/generate_maintenance_schedule/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct MaintenanceSchedule {
    /// Echo of the requested identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server_id: Option<String>,
    /// Scheduled date as sent by the backend (ISO 8601 in practice). Shown verbatim.
    pub maintenance_date: String,
}
