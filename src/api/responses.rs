//! API response structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::engine::{CleanBand, MachineSnapshot};

/// Generic status-only response
#[derive(Debug, Clone, Serialize)]
pub struct StatusMessage {
    pub status: &'static str,
}

/// Cleanliness query response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CleanLevelResponse {
    pub status: &'static str,
    pub band: CleanBand,
    pub clean_level: i32,
}

impl CleanLevelResponse {
    pub fn new(band: CleanBand, clean_level: i32) -> Self {
        Self {
            status: band.label(),
            band,
            clean_level,
        }
    }
}

/// Body of a refill request
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefillRequest {
    pub resource_type: String,
}

/// Full machine status with server metadata
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusResponse {
    pub machine: MachineSnapshot,
    pub uptime: String,
    pub port: u16,
    pub host: String,
    pub last_action: Option<String>,
    pub last_action_time: Option<DateTime<Utc>>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
}

impl HealthResponse {
    /// Create a new health response
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            timestamp: Utc::now(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}
