//! Data Transfer Objects for the HTTP API.
//!
//! These DTOs are used for request/response serialization in the REST API.
//! The visualization DTOs are re-exported from the api module since they
//! already derive Serialize/Deserialize.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// Re-export existing DTOs that are already serializable
pub use crate::api::{
    // Blood group key
    BloodGroup,
    // Snapshot
    DailySnapshotData, DailySnapshotRow,
    // Envelope
    Envelope,
    // Projection
    ProjectionData, WeeklyForecastRow,
};

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
    /// Loaded model counts per collection
    pub models: ModelCounts,
}

/// Loaded model counts, one per collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelCounts {
    pub supply: usize,
    pub demand: usize,
    pub availability: usize,
}

/// Group list response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupListResponse {
    /// Selectable blood groups in ascending order
    pub groups: Vec<BloodGroup>,
    /// Total count
    pub total: usize,
}

/// Query parameters for the snapshot endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SnapshotQuery {
    /// Target date (YYYY-MM-DD); defaults to one week from today
    #[serde(default)]
    pub date: Option<NaiveDate>,
}

/// Query parameters for the projection endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ProjectionQuery {
    /// Horizon in days (default: 28)
    #[serde(default)]
    pub horizon: Option<u32>,
}
