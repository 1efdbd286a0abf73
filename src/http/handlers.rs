//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the
//! service layer for the aggregation logic. All computation is pure and
//! recomputed per request; the shared model set is read-only.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::Days;

use super::dto::{
    GroupListResponse, HealthResponse, ModelCounts, ProjectionQuery, SnapshotQuery,
};
use super::error::AppError;
use super::state::AppState;
use crate::api::{BloodGroup, DailySnapshotData, ProjectionData};
use crate::models::time;
use crate::services;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
///
/// Health check endpoint to verify the service is running and how many
/// models each collection carries.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        models: ModelCounts {
            supply: state.models.supply.len(),
            demand: state.models.demand.len(),
            availability: state.models.availability.len(),
        },
    }))
}

// =============================================================================
// Group Listing
// =============================================================================

/// GET /v1/groups
///
/// List the selectable blood groups: the sorted key set of the supply
/// collection.
pub async fn list_groups(State(state): State<AppState>) -> HandlerResult<GroupListResponse> {
    let groups = state.models.supply.sorted_groups();
    let total = groups.len();

    Ok(Json(GroupListResponse { groups, total }))
}

// =============================================================================
// Visualization Endpoints
// =============================================================================

/// GET /v1/snapshot?date=YYYY-MM-DD
///
/// Daily inventory snapshot across all blood groups for the given target
/// date (default: one week from today).
pub async fn get_snapshot(
    State(state): State<AppState>,
    Query(query): Query<SnapshotQuery>,
) -> HandlerResult<DailySnapshotData> {
    let target_date = query
        .date
        .unwrap_or_else(|| time::current_date() + Days::new(7));

    let data = services::snapshot_data(&state.models, target_date)?;
    Ok(Json(data))
}

/// GET /v1/groups/{group}/projection?horizon=N
///
/// Multi-week supply-vs-demand projection for one blood group
/// (default horizon: 28 days).
pub async fn get_projection(
    State(state): State<AppState>,
    Path(group): Path<String>,
    Query(query): Query<ProjectionQuery>,
) -> HandlerResult<ProjectionData> {
    let group = BloodGroup::new(group);
    let horizon_days = query.horizon.unwrap_or(services::DEFAULT_HORIZON_DAYS);
    if horizon_days > services::MAX_HORIZON_DAYS {
        return Err(AppError::BadRequest(format!(
            "horizon must be at most {} days, got {}",
            services::MAX_HORIZON_DAYS,
            horizon_days
        )));
    }

    let data = services::project_group(&state.models, &group, horizon_days, time::current_date())?;
    Ok(Json(data))
}
