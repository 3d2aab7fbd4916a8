//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to one read endpoint and delegates to the
//! service layer. Handlers only assemble envelopes; a source fault surfaces
//! as [`AppError`] and becomes the failure envelope at the boundary.

use axum::{extract::State, Json};

use super::dto::{
    GroupInfoResponse, HealthResponse, HomeworkResponse, NotificationsResponse, ScheduleResponse,
};
use super::error::AppError;
use super::state::AppState;
use crate::services;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
///
/// Health check endpoint to verify the service is running.
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
    })
}

// =============================================================================
// Group Data Endpoints
// =============================================================================

/// GET /api/schedule
///
/// The full week of lessons for the group, all seven days.
pub async fn get_schedule(State(state): State<AppState>) -> HandlerResult<ScheduleResponse> {
    let schedule = services::week_schedule(state.source.as_ref()).await?;
    Ok(Json(ScheduleResponse::new(state.group.clone(), schedule)))
}

/// GET /api/homework
///
/// Current homework assignments with deadlines.
pub async fn get_homework(State(state): State<AppState>) -> HandlerResult<HomeworkResponse> {
    let homework = services::homework(state.source.as_ref()).await?;
    Ok(Json(HomeworkResponse::new(state.group.clone(), homework)))
}

/// GET /api/notifications
///
/// Group announcements, newest first.
pub async fn get_notifications(
    State(state): State<AppState>,
) -> HandlerResult<NotificationsResponse> {
    let notifications = services::notifications(state.source.as_ref()).await?;
    Ok(Json(NotificationsResponse::new(
        state.group.clone(),
        notifications,
    )))
}

/// GET /api/group-info
///
/// The group information card: facts, contacts and useful links.
pub async fn get_group_info(State(state): State<AppState>) -> HandlerResult<GroupInfoResponse> {
    let info = services::group_info(state.source.as_ref()).await?;
    Ok(Json(GroupInfoResponse::new(state.group.clone(), info)))
}
