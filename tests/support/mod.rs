use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use tower::ServiceExt;

use unigroup_rust::http::{create_router, AppState};
use unigroup_rust::models::{GroupInfo, HomeworkItem, Notification, WeekSchedule};
use unigroup_rust::store::{
    BoardSource, GroupInfoSource, ScheduleSource, StoreError, StoreResult, GROUP,
};

/// Source whose every read fails, for exercising the failure envelope.
pub struct FailingSource;

#[async_trait]
impl ScheduleSource for FailingSource {
    async fn week_schedule(&self) -> StoreResult<WeekSchedule> {
        Err(StoreError::upstream("schedule backend offline"))
    }
}

#[async_trait]
impl BoardSource for FailingSource {
    async fn homework(&self) -> StoreResult<Vec<HomeworkItem>> {
        Err(StoreError::upstream("board backend offline"))
    }

    async fn notifications(&self) -> StoreResult<Vec<Notification>> {
        Err(StoreError::upstream("board backend offline"))
    }
}

#[async_trait]
impl GroupInfoSource for FailingSource {
    async fn group_info(&self) -> StoreResult<GroupInfo> {
        Err(StoreError::upstream("info backend offline"))
    }
}

/// Router backed by the bundled fixtures.
pub fn fixture_router() -> Router {
    create_router(AppState::with_fixtures())
}

/// Router backed by a source that always fails.
pub fn failing_router() -> Router {
    create_router(AppState::new(Arc::new(FailingSource), GROUP))
}

/// GET `path` and return the status with the raw body bytes.
pub async fn get_bytes(router: Router, path: &str) -> (StatusCode, Vec<u8>) {
    let response = router
        .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
        .await
        .expect("router call failed");

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    (status, bytes.to_vec())
}

/// GET `path` and parse the body as JSON (`Null` for an empty body).
pub async fn get_json(router: Router, path: &str) -> (StatusCode, serde_json::Value) {
    let (status, bytes) = get_bytes(router, path).await;
    let value = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
    (status, value)
}
