//! Source traits for read-only group data.
//!
//! The traits are the substitution point for a future live data source: an
//! implementation that scrapes the university site can replace the fixture
//! source without touching the HTTP wire contract.

use async_trait::async_trait;

use super::error::StoreResult;
use crate::models::{GroupInfo, HomeworkItem, Notification, WeekSchedule};

/// Read access to the weekly class schedule.
///
/// Implementations must be pure with respect to their inputs: with no
/// intervening state change, repeated reads return equal values.
#[async_trait]
pub trait ScheduleSource: Send + Sync {
    /// The full week of lessons. No filtering, no pagination.
    async fn week_schedule(&self) -> StoreResult<WeekSchedule>;
}

/// Read access to the homework and notification boards.
#[async_trait]
pub trait BoardSource: Send + Sync {
    /// Current homework assignments, in display order.
    async fn homework(&self) -> StoreResult<Vec<HomeworkItem>>;

    /// Current announcements, newest first.
    async fn notifications(&self) -> StoreResult<Vec<Notification>>;
}

/// Read access to the group information card.
#[async_trait]
pub trait GroupInfoSource: Send + Sync {
    async fn group_info(&self) -> StoreResult<GroupInfo>;
}

/// Convenience trait for sources that serve every view of the mini-app.
pub trait FullSource: ScheduleSource + BoardSource + GroupInfoSource {}

impl<T: ScheduleSource + BoardSource + GroupInfoSource> FullSource for T {}
