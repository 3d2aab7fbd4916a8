//! Service layer adapting the data sources to the request/response contract.
//!
//! Each operation is a stateless single-step read. The store cannot fail
//! today, but every read is still wrapped defensively: a source fault is
//! logged here and propagated as an error value for the HTTP boundary to
//! turn into the failure envelope, never as a panic.

use tracing::error;

use crate::models::{GroupInfo, HomeworkItem, Notification, WeekSchedule};
use crate::store::{FullSource, StoreResult};

/// Read the full week of lessons.
pub async fn week_schedule(source: &dyn FullSource) -> StoreResult<WeekSchedule> {
    source.week_schedule().await.map_err(|err| {
        error!("failed to read week schedule: {}", err);
        err
    })
}

/// Read the homework board.
pub async fn homework(source: &dyn FullSource) -> StoreResult<Vec<HomeworkItem>> {
    source.homework().await.map_err(|err| {
        error!("failed to read homework board: {}", err);
        err
    })
}

/// Read the notification board.
pub async fn notifications(source: &dyn FullSource) -> StoreResult<Vec<Notification>> {
    source.notifications().await.map_err(|err| {
        error!("failed to read notifications: {}", err);
        err
    })
}

/// Read the group information card.
pub async fn group_info(source: &dyn FullSource) -> StoreResult<GroupInfo> {
    source.group_info().await.map_err(|err| {
        error!("failed to read group info: {}", err);
        err
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::FixtureSource;

    #[tokio::test]
    async fn test_week_schedule_returns_fixture_data() {
        let source = FixtureSource::new();
        let schedule = week_schedule(&source).await.unwrap();
        assert_eq!(schedule.monday.len(), 3);
    }

    #[tokio::test]
    async fn test_reads_are_deterministic() {
        let source = FixtureSource::new();

        let first = week_schedule(&source).await.unwrap();
        let second = week_schedule(&source).await.unwrap();
        assert_eq!(first, second);

        let first_json = serde_json::to_string(&first).unwrap();
        let second_json = serde_json::to_string(&second).unwrap();
        assert_eq!(first_json, second_json);
    }

    #[tokio::test]
    async fn test_board_reads_return_fixture_data() {
        let source = FixtureSource::new();
        assert_eq!(homework(&source).await.unwrap().len(), 4);
        assert_eq!(notifications(&source).await.unwrap().len(), 3);
        assert_eq!(group_info(&source).await.unwrap().students, 25);
    }
}
