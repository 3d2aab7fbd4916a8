//! Data Transfer Objects for the HTTP API.
//!
//! Success envelopes are tagged `success: true` and carry the group
//! identifier next to the payload; the failure shape lives in
//! [`super::error::ErrorBody`]. The two shapes never mix fields.

use serde::{Deserialize, Serialize};

use crate::models::{GroupInfo, HomeworkItem, Notification, WeekSchedule};

/// Success envelope for the schedule endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleResponse {
    pub success: bool,
    /// Fixed group identifier.
    pub group: String,
    pub schedule: WeekSchedule,
}

impl ScheduleResponse {
    pub fn new(group: impl Into<String>, schedule: WeekSchedule) -> Self {
        Self {
            success: true,
            group: group.into(),
            schedule,
        }
    }
}

/// Success envelope for the homework endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HomeworkResponse {
    pub success: bool,
    pub group: String,
    pub homework: Vec<HomeworkItem>,
}

impl HomeworkResponse {
    pub fn new(group: impl Into<String>, homework: Vec<HomeworkItem>) -> Self {
        Self {
            success: true,
            group: group.into(),
            homework,
        }
    }
}

/// Success envelope for the notifications endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationsResponse {
    pub success: bool,
    pub group: String,
    pub notifications: Vec<Notification>,
}

impl NotificationsResponse {
    pub fn new(group: impl Into<String>, notifications: Vec<Notification>) -> Self {
        Self {
            success: true,
            group: group.into(),
            notifications,
        }
    }
}

/// Success envelope for the group info endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupInfoResponse {
    pub success: bool,
    pub group: String,
    pub info: GroupInfo,
}

impl GroupInfoResponse {
    pub fn new(group: impl Into<String>, info: GroupInfo) -> Self {
        Self {
            success: true,
            group: group.into(),
            info,
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schedule_response_is_success_tagged() {
        let response = ScheduleResponse::new("ИКБО-31-25", WeekSchedule::default());
        assert!(response.success);
        assert_eq!(response.group, "ИКБО-31-25");

        let value = serde_json::to_value(&response).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.get("success"), Some(&serde_json::json!(true)));
        assert!(object.contains_key("schedule"));
        assert!(!object.contains_key("error"));
    }
}
