//! Homework and notification board types.
//!
//! Same lifecycle as the schedule: fixture content built once at startup and
//! served read-only.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Urgency label for a homework item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

/// One homework assignment with a deadline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HomeworkItem {
    pub id: u32,
    pub subject: String,
    pub title: String,
    pub description: String,
    /// Due date, serialized as `YYYY-MM-DD`.
    pub deadline: NaiveDate,
    pub priority: Priority,
}

/// Category of a group announcement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeKind {
    Info,
    Warning,
}

/// One announcement shown on the group notification board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: u32,
    pub title: String,
    pub message: String,
    /// Publication date, serialized as `YYYY-MM-DD`.
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub kind: NoticeKind,
}
