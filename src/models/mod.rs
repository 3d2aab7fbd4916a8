//! Domain types for the group mini-app.
//!
//! Everything here is a plain serializable value object; the backend holds
//! no mutable domain state.

pub mod board;
pub mod group;
pub mod schedule;

pub use board::{HomeworkItem, NoticeKind, Notification, Priority};
pub use group::{GroupInfo, InfoLink};
pub use schedule::{Lesson, WeekSchedule, Weekday};
