//! Weekly schedule domain types.
//!
//! The schedule is opaque display content, not a scheduling engine: lessons
//! carry literal time strings, nothing enforces non-overlapping slots, and
//! ordering within a day is the chronological display order supplied by
//! whoever built the data.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One scheduled class occurrence.
///
/// A lesson has no identity beyond its field values; two lessons with equal
/// fields are the same lesson.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lesson {
    /// Human-readable interval, e.g. "09:00-10:30". Kept as a literal
    /// display string, never parsed into a structured time type.
    pub time: String,
    /// Display name of the subject, non-empty.
    pub subject: String,
    /// Free-form location: a room ("Ауд. 301") or a facility ("Спортзал").
    pub room: String,
    /// Instructor in "Last F.I." convention, not validated.
    pub teacher: String,
    /// Open-ended category label ("Лекция", "Практика", "Лабораторная").
    /// `None` means the lesson carries no classification; the field is then
    /// omitted from the serialized form entirely.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

/// Weekday keys used on the wire, Monday first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Weekday {
    #[serde(rename = "понедельник")]
    Monday,
    #[serde(rename = "вторник")]
    Tuesday,
    #[serde(rename = "среда")]
    Wednesday,
    #[serde(rename = "четверг")]
    Thursday,
    #[serde(rename = "пятница")]
    Friday,
    #[serde(rename = "суббота")]
    Saturday,
    #[serde(rename = "воскресенье")]
    Sunday,
}

impl Weekday {
    /// All seven days in display order.
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    /// The lowercase wire key for this day.
    pub fn key(self) -> &'static str {
        match self {
            Weekday::Monday => "понедельник",
            Weekday::Tuesday => "вторник",
            Weekday::Wednesday => "среда",
            Weekday::Thursday => "четверг",
            Weekday::Friday => "пятница",
            Weekday::Saturday => "суббота",
            Weekday::Sunday => "воскресенье",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Read-only mapping from weekday to the ordered lesson list for that day.
///
/// Serializes as a JSON object with exactly the seven weekday keys in
/// Monday-first order. A day without classes is an empty array, never a
/// missing key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekSchedule {
    #[serde(rename = "понедельник", default)]
    pub monday: Vec<Lesson>,
    #[serde(rename = "вторник", default)]
    pub tuesday: Vec<Lesson>,
    #[serde(rename = "среда", default)]
    pub wednesday: Vec<Lesson>,
    #[serde(rename = "четверг", default)]
    pub thursday: Vec<Lesson>,
    #[serde(rename = "пятница", default)]
    pub friday: Vec<Lesson>,
    #[serde(rename = "суббота", default)]
    pub saturday: Vec<Lesson>,
    #[serde(rename = "воскресенье", default)]
    pub sunday: Vec<Lesson>,
}

impl WeekSchedule {
    /// Lessons for one day, in display order.
    pub fn day(&self, day: Weekday) -> &[Lesson] {
        match day {
            Weekday::Monday => &self.monday,
            Weekday::Tuesday => &self.tuesday,
            Weekday::Wednesday => &self.wednesday,
            Weekday::Thursday => &self.thursday,
            Weekday::Friday => &self.friday,
            Weekday::Saturday => &self.saturday,
            Weekday::Sunday => &self.sunday,
        }
    }

    /// Iterate all seven days in display order.
    pub fn days(&self) -> impl Iterator<Item = (Weekday, &[Lesson])> {
        Weekday::ALL.into_iter().map(move |day| (day, self.day(day)))
    }

    /// Total number of lessons across the week.
    pub fn lesson_count(&self) -> usize {
        self.days().map(|(_, lessons)| lessons.len()).sum()
    }
}
