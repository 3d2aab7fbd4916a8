//! Built-in fixture data for group ИКБО-31-25.
//!
//! This is placeholder content standing in for a future live data source;
//! it is constructed once at process start and never mutated. Lessons within
//! a day are listed in chronological display order.

use async_trait::async_trait;
use chrono::NaiveDate;

use super::error::StoreResult;
use super::source::{BoardSource, GroupInfoSource, ScheduleSource};
use crate::models::{
    GroupInfo, HomeworkItem, InfoLink, Lesson, NoticeKind, Notification, Priority, WeekSchedule,
};

/// The group this deployment serves.
pub const GROUP: &str = "ИКБО-31-25";

fn lesson(time: &str, subject: &str, room: &str, teacher: &str, kind: &str) -> Lesson {
    Lesson {
        time: time.to_string(),
        subject: subject.to_string(),
        room: room.to_string(),
        teacher: teacher.to_string(),
        kind: Some(kind.to_string()),
    }
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid fixture date")
}

/// The canonical weekly schedule. Saturday and Sunday have no classes and
/// stay present as empty days.
pub fn week_schedule() -> WeekSchedule {
    WeekSchedule {
        monday: vec![
            lesson(
                "09:00-10:30",
                "Математический анализ",
                "Ауд. 301",
                "Иванов И.И.",
                "Лекция",
            ),
            lesson(
                "10:45-12:15",
                "Программирование",
                "Ауд. 205",
                "Петров П.П.",
                "Практика",
            ),
            lesson(
                "12:30-14:00",
                "Английский язык",
                "Ауд. 410",
                "Смирнова А.А.",
                "Практика",
            ),
        ],
        tuesday: vec![
            lesson(
                "09:00-10:30",
                "Базы данных",
                "Ауд. 302",
                "Козлов К.К.",
                "Лекция",
            ),
            lesson(
                "10:45-12:15",
                "Базы данных",
                "Ауд. 206",
                "Козлов К.К.",
                "Лабораторная",
            ),
            lesson(
                "12:30-14:00",
                "Физическая культура",
                "Спортзал",
                "Волков В.В.",
                "Практика",
            ),
        ],
        wednesday: vec![
            lesson(
                "09:00-10:30",
                "Алгоритмы и структуры данных",
                "Ауд. 301",
                "Новиков Н.Н.",
                "Лекция",
            ),
            lesson(
                "10:45-12:15",
                "Алгоритмы и структуры данных",
                "Ауд. 205",
                "Новиков Н.Н.",
                "Практика",
            ),
            lesson(
                "12:30-14:00",
                "Веб-разработка",
                "Ауд. 207",
                "Сидоров С.С.",
                "Лабораторная",
            ),
        ],
        thursday: vec![
            lesson(
                "09:00-10:30",
                "Операционные системы",
                "Ауд. 303",
                "Морозов М.М.",
                "Лекция",
            ),
            lesson(
                "10:45-12:15",
                "Операционные системы",
                "Ауд. 208",
                "Морозов М.М.",
                "Лабораторная",
            ),
            lesson(
                "13:00-14:30",
                "Дискретная математика",
                "Ауд. 305",
                "Иванов И.И.",
                "Практика",
            ),
        ],
        friday: vec![
            lesson(
                "09:00-10:30",
                "Математический анализ",
                "Ауд. 301",
                "Иванов И.И.",
                "Практика",
            ),
            lesson(
                "10:45-12:15",
                "Программирование",
                "Ауд. 205",
                "Петров П.П.",
                "Лабораторная",
            ),
            lesson(
                "12:30-14:00",
                "Философия",
                "Ауд. 501",
                "Федорова Ф.Ф.",
                "Лекция",
            ),
        ],
        saturday: vec![],
        sunday: vec![],
    }
}

/// Current homework assignments.
pub fn homework() -> Vec<HomeworkItem> {
    vec![
        HomeworkItem {
            id: 1,
            subject: "Программирование".to_string(),
            title: "Лабораторная работа №3".to_string(),
            description: "Реализовать алгоритм сортировки слиянием".to_string(),
            deadline: date(2025, 10, 5),
            priority: Priority::High,
        },
        HomeworkItem {
            id: 2,
            subject: "Математический анализ".to_string(),
            title: "Домашнее задание".to_string(),
            description: "Решить задачи 15-20 из учебника".to_string(),
            deadline: date(2025, 10, 7),
            priority: Priority::Medium,
        },
        HomeworkItem {
            id: 3,
            subject: "Английский язык".to_string(),
            title: "Эссе".to_string(),
            description: "Написать эссе на тему \"Technology in modern life\"".to_string(),
            deadline: date(2025, 10, 10),
            priority: Priority::Low,
        },
        HomeworkItem {
            id: 4,
            subject: "Базы данных".to_string(),
            title: "Проектирование БД".to_string(),
            description: "Создать ER-диаграмму для системы управления библиотекой".to_string(),
            deadline: date(2025, 10, 8),
            priority: Priority::High,
        },
    ]
}

/// Current announcements, newest first.
pub fn notifications() -> Vec<Notification> {
    vec![
        Notification {
            id: 1,
            title: "Изменение в расписании".to_string(),
            message: "Завтра занятие по программированию перенесено на 14:00".to_string(),
            date: date(2025, 10, 1),
            kind: NoticeKind::Warning,
        },
        Notification {
            id: 2,
            title: "Новое домашнее задание".to_string(),
            message: "Добавлено задание по базам данных, дедлайн 8 октября".to_string(),
            date: date(2025, 9, 30),
            kind: NoticeKind::Info,
        },
        Notification {
            id: 3,
            title: "Собрание группы".to_string(),
            message: "В пятницу в 15:00 состоится собрание группы в ауд. 301".to_string(),
            date: date(2025, 9, 29),
            kind: NoticeKind::Info,
        },
    ]
}

/// The group information card.
pub fn group_info() -> GroupInfo {
    GroupInfo {
        name: GROUP.to_string(),
        course: "3 курс".to_string(),
        faculty: "Информационные технологии".to_string(),
        students: 25,
        curator: "Иванова М.А.".to_string(),
        contacts: vec![
            InfoLink {
                title: "Староста группы".to_string(),
                description: "Алексей Петров".to_string(),
                url: "https://t.me/username".to_string(),
            },
            InfoLink {
                title: "Email группы".to_string(),
                description: "ivt301@university.edu".to_string(),
                url: "mailto:ivt301@university.edu".to_string(),
            },
            InfoLink {
                title: "Чат группы".to_string(),
                description: "Общий чат в Telegram".to_string(),
                url: "https://t.me/ivt301chat".to_string(),
            },
        ],
        links: vec![
            InfoLink {
                title: "Электронная библиотека".to_string(),
                description: "Доступ к учебным материалам".to_string(),
                url: "https://library.university.edu".to_string(),
            },
            InfoLink {
                title: "Личный кабинет".to_string(),
                description: "Система управления обучением".to_string(),
                url: "https://lms.university.edu".to_string(),
            },
            InfoLink {
                title: "Google Drive группы".to_string(),
                description: "Общие документы и материалы".to_string(),
                url: "https://drive.google.com".to_string(),
            },
        ],
    }
}

/// In-memory source backed by the fixture data above.
///
/// Built once at startup and injected wherever a source is needed; tests may
/// swap in alternate data through [`FixtureSource::with_schedule`].
#[derive(Debug, Clone)]
pub struct FixtureSource {
    schedule: WeekSchedule,
    homework: Vec<HomeworkItem>,
    notifications: Vec<Notification>,
    info: GroupInfo,
}

impl FixtureSource {
    /// Source holding the canonical fixture content.
    pub fn new() -> Self {
        Self {
            schedule: week_schedule(),
            homework: homework(),
            notifications: notifications(),
            info: group_info(),
        }
    }

    /// Replace the weekly schedule, keeping the other fixtures.
    pub fn with_schedule(mut self, schedule: WeekSchedule) -> Self {
        self.schedule = schedule;
        self
    }
}

impl Default for FixtureSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ScheduleSource for FixtureSource {
    async fn week_schedule(&self) -> StoreResult<WeekSchedule> {
        Ok(self.schedule.clone())
    }
}

#[async_trait]
impl BoardSource for FixtureSource {
    async fn homework(&self) -> StoreResult<Vec<HomeworkItem>> {
        Ok(self.homework.clone())
    }

    async fn notifications(&self) -> StoreResult<Vec<Notification>> {
        Ok(self.notifications.clone())
    }
}

#[async_trait]
impl GroupInfoSource for FixtureSource {
    async fn group_info(&self) -> StoreResult<GroupInfo> {
        Ok(self.info.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Weekday;

    #[test]
    fn test_every_weekday_has_three_lessons() {
        let schedule = week_schedule();
        for day in [
            Weekday::Monday,
            Weekday::Tuesday,
            Weekday::Wednesday,
            Weekday::Thursday,
            Weekday::Friday,
        ] {
            assert_eq!(schedule.day(day).len(), 3, "unexpected count on {}", day);
        }
        assert!(schedule.day(Weekday::Saturday).is_empty());
        assert!(schedule.day(Weekday::Sunday).is_empty());
    }

    #[test]
    fn test_monday_opens_with_calculus() {
        let schedule = week_schedule();
        let first = &schedule.monday[0];
        assert_eq!(first.time, "09:00-10:30");
        assert_eq!(first.subject, "Математический анализ");
        assert_eq!(first.room, "Ауд. 301");
        assert_eq!(first.teacher, "Иванов И.И.");
        assert_eq!(first.kind.as_deref(), Some("Лекция"));
    }

    #[test]
    fn test_fixture_construction_is_deterministic() {
        assert_eq!(week_schedule(), week_schedule());
        assert_eq!(homework(), homework());
        assert_eq!(notifications(), notifications());
        assert_eq!(group_info(), group_info());
    }

    #[test]
    fn test_group_info_uses_group_identifier() {
        assert_eq!(group_info().name, GROUP);
    }

    #[tokio::test]
    async fn test_with_schedule_overrides_only_schedule() {
        let source = FixtureSource::new().with_schedule(WeekSchedule::default());

        let schedule = source.week_schedule().await.unwrap();
        assert_eq!(schedule.lesson_count(), 0);

        let homework = source.homework().await.unwrap();
        assert_eq!(homework.len(), 4);
    }
}
