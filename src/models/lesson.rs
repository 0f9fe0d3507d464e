use chrono::NaiveDateTime;
use serde::Serialize;

/// Storage format for lesson timestamps; lexical order equals time order.
pub const DATETIME_FMT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Lesson {
    pub id: i64,
    pub student_id: i64,
    pub start: NaiveDateTime, // ⇔ lessons.start_time (TEXT "YYYY-MM-DD HH:MM:SS")
    pub end: NaiveDateTime,   // ⇔ lessons.end_time
    pub duration: f64,        // hours, frozen at insert
    pub amount: f64,          // frozen at insert, never recomputed
    pub notes: String,
    pub created_at: String,
}

/// A lesson together with the name of the student it belongs to.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LessonEntry {
    pub student_name: String,
    #[serde(flatten)]
    pub lesson: Lesson,
}
