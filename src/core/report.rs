//! Aggregations over lesson lists and the flat tables used for export.
//!
//! Everything here is pure: callers load lessons through `db` and pass
//! them in. Empty input is a valid case and yields zero totals.

use crate::models::lesson::DATETIME_FMT;
use crate::models::{DailyTotal, Lesson, LessonEntry, StudentTotal, Summary};
use chrono::NaiveDate;
use std::collections::{BTreeMap, HashMap};

/// Count and totals over a set of lessons.
pub fn summarize(lessons: &[Lesson]) -> Summary {
    let mut s = Summary::default();
    for l in lessons {
        s.add(l.duration, l.amount);
    }
    s
}

/// Count and totals over lessons of all students.
pub fn overall(entries: &[LessonEntry]) -> Summary {
    let mut s = Summary::default();
    for e in entries {
        s.add(e.lesson.duration, e.lesson.amount);
    }
    s
}

/// One row per student with at least one lesson, highest amount first.
///
/// Ties on amount are ordered by student name, then id.
pub fn by_student(entries: &[LessonEntry]) -> Vec<StudentTotal> {
    let mut totals: HashMap<i64, StudentTotal> = HashMap::new();

    for e in entries {
        totals
            .entry(e.lesson.student_id)
            .or_insert_with(|| StudentTotal {
                student_id: e.lesson.student_id,
                name: e.student_name.clone(),
                summary: Summary::default(),
            })
            .summary
            .add(e.lesson.duration, e.lesson.amount);
    }

    let mut out: Vec<StudentTotal> = totals.into_values().collect();
    out.sort_by(|a, b| {
        b.summary
            .total_amount
            .total_cmp(&a.summary.total_amount)
            .then_with(|| a.name.cmp(&b.name))
            .then_with(|| a.student_id.cmp(&b.student_id))
    });
    out
}

/// Bucket lessons by the calendar date of their start, oldest first.
pub fn by_date(lessons: &[Lesson]) -> Vec<DailyTotal> {
    let mut days: BTreeMap<NaiveDate, Summary> = BTreeMap::new();

    for l in lessons {
        days.entry(l.start.date())
            .or_default()
            .add(l.duration, l.amount);
    }

    days.into_iter()
        .map(|(date, s)| DailyTotal {
            date,
            lesson_count: s.count,
            total_duration: s.total_duration,
            total_amount: s.total_amount,
        })
        .collect()
}

/// Flat table with ordered columns, ready for CSV or JSON output.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportTable {
    pub headers: Vec<&'static str>,
    pub rows: Vec<Vec<String>>,
}

impl ExportTable {
    /// Lessons of every student; includes the `student` column.
    pub fn all_lessons(entries: &[LessonEntry]) -> Self {
        let rows = entries
            .iter()
            .map(|e| {
                let l = &e.lesson;
                vec![
                    l.id.to_string(),
                    e.student_name.clone(),
                    l.start.format(DATETIME_FMT).to_string(),
                    l.end.format(DATETIME_FMT).to_string(),
                    l.duration.to_string(),
                    l.amount.to_string(),
                    l.notes.clone(),
                ]
            })
            .collect();

        Self {
            headers: vec![
                "id",
                "student",
                "start_time",
                "end_time",
                "duration",
                "amount",
                "notes",
            ],
            rows,
        }
    }

    /// Lessons of a single student; the student column would be redundant.
    pub fn student_lessons(lessons: &[Lesson]) -> Self {
        let rows = lessons
            .iter()
            .map(|l| {
                vec![
                    l.id.to_string(),
                    l.start.format(DATETIME_FMT).to_string(),
                    l.end.format(DATETIME_FMT).to_string(),
                    l.duration.to_string(),
                    l.amount.to_string(),
                    l.notes.clone(),
                ]
            })
            .collect();

        Self {
            headers: vec!["id", "start_time", "end_time", "duration", "amount", "notes"],
            rows,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
