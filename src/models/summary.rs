use chrono::NaiveDate;
use serde::Serialize;

/// Aggregate over a set of lessons.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Summary {
    pub count: i64,
    pub total_duration: f64,
    pub total_amount: f64,
}

impl Summary {
    pub fn add(&mut self, duration: f64, amount: f64) {
        self.count += 1;
        self.total_duration += duration;
        self.total_amount += amount;
    }
}

/// Totals for one calendar date.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyTotal {
    pub date: NaiveDate,
    pub lesson_count: i64,
    pub total_duration: f64,
    pub total_amount: f64,
}

/// Totals for one student, used by the comparison view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudentTotal {
    pub student_id: i64,
    pub name: String,
    pub summary: Summary,
}
