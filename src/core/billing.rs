//! Lesson billing: duration in hours and the amount owed.
//!
//! The rate and discount are captured at the time of the call. Stored
//! lessons keep the amount computed here even if the student's rate
//! changes later.

use crate::errors::{AppError, AppResult};
use chrono::NaiveDateTime;

const MILLIS_PER_HOUR: f64 = 3_600_000.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Billing {
    pub duration_hours: f64,
    pub amount: f64,
}

/// Duration of a lesson in hours; `end` must be strictly after `start`.
pub fn duration_hours(start: NaiveDateTime, end: NaiveDateTime) -> AppResult<f64> {
    let millis = (end - start).num_milliseconds();
    if millis <= 0 {
        return Err(AppError::validation(
            "end",
            format!("end time {end} must be after start time {start}"),
        ));
    }
    Ok(millis as f64 / MILLIS_PER_HOUR)
}

/// Compute duration and amount. No rounding: that is a display concern.
pub fn compute(
    start: NaiveDateTime,
    end: NaiveDateTime,
    hourly_rate: f64,
    discount: f64,
) -> AppResult<Billing> {
    let duration_hours = duration_hours(start, end)?;
    Ok(Billing {
        duration_hours,
        amount: duration_hours * hourly_rate * discount,
    })
}
