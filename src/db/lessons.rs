//! Lesson rows and the aggregate queries built on them.

use crate::core::billing;
use crate::db::pool::DbPool;
use crate::db::students::find_student;
use crate::errors::{AppError, AppResult};
use crate::models::lesson::DATETIME_FMT;
use crate::models::{DailyTotal, Lesson, LessonEntry, Summary};
use chrono::{NaiveDate, NaiveDateTime};
use rusqlite::{OptionalExtension, Row, params};

const LESSON_COLUMNS: &str =
    "l.id, l.student_id, l.start_time, l.end_time, l.duration, l.amount, l.notes, l.created_at";

fn parse_timestamp(idx: usize, raw: String) -> rusqlite::Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(&raw, DATETIME_FMT).map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            idx,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDate(raw.clone())),
        )
    })
}

pub fn map_row(row: &Row) -> rusqlite::Result<Lesson> {
    Ok(Lesson {
        id: row.get("id")?,
        student_id: row.get("student_id")?,
        start: parse_timestamp(2, row.get("start_time")?)?,
        end: parse_timestamp(3, row.get("end_time")?)?,
        duration: row.get("duration")?,
        amount: row.get("amount")?,
        notes: row.get("notes")?,
        created_at: row.get("created_at")?,
    })
}

fn map_entry(row: &Row) -> rusqlite::Result<LessonEntry> {
    Ok(LessonEntry {
        student_name: row.get("student_name")?,
        lesson: map_row(row)?,
    })
}

/// Record a lesson and return its id.
///
/// Duration and amount are computed from the student's current rate and
/// discount and stored as-is. Reading the rate and inserting the row
/// happen in one transaction.
pub fn add_lesson(
    pool: &mut DbPool,
    student_id: i64,
    start: NaiveDateTime,
    end: NaiveDateTime,
    notes: &str,
) -> AppResult<i64> {
    // Reject bad ranges before touching the database.
    billing::duration_hours(start, end)?;

    let tx = pool.conn.transaction()?;

    let student = find_student(&tx, student_id)?
        .ok_or_else(|| AppError::student_not_found(student_id))?;

    let bill = billing::compute(start, end, student.hourly_rate, student.discount)?;

    tx.execute(
        "INSERT INTO lessons (student_id, start_time, end_time, duration, amount, notes)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            student_id,
            start.format(DATETIME_FMT).to_string(),
            end.format(DATETIME_FMT).to_string(),
            bill.duration_hours,
            bill.amount,
            notes,
        ],
    )?;
    let id = tx.last_insert_rowid();
    tx.commit()?;

    Ok(id)
}

pub fn get_lesson(pool: &DbPool, id: i64) -> AppResult<Lesson> {
    pool.conn
        .query_row(
            &format!("SELECT {LESSON_COLUMNS} FROM lessons l WHERE l.id = ?1"),
            [id],
            map_row,
        )
        .optional()?
        .ok_or_else(|| AppError::lesson_not_found(id))
}

/// Lessons of one student, most recent first.
pub fn get_student_lessons(pool: &DbPool, student_id: i64) -> AppResult<Vec<Lesson>> {
    let mut stmt = pool.conn.prepare(&format!(
        "SELECT {LESSON_COLUMNS}
         FROM lessons l
         WHERE l.student_id = ?1
         ORDER BY l.start_time DESC, l.id DESC"
    ))?;

    let rows = stmt.query_map([student_id], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Every lesson with its student's name, most recent first.
pub fn get_all_lessons(pool: &DbPool) -> AppResult<Vec<LessonEntry>> {
    let mut stmt = pool.conn.prepare(&format!(
        "SELECT {LESSON_COLUMNS}, s.name AS student_name
         FROM lessons l
         JOIN students s ON l.student_id = s.id
         ORDER BY l.start_time DESC, l.id DESC"
    ))?;

    let rows = stmt.query_map([], map_entry)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Count and totals over a student's lessons; zeros when there are none.
pub fn get_student_summary(pool: &DbPool, student_id: i64) -> AppResult<Summary> {
    let summary = pool.conn.query_row(
        "SELECT COUNT(*), COALESCE(SUM(duration), 0.0), COALESCE(SUM(amount), 0.0)
         FROM lessons
         WHERE student_id = ?1",
        [student_id],
        |row| {
            Ok(Summary {
                count: row.get(0)?,
                total_duration: row.get(1)?,
                total_amount: row.get(2)?,
            })
        },
    )?;
    Ok(summary)
}

/// Per-date totals for one calendar month, oldest date first.
pub fn get_monthly_summary(pool: &DbPool, year: i32, month: u32) -> AppResult<Vec<DailyTotal>> {
    if !(1..=12).contains(&month) {
        return Err(AppError::validation(
            "month",
            format!("month must be between 1 and 12, got {month}"),
        ));
    }

    let mut stmt = pool.conn.prepare(
        "SELECT strftime('%Y-%m-%d', start_time) AS day,
                COUNT(*),
                SUM(duration),
                SUM(amount)
         FROM lessons
         WHERE strftime('%Y', start_time) = ?1 AND strftime('%m', start_time) = ?2
         GROUP BY day
         ORDER BY day ASC",
    )?;

    let rows = stmt.query_map(params![format!("{year:04}"), format!("{month:02}")], |row| {
        let raw: String = row.get(0)?;
        let date = NaiveDate::parse_from_str(&raw, "%Y-%m-%d").map_err(|_| {
            rusqlite::Error::FromSqlConversionFailure(
                0,
                rusqlite::types::Type::Text,
                Box::new(AppError::InvalidDate(raw.clone())),
            )
        })?;
        Ok(DailyTotal {
            date,
            lesson_count: row.get(1)?,
            total_duration: row.get(2)?,
            total_amount: row.get(3)?,
        })
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn delete_lesson(pool: &mut DbPool, id: i64) -> AppResult<()> {
    let removed = pool.conn.execute("DELETE FROM lessons WHERE id = ?1", [id])?;
    if removed == 0 {
        return Err(AppError::lesson_not_found(id));
    }
    Ok(())
}
