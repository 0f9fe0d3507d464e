//! Student rows: create, read, update, delete and name lookup.

use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::{Student, StudentInput};
use rusqlite::{Connection, OptionalExtension, Row, params};

const STUDENT_COLUMNS: &str = "id, name, phone, level, hourly_rate, discount, created_at";

pub fn map_row(row: &Row) -> rusqlite::Result<Student> {
    Ok(Student {
        id: row.get("id")?,
        name: row.get("name")?,
        phone: row.get("phone")?,
        level: row.get("level")?,
        hourly_rate: row.get("hourly_rate")?,
        discount: row.get("discount")?,
        created_at: row.get("created_at")?,
    })
}

/// Insert a new student and return its id.
pub fn add_student(pool: &mut DbPool, input: &StudentInput) -> AppResult<i64> {
    let f = input.validate()?;

    pool.conn.execute(
        "INSERT INTO students (name, phone, level, hourly_rate, discount)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![f.name, f.phone, f.level, f.hourly_rate, f.discount],
    )?;

    Ok(pool.conn.last_insert_rowid())
}

/// All students ordered by name.
pub fn get_all_students(pool: &DbPool) -> AppResult<Vec<Student>> {
    let mut stmt = pool.conn.prepare(&format!(
        "SELECT {STUDENT_COLUMNS} FROM students ORDER BY name ASC, id ASC"
    ))?;

    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub(crate) fn find_student(conn: &Connection, id: i64) -> AppResult<Option<Student>> {
    let student = conn
        .query_row(
            &format!("SELECT {STUDENT_COLUMNS} FROM students WHERE id = ?1"),
            [id],
            map_row,
        )
        .optional()?;
    Ok(student)
}

pub fn get_student(pool: &DbPool, id: i64) -> AppResult<Student> {
    find_student(&pool.conn, id)?.ok_or_else(|| AppError::student_not_found(id))
}

/// Overwrite every mutable field of a student.
///
/// Lessons already recorded keep the amount computed at their creation.
pub fn update_student(pool: &mut DbPool, id: i64, input: &StudentInput) -> AppResult<()> {
    let f = input.validate()?;

    let changed = pool.conn.execute(
        "UPDATE students
         SET name = ?1, phone = ?2, level = ?3,
             hourly_rate = ?4, discount = ?5
         WHERE id = ?6",
        params![f.name, f.phone, f.level, f.hourly_rate, f.discount, id],
    )?;

    if changed == 0 {
        return Err(AppError::student_not_found(id));
    }
    Ok(())
}

/// Delete a student and all of its lessons.
///
/// Lessons go first, then the student row, in one transaction.
/// Returns the number of lessons removed.
pub fn delete_student(pool: &mut DbPool, id: i64) -> AppResult<usize> {
    let tx = pool.conn.transaction()?;

    if find_student(&tx, id)?.is_none() {
        return Err(AppError::student_not_found(id));
    }

    let lessons = tx.execute("DELETE FROM lessons WHERE student_id = ?1", [id])?;
    tx.execute("DELETE FROM students WHERE id = ?1", [id])?;
    tx.commit()?;

    Ok(lessons)
}

/// Exact-match lookup; `None` when no student carries that name.
///
/// Names are not unique: the oldest matching student wins.
pub fn get_student_id_by_name(pool: &DbPool, name: &str) -> AppResult<Option<i64>> {
    let id = pool
        .conn
        .query_row(
            "SELECT id FROM students WHERE name = ?1 ORDER BY id ASC LIMIT 1",
            [name],
            |row| row.get(0),
        )
        .optional()?;
    Ok(id)
}
