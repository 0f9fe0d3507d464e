use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use crate::utils::formatting::money;
use rusqlite::OptionalExtension;
use std::fs;

/// Figures shown by `db --info`.
#[derive(Debug, Clone, PartialEq)]
pub struct DbInfo {
    pub students: i64,
    pub lessons: i64,
    pub first_lesson: Option<String>,
    pub last_lesson: Option<String>,
    pub total_amount: f64,
}

pub fn collect_db_info(pool: &DbPool) -> AppResult<DbInfo> {
    let students: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM students", [], |row| row.get(0))?;

    let (lessons, total_amount): (i64, f64) = pool.conn.query_row(
        "SELECT COUNT(*), COALESCE(SUM(amount), 0.0) FROM lessons",
        [],
        |row| Ok((row.get(0)?, row.get(1)?)),
    )?;

    let first_lesson: Option<String> = pool
        .conn
        .query_row(
            "SELECT start_time FROM lessons ORDER BY start_time ASC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let last_lesson: Option<String> = pool
        .conn
        .query_row(
            "SELECT start_time FROM lessons ORDER BY start_time DESC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    Ok(DbInfo {
        students,
        lessons,
        first_lesson,
        last_lesson,
        total_amount,
    })
}

pub fn print_db_info(pool: &DbPool, db_path: &str, currency: &str) -> AppResult<()> {
    let info = collect_db_info(pool)?;
    println!();

    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.2} KB", CYAN, RESET, file_kb);
    println!(
        "{}• Students:{} {}{}{}",
        CYAN, RESET, GREEN, info.students, RESET
    );
    println!(
        "{}• Lessons:{} {}{}{}",
        CYAN, RESET, GREEN, info.lessons, RESET
    );
    println!(
        "{}• Billed:{} {}",
        CYAN,
        RESET,
        money(info.total_amount, currency)
    );

    let fmt_first = info
        .first_lesson
        .unwrap_or_else(|| format!("{GREY}--{RESET}"));
    let fmt_last = info
        .last_lesson
        .unwrap_or_else(|| format!("{GREY}--{RESET}"));

    println!("{}• Lesson range:{}", CYAN, RESET);
    println!("    from: {}", fmt_first);
    println!("    to:   {}", fmt_last);

    println!();
    Ok(())
}
