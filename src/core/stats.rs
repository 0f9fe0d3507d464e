//! Statistics views: overall ranking, per-student daily totals and
//! monthly totals. Charts are replaced by tables.

use crate::config::Config;
use crate::core::lesson::StudentRef;
use crate::core::report;
use crate::db;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::{DailyTotal, Summary};
use crate::ui::messages::{header, info};
use crate::utils::date::month_name;
use crate::utils::formatting::{bold, hours, money};
use crate::utils::table::{Column, Table};

pub struct StatsLogic;

fn print_summary(summary: &Summary, cur: &str) {
    println!("Lessons: {}", bold(&summary.count.to_string()));
    println!("Hours:   {}", bold(&hours(summary.total_duration)));
    println!("Amount:  {}", bold(&money(summary.total_amount, cur)));
    println!();
}

fn daily_table(days: &[DailyTotal], cur: &str) -> Table {
    let mut t = Table::new(vec![
        Column::left("Date"),
        Column::right("Lessons"),
        Column::right("Hours"),
        Column::right("Amount"),
    ]);
    for d in days {
        t.add_row(vec![
            d.date.format("%Y-%m-%d").to_string(),
            d.lesson_count.to_string(),
            hours(d.total_duration),
            money(d.total_amount, cur),
        ]);
    }
    t
}

impl StatsLogic {
    /// Totals over every lesson plus a per-student ranking by amount.
    pub fn overall(pool: &DbPool, cfg: &Config) -> AppResult<()> {
        let cur = &cfg.currency_symbol;
        let entries = db::get_all_lessons(pool)?;

        header("All students");
        print_summary(&report::overall(&entries), cur);

        let ranking = report::by_student(&entries);
        if ranking.is_empty() {
            info("No lessons recorded.");
            return Ok(());
        }

        let mut t = Table::new(vec![
            Column::right("#"),
            Column::left("Student"),
            Column::right("Lessons"),
            Column::right("Hours"),
            Column::right("Amount"),
        ]);
        for (i, s) in ranking.iter().enumerate() {
            t.add_row(vec![
                (i + 1).to_string(),
                s.name.clone(),
                s.summary.count.to_string(),
                hours(s.summary.total_duration),
                money(s.summary.total_amount, cur),
            ]);
        }
        print!("{}", t.render());
        Ok(())
    }

    /// Summary of one student and their totals per lesson date.
    pub fn student(pool: &DbPool, cfg: &Config, student: &StudentRef) -> AppResult<()> {
        let cur = &cfg.currency_symbol;
        let id = student.resolve(pool)?;
        let s = db::get_student(pool, id)?;

        header(format!("{} (#{})", s.name, s.id));
        print_summary(&db::get_student_summary(pool, id)?, cur);

        let lessons = db::get_student_lessons(pool, id)?;
        if lessons.is_empty() {
            info("No lessons recorded for this student.");
            return Ok(());
        }

        print!("{}", daily_table(&report::by_date(&lessons), cur).render());
        Ok(())
    }

    /// Per-date totals within one calendar month.
    pub fn month(pool: &DbPool, cfg: &Config, year: i32, month: u32) -> AppResult<()> {
        let cur = &cfg.currency_symbol;
        let days = db::get_monthly_summary(pool, year, month)?;

        header(format!("{} {}", month_name(month), year));

        let mut total = Summary::default();
        for d in &days {
            total.count += d.lesson_count;
            total.total_duration += d.total_duration;
            total.total_amount += d.total_amount;
        }
        print_summary(&total, cur);

        if days.is_empty() {
            info("No lessons in this month.");
            return Ok(());
        }

        print!("{}", daily_table(&days, cur).render());
        Ok(())
    }
}
