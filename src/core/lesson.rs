use crate::config::Config;
use crate::db;
use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};
use crate::utils::formatting::{hours, money};
use crate::utils::table::{Column, Table};
use chrono::NaiveDateTime;

/// How the user named the student of a lesson.
#[derive(Debug, Clone, PartialEq)]
pub enum StudentRef {
    Id(i64),
    Name(String),
}

impl StudentRef {
    /// Resolve to a student id. Unknown names are reported as
    /// `UnknownStudent`, unknown ids as `NotFound`.
    pub fn resolve(&self, pool: &DbPool) -> AppResult<i64> {
        match self {
            StudentRef::Id(id) => Ok(db::get_student(pool, *id)?.id),
            StudentRef::Name(name) => db::get_student_id_by_name(pool, name)?
                .ok_or_else(|| AppError::UnknownStudent(name.clone())),
        }
    }
}

const SHORT_FMT: &str = "%Y-%m-%d %H:%M";

pub struct LessonLogic;

impl LessonLogic {
    pub fn add(
        pool: &mut DbPool,
        cfg: &Config,
        student: &StudentRef,
        start: NaiveDateTime,
        end: NaiveDateTime,
        notes: &str,
    ) -> AppResult<i64> {
        let student_id = student.resolve(pool)?;
        let id = db::add_lesson(pool, student_id, start, end, notes)?;
        let lesson = db::get_lesson(pool, id)?;

        ttlog_quiet(
            &pool.conn,
            "add_lesson",
            &id.to_string(),
            &format!(
                "Lesson for student #{} on {}",
                student_id,
                start.format(SHORT_FMT)
            ),
        );
        success(format!(
            "Lesson #{} recorded: {} h, {}",
            id,
            hours(lesson.duration),
            money(lesson.amount, &cfg.currency_symbol)
        ));
        Ok(id)
    }

    /// List lessons, optionally restricted to one student.
    pub fn list(pool: &DbPool, cfg: &Config, student: Option<&StudentRef>) -> AppResult<()> {
        let cur = &cfg.currency_symbol;

        let table = match student {
            Some(r) => {
                let id = r.resolve(pool)?;
                let mut t = Table::new(vec![
                    Column::right("ID"),
                    Column::left("Start"),
                    Column::left("End"),
                    Column::right("Hours"),
                    Column::right("Amount"),
                    Column::left("Notes"),
                ]);
                for l in db::get_student_lessons(pool, id)? {
                    t.add_row(vec![
                        l.id.to_string(),
                        l.start.format(SHORT_FMT).to_string(),
                        l.end.format(SHORT_FMT).to_string(),
                        hours(l.duration),
                        money(l.amount, cur),
                        l.notes,
                    ]);
                }
                t
            }
            None => {
                let mut t = Table::new(vec![
                    Column::right("ID"),
                    Column::left("Student"),
                    Column::left("Start"),
                    Column::left("End"),
                    Column::right("Hours"),
                    Column::right("Amount"),
                    Column::left("Notes"),
                ]);
                for e in db::get_all_lessons(pool)? {
                    let l = e.lesson;
                    t.add_row(vec![
                        l.id.to_string(),
                        e.student_name,
                        l.start.format(SHORT_FMT).to_string(),
                        l.end.format(SHORT_FMT).to_string(),
                        hours(l.duration),
                        money(l.amount, cur),
                        l.notes,
                    ]);
                }
                t
            }
        };

        if table.rows.is_empty() {
            info("No lessons recorded.");
            return Ok(());
        }

        print!("{}", table.render());
        Ok(())
    }

    pub fn delete(pool: &mut DbPool, id: i64) -> AppResult<()> {
        let lesson = db::get_lesson(pool, id)?;
        db::delete_lesson(pool, id)?;

        ttlog_quiet(
            &pool.conn,
            "del_lesson",
            &id.to_string(),
            &format!(
                "Deleted lesson of student #{} on {}",
                lesson.student_id,
                lesson.start.format(SHORT_FMT)
            ),
        );
        success(format!("Lesson #{} deleted.", id));
        Ok(())
    }
}
