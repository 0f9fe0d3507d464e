use crate::config::Config;
use crate::db;
use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::{Student, StudentInput};
use crate::ui::messages::{header, info, success};
use crate::utils::colors::{RESET, color_for_discount, color_for_optional_field};
use crate::utils::formatting::{self, hours, money, or_dash};
use crate::utils::table::{Column, Table};

/// Fields given on `student edit`; `None` keeps the stored value.
#[derive(Debug, Clone, Default)]
pub struct StudentChanges {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub level: Option<String>,
    pub hourly_rate: Option<f64>,
    pub discount: Option<f64>,
}

impl StudentChanges {
    /// Overlay the changes onto the current record, giving the full
    /// replacement written by `update_student`.
    pub fn apply_to(&self, current: &Student) -> StudentInput {
        let mut input = StudentInput::from(current);
        if let Some(n) = &self.name {
            input.name = n.clone();
        }
        if let Some(p) = &self.phone {
            input.phone = Some(p.clone());
        }
        if let Some(l) = &self.level {
            input.level = Some(l.clone());
        }
        if let Some(r) = self.hourly_rate {
            input.hourly_rate = Some(r);
        }
        if let Some(d) = self.discount {
            input.discount = Some(d);
        }
        input
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.phone.is_none()
            && self.level.is_none()
            && self.hourly_rate.is_none()
            && self.discount.is_none()
    }
}

pub struct StudentLogic;

impl StudentLogic {
    pub fn add(pool: &mut DbPool, input: &StudentInput) -> AppResult<i64> {
        let id = db::add_student(pool, input)?;
        ttlog_quiet(
            &pool.conn,
            "add_student",
            &id.to_string(),
            &format!("Added student '{}'", input.name.trim()),
        );
        success(format!("Student '{}' added with id {}", input.name.trim(), id));
        Ok(id)
    }

    pub fn list(pool: &DbPool, cfg: &Config) -> AppResult<()> {
        let students = db::get_all_students(pool)?;

        if students.is_empty() {
            info("No students yet. Add one with `student add`.");
            return Ok(());
        }

        let mut table = Table::new(vec![
            Column::right("ID"),
            Column::left("Name"),
            Column::left("Phone"),
            Column::left("Level"),
            Column::right("Rate"),
            Column::right("Discount"),
        ]);

        for s in &students {
            table.add_row(vec![
                s.id.to_string(),
                s.name.clone(),
                or_dash(s.phone.as_deref()),
                or_dash(s.level.as_deref()),
                money(s.hourly_rate, &cfg.currency_symbol),
                formatting::discount(s.discount),
            ]);
        }

        print!("{}", table.render());
        Ok(())
    }

    pub fn show(pool: &DbPool, cfg: &Config, id: i64) -> AppResult<()> {
        let s = db::get_student(pool, id)?;
        let summary = db::get_student_summary(pool, id)?;
        let cur = &cfg.currency_symbol;

        header(format!("Student #{} {}", s.id, s.name));
        println!(
            "Phone:    {}{}{}",
            color_for_optional_field(s.phone.as_deref()),
            or_dash(s.phone.as_deref()),
            RESET
        );
        println!(
            "Level:    {}{}{}",
            color_for_optional_field(s.level.as_deref()),
            or_dash(s.level.as_deref()),
            RESET
        );
        println!("Rate:     {}/h", money(s.hourly_rate, cur));
        println!(
            "Discount: {}{}{}",
            color_for_discount(s.discount),
            formatting::discount(s.discount),
            RESET
        );
        println!("Created:  {}", s.created_at);
        println!();
        println!("Lessons:  {}", summary.count);
        println!("Hours:    {}", hours(summary.total_duration));
        println!("Billed:   {}", money(summary.total_amount, cur));
        Ok(())
    }

    pub fn edit(pool: &mut DbPool, id: i64, changes: &StudentChanges) -> AppResult<()> {
        let current = db::get_student(pool, id)?;

        if changes.is_empty() {
            info(format!("Nothing to change for student #{}.", id));
            return Ok(());
        }

        let input = changes.apply_to(&current);
        db::update_student(pool, id, &input)?;

        ttlog_quiet(
            &pool.conn,
            "edit_student",
            &id.to_string(),
            &format!("Updated student '{}'", input.name.trim()),
        );
        success(format!("Student #{} updated.", id));
        Ok(())
    }

    pub fn delete(pool: &mut DbPool, id: i64) -> AppResult<()> {
        let student = db::get_student(pool, id)?;
        let removed = db::delete_student(pool, id)?;

        ttlog_quiet(
            &pool.conn,
            "del_student",
            &id.to_string(),
            &format!(
                "Deleted student '{}' and {} lesson(s)",
                student.name, removed
            ),
        );
        success(format!(
            "Student '{}' deleted together with {} lesson(s).",
            student.name, removed
        ));
        Ok(())
    }
}
