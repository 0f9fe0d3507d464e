// src/export/logic.rs

use crate::config::Config;
use crate::core::report::ExportTable;
use crate::db;
use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::export::fs_utils::{default_file_name, ensure_writable, free_path};
use crate::export::{ExportFormat, notify_export_success, write_csv, write_json};
use crate::ui::messages::{info, warning};
use chrono::Local;
use std::path::PathBuf;

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Build the export table: every lesson, or only those of `student_id`
    /// (which drops the student column).
    pub fn build_table(pool: &DbPool, student_id: Option<i64>) -> AppResult<ExportTable> {
        match student_id {
            None => Ok(ExportTable::all_lessons(&db::get_all_lessons(pool)?)),
            Some(id) => {
                db::get_student(pool, id)?;
                Ok(ExportTable::student_lessons(&db::get_student_lessons(
                    pool, id,
                )?))
            }
        }
    }

    /// Export lessons to a file.
    ///
    /// - `student`: restrict to one student, looked up by name
    /// - `file`: explicit output path; otherwise a timestamped name
    ///   inside `cfg.export_dir`
    ///
    /// Returns the written path, or `None` when there was nothing to export.
    pub fn export(
        pool: &DbPool,
        cfg: &Config,
        student: Option<&str>,
        format: ExportFormat,
        file: Option<&str>,
        force: bool,
    ) -> AppResult<Option<PathBuf>> {
        let student_id = match student {
            Some(name) => Some(
                db::get_student_id_by_name(pool, name)?
                    .ok_or_else(|| AppError::UnknownStudent(name.to_string()))?,
            ),
            None => None,
        };

        let table = Self::build_table(pool, student_id)?;

        if table.is_empty() {
            warning("No lessons to export.");
            return Ok(None);
        }

        let path = match file {
            Some(f) => {
                let p = PathBuf::from(f);
                ensure_writable(&p, force)?;
                p
            }
            None => {
                let dir = cfg.export_path();
                std::fs::create_dir_all(&dir)?;
                free_path(&dir, &default_file_name(Local::now().naive_local(), format))
            }
        };

        info(format!(
            "Exporting {} lesson(s) to {}: {}",
            table.rows.len(),
            format.as_str().to_uppercase(),
            path.display()
        ));

        match format {
            ExportFormat::Csv => write_csv(&table, &path)?,
            ExportFormat::Json => write_json(&table, &path)?,
        }

        notify_export_success(&format.as_str().to_uppercase(), &path);

        ttlog_quiet(
            &pool.conn,
            "export",
            student.unwrap_or("all"),
            &format!("{} rows written to {}", table.rows.len(), path.display()),
        );

        Ok(Some(path))
    }
}
