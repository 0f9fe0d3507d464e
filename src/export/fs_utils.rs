// src/export/fs_utils.rs

use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::ui::messages::{ask_confirmation, info};
use chrono::NaiveDateTime;
use std::path::{Path, PathBuf};

/// File name stamped with the export time, e.g. `class_stats_20250901_093000.csv`.
pub fn default_file_name(now: NaiveDateTime, format: ExportFormat) -> String {
    format!(
        "class_stats_{}.{}",
        now.format("%Y%m%d_%H%M%S"),
        format.as_str()
    )
}

/// `dir/name`, or `dir/<stem>_<n>.<ext>` with the first free `n` when the
/// plain name is taken (two exports within the same second).
pub fn free_path(dir: &Path, name: &str) -> PathBuf {
    let first = dir.join(name);
    if !first.exists() {
        return first;
    }

    let (stem, ext) = match name.rsplit_once('.') {
        Some((s, e)) => (s, format!(".{e}")),
        None => (name, String::new()),
    };

    (1..)
        .map(|n| dir.join(format!("{stem}_{n}{ext}")))
        .find(|p| !p.exists())
        .unwrap_or(first)
}

/// Check whether an explicitly named file may be created or overwritten.
///
/// - file does not exist → Ok
/// - file exists and `force` is set → Ok
/// - file exists and `force == false` → ask the user.
pub(crate) fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if !path.exists() || force {
        return Ok(());
    }

    if ask_confirmation(&format!(
        "The file '{}' already exists. Overwrite it?",
        path.display()
    )) {
        info("Existing file will be overwritten.");
        Ok(())
    } else {
        Err(AppError::Export(
            "existing file not overwritten".to_string(),
        ))
    }
}
