use crate::core::report::ExportTable;
use crate::errors::{AppError, AppResult};
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

/// UTF-8 byte-order mark, so spreadsheet tools detect the encoding.
const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Write the table as CSV: BOM, header row, then one record per row.
pub fn write_csv(table: &ExportTable, path: &Path) -> AppResult<()> {
    let mut file = File::create(path)?;
    file.write_all(UTF8_BOM)?;

    let mut wtr = csv::Writer::from_writer(file);

    wtr.write_record(&table.headers)
        .map_err(|e| AppError::from(io::Error::other(format!("CSV write error: {e}"))))?;

    for row in &table.rows {
        wtr.write_record(row)
            .map_err(|e| AppError::from(io::Error::other(format!("CSV write error: {e}"))))?;
    }

    wtr.flush()
        .map_err(|e| AppError::from(io::Error::other(format!("CSV flush error: {e}"))))?;

    Ok(())
}
