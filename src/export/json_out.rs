use crate::core::report::ExportTable;
use crate::errors::{AppError, AppResult};
use serde_json::{Map, Value};
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

/// Write the table as a pretty-printed array of objects keyed by header.
pub fn write_json(table: &ExportTable, path: &Path) -> AppResult<()> {
    let records: Vec<Value> = table
        .rows
        .iter()
        .map(|row| {
            let obj: Map<String, Value> = table
                .headers
                .iter()
                .zip(row)
                .map(|(h, v)| (h.to_string(), Value::String(v.clone())))
                .collect();
            Value::Object(obj)
        })
        .collect();

    let json_data = serde_json::to_string_pretty(&records)
        .map_err(|e| AppError::from(io::Error::other(format!("JSON serialization error: {e}"))))?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    Ok(())
}
