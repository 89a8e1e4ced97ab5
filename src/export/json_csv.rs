use crate::errors::{AppError, AppResult};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Write rows as CSV with a header derived from the row shape.
pub(crate) fn export_csv<T: Serialize>(rows: &[T], path: &Path) -> AppResult<()> {
    let mut wtr =
        csv::Writer::from_path(path).map_err(|e| AppError::Export(e.to_string()))?;

    for row in rows {
        wtr.serialize(row)
            .map_err(|e| AppError::Export(e.to_string()))?;
    }

    wtr.flush()?;
    Ok(())
}

/// Write rows as pretty-printed JSON.
pub(crate) fn export_json<T: Serialize>(rows: &[T], path: &Path) -> AppResult<()> {
    let json =
        serde_json::to_string_pretty(rows).map_err(|e| AppError::Export(e.to_string()))?;
    fs::write(path, json)?;
    Ok(())
}
