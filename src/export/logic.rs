use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::{FastingExport, WeightExport};
use crate::export::notify_export_success;
use crate::models::user::User;
use crate::ui::messages::warning;
use crate::utils::date::parse_period;
use chrono::NaiveDate;
use rusqlite::{Row, params};
use std::io;
use std::path::Path;

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Export one user's fasting records (or weight records with
    /// `weights = true`).
    ///
    /// - `file`: absolute path of the output file
    /// - `range`: `None`, `"all"`, or the period grammar
    ///   (`YYYY`, `YYYY-MM`, `YYYY-MM-DD`, `start:end`)
    pub fn export(
        pool: &mut DbPool,
        user: &User,
        format: ExportFormat,
        file: &str,
        range: &Option<String>,
        weights: bool,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);

        if !crate::utils::path::is_absolute(file) {
            return Err(AppError::from(io::Error::other(format!(
                "Output file path must be absolute: {file}"
            ))));
        }

        ensure_writable(path, force)?;

        let date_bounds: Option<(NaiveDate, NaiveDate)> = match range {
            None => None,
            Some(r) if r.eq_ignore_ascii_case("all") => None,
            Some(r) => Some(parse_period(r)?),
        };

        if weights {
            let rows = load_weights(pool, user.id)?;
            if rows.is_empty() {
                warning("No weight records to export.");
                return Ok(());
            }
            write_rows(&rows, &format, path)?;
        } else {
            let rows = load_fasts(pool, user.id, date_bounds)?;
            if rows.is_empty() {
                warning("No fasting records found for selected range.");
                return Ok(());
            }
            write_rows(&rows, &format, path)?;
        }

        notify_export_success(format.as_str(), path);
        Ok(())
    }
}

fn write_rows<T: serde::Serialize>(
    rows: &[T],
    format: &ExportFormat,
    path: &Path,
) -> AppResult<()> {
    match format {
        ExportFormat::Csv => export_csv(rows, path),
        ExportFormat::Json => export_json(rows, path),
    }
}

fn load_fasts(
    pool: &mut DbPool,
    user_id: i64,
    bounds: Option<(NaiveDate, NaiveDate)>,
) -> AppResult<Vec<FastingExport>> {
    let conn = &mut pool.conn;
    let mut out = Vec::new();

    match bounds {
        None => {
            let mut stmt = conn.prepare(
                "SELECT id, start_time, end_time, duration_hours, fasting_type,
                        energy_level, focus_level, mood_level, notes
                 FROM fasting_records
                 WHERE user_id = ?1
                 ORDER BY start_time ASC",
            )?;
            let rows = stmt.query_map([user_id], map_fast_row)?;
            for r in rows {
                out.push(r?);
            }
        }
        Some((start, end)) => {
            // start_time is "YYYY-MM-DD HH:MM": date() extracts the day
            let mut stmt = conn.prepare(
                "SELECT id, start_time, end_time, duration_hours, fasting_type,
                        energy_level, focus_level, mood_level, notes
                 FROM fasting_records
                 WHERE user_id = ?1 AND date(start_time) BETWEEN ?2 AND ?3
                 ORDER BY start_time ASC",
            )?;
            let rows = stmt.query_map(
                params![
                    user_id,
                    start.format("%Y-%m-%d").to_string(),
                    end.format("%Y-%m-%d").to_string()
                ],
                map_fast_row,
            )?;
            for r in rows {
                out.push(r?);
            }
        }
    }

    Ok(out)
}

fn map_fast_row(row: &Row<'_>) -> rusqlite::Result<FastingExport> {
    Ok(FastingExport {
        id: row.get(0)?,
        start_time: row.get(1)?,
        end_time: row.get::<_, Option<String>>(2)?.unwrap_or_default(),
        duration_hours: row.get(3)?,
        fasting_type: row.get(4)?,
        energy_level: row.get(5)?,
        focus_level: row.get(6)?,
        mood_level: row.get(7)?,
        notes: row.get(8)?,
    })
}

fn load_weights(pool: &mut DbPool, user_id: i64) -> AppResult<Vec<WeightExport>> {
    let mut stmt = pool.conn.prepare(
        "SELECT reference_month, weight
         FROM weight_records
         WHERE user_id = ?1
         ORDER BY reference_month ASC",
    )?;
    let rows = stmt.query_map([user_id], |row| {
        Ok(WeightExport {
            reference_month: row.get(0)?,
            weight: row.get(1)?,
        })
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
