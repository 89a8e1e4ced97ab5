use crate::errors::{AppError, AppResult};
use crate::models::fasting::FastingRecord;
use crate::models::fasting_type::FastingType;
use crate::models::level::Level;
use crate::models::user::User;
use crate::models::weight::WeightRecord;
use crate::utils::time::{DATETIME_FMT, format_datetime};
use chrono::NaiveDateTime;
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

// ---------------------------------------------------------------------
// Row mapping
// ---------------------------------------------------------------------

fn bad_text(err: AppError) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(err))
}

fn parse_stored_datetime(s: &str) -> std::result::Result<NaiveDateTime, rusqlite::Error> {
    NaiveDateTime::parse_from_str(s, DATETIME_FMT)
        .map_err(|_| bad_text(AppError::InvalidDateTime(s.to_string())))
}

pub fn map_fasting_row(row: &Row) -> Result<FastingRecord> {
    let start_str: String = row.get("start_time")?;
    let start_time = parse_stored_datetime(&start_str)?;

    let end_time = match row.get::<_, Option<String>>("end_time")? {
        Some(s) => Some(parse_stored_datetime(&s)?),
        None => None,
    };

    let type_str: String = row.get("fasting_type")?;
    let fasting_type = FastingType::from_db_str(&type_str)
        .ok_or_else(|| bad_text(AppError::InvalidFastingType(type_str.clone())))?;

    let level = |col: &str| -> Result<Option<Level>> {
        match row.get::<_, Option<i32>>(col)? {
            None => Ok(None),
            Some(v) => Level::from_db_int(v)
                .map(Some)
                .ok_or_else(|| bad_text(AppError::InvalidLevel(v.to_string()))),
        }
    };

    Ok(FastingRecord {
        id: row.get("id")?,
        user_id: row.get("user_id")?,
        start_time,
        end_time,
        duration_hours: row.get("duration_hours")?,
        fasting_type,
        energy_level: level("energy_level")?,
        focus_level: level("focus_level")?,
        mood_level: level("mood_level")?,
        notes: row.get("notes")?,
        created_at: row.get("created_at")?,
    })
}

fn map_user_row(row: &Row) -> Result<User> {
    Ok(User {
        id: row.get("id")?,
        email: row.get("email")?,
        name: row.get("name")?,
        fasting_goal_hours: row.get("fasting_goal_hours")?,
        created_at: row.get("created_at")?,
    })
}

fn map_weight_row(row: &Row) -> Result<WeightRecord> {
    Ok(WeightRecord {
        id: row.get("id")?,
        user_id: row.get("user_id")?,
        weight: row.get("weight")?,
        reference_month: row.get("reference_month")?,
        created_at: row.get("created_at")?,
    })
}

// ---------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------

pub fn insert_user(conn: &Connection, email: &str, name: &str, goal_hours: f64) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO users (email, name, fasting_goal_hours, created_at)
         VALUES (?1, ?2, ?3, ?4)",
        params![email, name, goal_hours, chrono::Local::now().to_rfc3339()],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn find_user_by_email(conn: &Connection, email: &str) -> AppResult<Option<User>> {
    let mut stmt = conn.prepare("SELECT * FROM users WHERE email = ?1")?;
    Ok(stmt.query_row([email], map_user_row).optional()?)
}

pub fn list_users(conn: &Connection) -> AppResult<Vec<User>> {
    let mut stmt = conn.prepare("SELECT * FROM users ORDER BY email ASC")?;
    let rows = stmt.query_map([], map_user_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn update_user_goal(conn: &Connection, user_id: i64, goal_hours: f64) -> AppResult<()> {
    conn.execute(
        "UPDATE users SET fasting_goal_hours = ?1 WHERE id = ?2",
        params![goal_hours, user_id],
    )?;
    Ok(())
}

// ---------------------------------------------------------------------
// Fasting records
// ---------------------------------------------------------------------

/// All records for a user, newest start first (the ordering every caller
/// and listing expects).
pub fn find_by_user(conn: &Connection, user_id: i64) -> AppResult<Vec<FastingRecord>> {
    let mut stmt = conn.prepare(
        "SELECT * FROM fasting_records
         WHERE user_id = ?1
         ORDER BY start_time DESC",
    )?;
    let rows = stmt.query_map([user_id], map_fasting_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn find_open_by_user(conn: &Connection, user_id: i64) -> AppResult<Option<FastingRecord>> {
    let mut stmt = conn.prepare(
        "SELECT * FROM fasting_records
         WHERE user_id = ?1 AND end_time IS NULL",
    )?;
    Ok(stmt.query_row([user_id], map_fasting_row).optional()?)
}

pub fn find_record(conn: &Connection, user_id: i64, id: i64) -> AppResult<Option<FastingRecord>> {
    let mut stmt = conn.prepare(
        "SELECT * FROM fasting_records
         WHERE user_id = ?1 AND id = ?2",
    )?;
    Ok(stmt
        .query_row(params![user_id, id], map_fasting_row)
        .optional()?)
}

pub fn insert_record(conn: &Connection, rec: &FastingRecord) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO fasting_records
            (user_id, start_time, end_time, duration_hours, fasting_type,
             energy_level, focus_level, mood_level, notes, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
        params![
            rec.user_id,
            format_datetime(rec.start_time),
            rec.end_time.map(format_datetime),
            rec.duration_hours,
            rec.fasting_type.to_db_str(),
            rec.energy_level.map(|l| l.to_db_int()),
            rec.focus_level.map(|l| l.to_db_int()),
            rec.mood_level.map(|l| l.to_db_int()),
            rec.notes,
            rec.created_at,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Update a record (all mutable fields; id and user_id never change).
pub fn update_record(conn: &Connection, rec: &FastingRecord) -> AppResult<()> {
    conn.execute(
        "UPDATE fasting_records
         SET start_time = ?1, end_time = ?2, duration_hours = ?3,
             fasting_type = ?4, energy_level = ?5, focus_level = ?6,
             mood_level = ?7, notes = ?8
         WHERE id = ?9 AND user_id = ?10",
        params![
            format_datetime(rec.start_time),
            rec.end_time.map(format_datetime),
            rec.duration_hours,
            rec.fasting_type.to_db_str(),
            rec.energy_level.map(|l| l.to_db_int()),
            rec.focus_level.map(|l| l.to_db_int()),
            rec.mood_level.map(|l| l.to_db_int()),
            rec.notes,
            rec.id,
            rec.user_id,
        ],
    )?;
    Ok(())
}

/// Delete one record; reports how many rows went away so the caller can
/// distinguish "deleted" from "no such id".
pub fn delete_record(conn: &Connection, user_id: i64, id: i64) -> AppResult<usize> {
    let n = conn.execute(
        "DELETE FROM fasting_records WHERE id = ?1 AND user_id = ?2",
        params![id, user_id],
    )?;
    Ok(n)
}

// ---------------------------------------------------------------------
// Weight records
// ---------------------------------------------------------------------

/// Insert a monthly weight sample. A duplicate (user, month) violates the
/// UNIQUE constraint and surfaces unchanged as a database error.
pub fn insert_weight(
    conn: &Connection,
    user_id: i64,
    weight: f64,
    reference_month: &str,
) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO weight_records (user_id, weight, reference_month, created_at)
         VALUES (?1, ?2, ?3, ?4)",
        params![
            user_id,
            weight,
            reference_month,
            chrono::Local::now().to_rfc3339()
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn list_weights_by_user(conn: &Connection, user_id: i64) -> AppResult<Vec<WeightRecord>> {
    let mut stmt = conn.prepare(
        "SELECT * FROM weight_records
         WHERE user_id = ?1
         ORDER BY reference_month DESC",
    )?;
    let rows = stmt.query_map([user_id], map_weight_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
