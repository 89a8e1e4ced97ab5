use super::{fasting_type::FastingType, level::Level};
use chrono::{Local, NaiveDate, NaiveDateTime};
use serde::Serialize;

/// A single fasting session.
///
/// `end_time == None` means the fast is still open (in progress); in that
/// case `duration_hours` is also `None`. A closed record occupies the
/// half-open interval `[start_time, end_time)`.
#[derive(Debug, Clone, Serialize)]
pub struct FastingRecord {
    pub id: i64,
    pub user_id: i64,
    pub start_time: NaiveDateTime, // ⇔ fasting_records.start_time (TEXT "YYYY-MM-DD HH:MM")
    pub end_time: Option<NaiveDateTime>, // ⇔ fasting_records.end_time (TEXT, NULL while open)
    pub duration_hours: Option<f64>, // derived: (end-start) in hours, 2 decimals
    pub fasting_type: FastingType, // ⇔ fasting_records.fasting_type
    pub energy_level: Option<Level>, // annotations, set when the fast ends
    pub focus_level: Option<Level>,
    pub mood_level: Option<Level>,
    pub notes: String,
    pub created_at: String, // ISO 8601
}

impl FastingRecord {
    /// High-level constructor for records created from the CLI.
    /// - `id = 0` until the row is inserted
    /// - `duration_hours` is left unset; the command logic computes it
    ///   once the candidate passes validation
    pub fn new(
        user_id: i64,
        start_time: NaiveDateTime,
        end_time: Option<NaiveDateTime>,
        fasting_type: FastingType,
        notes: String,
    ) -> Self {
        Self {
            id: 0,
            user_id,
            start_time,
            end_time,
            duration_hours: None,
            fasting_type,
            energy_level: None,
            focus_level: None,
            mood_level: None,
            notes,
            created_at: Local::now().to_rfc3339(),
        }
    }

    pub fn is_open(&self) -> bool {
        self.end_time.is_none()
    }

    /// Calendar day the fast started on. Streaks are attributed to this
    /// date, not the end date.
    pub fn start_date(&self) -> NaiveDate {
        self.start_time.date()
    }

    pub fn start_str(&self) -> String {
        self.start_time.format("%Y-%m-%d %H:%M").to_string()
    }

    pub fn end_str(&self) -> String {
        match self.end_time {
            Some(t) => t.format("%Y-%m-%d %H:%M").to_string(),
            None => "--".to_string(),
        }
    }
}
