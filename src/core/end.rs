use crate::core::validate::{Candidate, duration_hours, validate};
use crate::db::pool::DbPool;
use crate::db::queries::{find_by_user, find_open_by_user, update_record};
use crate::errors::{AppError, AppResult};
use crate::models::fasting::FastingRecord;
use crate::models::level::Level;
use crate::models::user::User;
use chrono::NaiveDateTime;

/// High-level business logic for the `end` command.
pub struct EndLogic;

impl EndLogic {
    /// Close the user's active fast at `end`, attaching the optional
    /// wellbeing annotations. These annotation fields are the only thing
    /// that can still change once a record is closed (via `edit`).
    pub fn apply(
        pool: &mut DbPool,
        user: &User,
        end: NaiveDateTime,
        energy: Option<Level>,
        focus: Option<Level>,
        mood: Option<Level>,
        notes: Option<String>,
    ) -> AppResult<FastingRecord> {
        let mut open = find_open_by_user(&pool.conn, user.id)?.ok_or(AppError::NoActiveFast)?;

        let existing = find_by_user(&pool.conn, user.id)?;
        let candidate = Candidate::new(open.start_time, Some(end)).excluding(open.id);
        validate(&candidate, &existing)?;

        open.end_time = Some(end);
        open.duration_hours = Some(duration_hours(open.start_time, end));

        if energy.is_some() {
            open.energy_level = energy;
        }
        if focus.is_some() {
            open.focus_level = focus;
        }
        if mood.is_some() {
            open.mood_level = mood;
        }
        if let Some(n) = notes {
            open.notes = n;
        }

        update_record(&pool.conn, &open)?;

        crate::db::log::ttlog(
            &pool.conn,
            "end",
            &user.email,
            &format!(
                "Ended fast {} → {} ({:.2} h)",
                open.start_str(),
                open.end_str(),
                open.duration_hours.unwrap_or(0.0)
            ),
        )?;

        Ok(open)
    }
}
