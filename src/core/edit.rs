use crate::core::validate::{Candidate, duration_hours, validate};
use crate::db::pool::DbPool;
use crate::db::queries::{find_by_user, find_record, update_record};
use crate::errors::{AppError, AppResult};
use crate::models::fasting::FastingRecord;
use crate::models::fasting_type::FastingType;
use crate::models::level::Level;
use crate::models::user::User;
use chrono::NaiveDateTime;

/// Fields an `edit` may change. `None` leaves the stored value alone.
#[derive(Debug, Default)]
pub struct EditPatch {
    pub start: Option<NaiveDateTime>,
    pub end: Option<NaiveDateTime>,
    pub fasting_type: Option<FastingType>,
    pub energy: Option<Level>,
    pub focus: Option<Level>,
    pub mood: Option<Level>,
    pub notes: Option<String>,
}

/// High-level business logic for the `edit` command.
pub struct EditLogic;

impl EditLogic {
    /// Patch an existing record. Bound changes re-validate against the
    /// user's other records with the record's own id excluded, so a
    /// record never collides with its prior version.
    pub fn apply(
        pool: &mut DbPool,
        user: &User,
        id: i64,
        patch: EditPatch,
    ) -> AppResult<FastingRecord> {
        let mut rec =
            find_record(&pool.conn, user.id, id)?.ok_or(AppError::RecordNotFound(id))?;

        if let Some(start) = patch.start {
            rec.start_time = start;
        }
        if let Some(end) = patch.end {
            rec.end_time = Some(end);
        }

        let candidate = Candidate::new(rec.start_time, rec.end_time).excluding(rec.id);
        let existing = find_by_user(&pool.conn, user.id)?;
        validate(&candidate, &existing)?;

        rec.duration_hours = rec.end_time.map(|end| duration_hours(rec.start_time, end));

        if let Some(t) = patch.fasting_type {
            rec.fasting_type = t;
        }
        if patch.energy.is_some() {
            rec.energy_level = patch.energy;
        }
        if patch.focus.is_some() {
            rec.focus_level = patch.focus;
        }
        if patch.mood.is_some() {
            rec.mood_level = patch.mood;
        }
        if let Some(n) = patch.notes {
            rec.notes = n;
        }

        update_record(&pool.conn, &rec)?;

        crate::db::log::ttlog(
            &pool.conn,
            "edit",
            &user.email,
            &format!("Edited fast #{id}"),
        )?;

        Ok(rec)
    }
}
