use crate::core::validate::{Candidate, duration_hours, validate};
use crate::db::pool::DbPool;
use crate::db::queries::{find_by_user, insert_record};
use crate::errors::AppResult;
use crate::models::fasting::FastingRecord;
use crate::models::fasting_type::FastingType;
use crate::models::user::User;
use chrono::NaiveDateTime;

/// High-level business logic for the `add` command (backfilling a
/// completed fast).
pub struct AddLogic;

impl AddLogic {
    pub fn apply(
        pool: &mut DbPool,
        user: &User,
        start: NaiveDateTime,
        end: NaiveDateTime,
        fasting_type: FastingType,
        notes: Option<String>,
    ) -> AppResult<FastingRecord> {
        let existing = find_by_user(&pool.conn, user.id)?;

        validate(&Candidate::new(start, Some(end)), &existing)?;

        let mut rec = FastingRecord::new(
            user.id,
            start,
            Some(end),
            fasting_type,
            notes.unwrap_or_default(),
        );
        rec.duration_hours = Some(duration_hours(start, end));
        rec.id = insert_record(&pool.conn, &rec)?;

        crate::db::log::ttlog(
            &pool.conn,
            "add",
            &user.email,
            &format!("Added fast {} → {}", rec.start_str(), rec.end_str()),
        )?;

        Ok(rec)
    }
}
