use crate::core::validate::{Candidate, validate};
use crate::db::pool::DbPool;
use crate::db::queries::{find_by_user, insert_record};
use crate::errors::AppResult;
use crate::models::fasting::FastingRecord;
use crate::models::fasting_type::FastingType;
use crate::models::user::User;
use chrono::NaiveDateTime;

/// High-level business logic for the `start` command.
pub struct StartLogic;

impl StartLogic {
    /// Open a new fast for the user at `start`.
    ///
    /// The validator rejects a second open fast and any overlap with
    /// history; the partial unique index on open records backstops the
    /// race between two concurrent starts.
    pub fn apply(
        pool: &mut DbPool,
        user: &User,
        start: NaiveDateTime,
        fasting_type: FastingType,
    ) -> AppResult<FastingRecord> {
        let existing = find_by_user(&pool.conn, user.id)?;

        validate(&Candidate::new(start, None), &existing)?;

        let mut rec = FastingRecord::new(user.id, start, None, fasting_type, String::new());
        rec.id = insert_record(&pool.conn, &rec)?;

        crate::db::log::ttlog(
            &pool.conn,
            "start",
            &user.email,
            &format!("Started fast at {}", rec.start_str()),
        )?;

        Ok(rec)
    }
}
