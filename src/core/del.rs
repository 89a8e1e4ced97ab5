use crate::db::pool::DbPool;
use crate::db::queries::delete_record;
use crate::errors::{AppError, AppResult};
use crate::models::user::User;

/// High-level business logic for the `del` command.
pub struct DeleteLogic;

impl DeleteLogic {
    /// Delete one fasting record by id. Deletion only happens through
    /// this explicit user action.
    pub fn apply(pool: &mut DbPool, user: &User, id: i64) -> AppResult<()> {
        let deleted = delete_record(&pool.conn, user.id, id)?;

        if deleted == 0 {
            return Err(AppError::RecordNotFound(id));
        }

        crate::db::log::ttlog(
            &pool.conn,
            "del",
            &user.email,
            &format!("Deleted fast #{id}"),
        )?;

        Ok(())
    }
}
