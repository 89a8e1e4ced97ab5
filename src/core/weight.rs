use crate::db::pool::DbPool;
use crate::db::queries::{insert_weight, list_weights_by_user};
use crate::errors::{AppError, AppResult};
use crate::models::user::User;
use crate::models::weight::WeightRecord;
use crate::utils::date;

/// High-level business logic for the `weight` command.
pub struct WeightLogic;

impl WeightLogic {
    /// Record the weight for a month (default: the current one). One
    /// sample per (user, month): a duplicate violates the store's UNIQUE
    /// constraint, which surfaces unchanged.
    pub fn add(
        pool: &mut DbPool,
        user: &User,
        weight: f64,
        month: Option<String>,
    ) -> AppResult<String> {
        if weight <= 0.0 {
            return Err(AppError::InvalidWeight(weight));
        }

        let reference_month = match month {
            Some(m) => date::parse_month(&m)?,
            None => date::current_month(),
        };

        insert_weight(&pool.conn, user.id, weight, &reference_month)?;

        crate::db::log::ttlog(
            &pool.conn,
            "weight",
            &user.email,
            &format!("Recorded {weight} kg for {reference_month}"),
        )?;

        Ok(reference_month)
    }

    pub fn list(pool: &mut DbPool, user: &User) -> AppResult<Vec<WeightRecord>> {
        list_weights_by_user(&pool.conn, user.id)
    }
}
