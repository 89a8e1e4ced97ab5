use serde::Serialize;

/// Monthly weight sample. Unique per (user, reference_month); the DB
/// constraint is the source of truth, violations surface to the caller.
#[derive(Debug, Clone, Serialize)]
pub struct WeightRecord {
    pub id: i64,
    pub user_id: i64,
    pub weight: f64,           // kg, > 0
    pub reference_month: String, // "YYYY-MM"
    pub created_at: String,    // ISO 8601
}
