use serde::Serialize;

/// An account owning fasting and weight records.
///
/// `fasting_goal_hours` is the daily target the streak calculation is
/// measured against; the schema guarantees it is positive.
#[derive(Debug, Clone, Serialize)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub name: String,
    pub fasting_goal_hours: f64,
    pub created_at: String, // ISO 8601
}
