use serde::Serialize;

/// Flat fasting row shape shared by the CSV and JSON writers.
#[derive(Debug, Clone, Serialize)]
pub struct FastingExport {
    pub id: i64,
    pub start_time: String,
    pub end_time: String, // empty while the fast is open
    pub duration_hours: Option<f64>,
    pub fasting_type: String,
    pub energy_level: Option<i32>,
    pub focus_level: Option<i32>,
    pub mood_level: Option<i32>,
    pub notes: String,
}

/// Flat weight row shape for `--weights` exports.
#[derive(Debug, Clone, Serialize)]
pub struct WeightExport {
    pub reference_month: String,
    pub weight: f64,
}
