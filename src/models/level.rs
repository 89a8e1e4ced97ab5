use serde::Serialize;

/// Self-reported wellbeing score (energy, focus, mood) recorded when a
/// fast is closed. Stored as 1..=3 in the DB.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Level {
    Low,    // 1
    Medium, // 2
    High,   // 3
}

impl Level {
    pub fn to_db_int(&self) -> i32 {
        match self {
            Level::Low => 1,
            Level::Medium => 2,
            Level::High => 3,
        }
    }

    pub fn from_db_int(v: i32) -> Option<Self> {
        match v {
            1 => Some(Level::Low),
            2 => Some(Level::Medium),
            3 => Some(Level::High),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Level::Low => "Low",
            Level::Medium => "Medium",
            Level::High => "High",
        }
    }
}
