use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FastingType {
    Intermittent,
    Extended,
    Other,
}

impl FastingType {
    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            FastingType::Intermittent => "intermittent",
            FastingType::Extended => "extended",
            FastingType::Other => "other",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "intermittent" => Some(FastingType::Intermittent),
            "extended" => Some(FastingType::Extended),
            "other" => Some(FastingType::Other),
            _ => None,
        }
    }

    /// Helper: convert input code from CLI (case-insensitive)
    pub fn from_code(code: &str) -> Option<Self> {
        FastingType::from_db_str(&code.to_lowercase())
    }

    pub fn label(&self) -> &'static str {
        match self {
            FastingType::Intermittent => "Intermittent",
            FastingType::Extended => "Extended",
            FastingType::Other => "Other",
        }
    }
}
