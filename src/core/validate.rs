//! Fasting interval validation.
//!
//! Pure function over an in-memory snapshot of one user's records: no DB
//! access, no clock. The command logic (start / end / add / edit) loads the
//! user's records, builds a [`Candidate`] and only writes when `validate`
//! returns Ok.

use crate::errors::ValidationError;
use crate::models::fasting::FastingRecord;
use chrono::NaiveDateTime;

/// A fasting interval about to be written.
///
/// `exclude_id` carries the record's own id in edit scenarios, so the prior
/// version of the row does not collide with itself.
#[derive(Debug, Clone)]
pub struct Candidate {
    pub start: NaiveDateTime,
    pub end: Option<NaiveDateTime>,
    pub exclude_id: Option<i64>,
}

impl Candidate {
    pub fn new(start: NaiveDateTime, end: Option<NaiveDateTime>) -> Self {
        Self {
            start,
            end,
            exclude_id: None,
        }
    }

    pub fn excluding(mut self, id: i64) -> Self {
        self.exclude_id = Some(id);
        self
    }
}

/// Validate a candidate interval against the user's existing records.
///
/// Checks run in a fixed order and the first violation wins, so the caller
/// always reports a single, specific reason:
/// 1. chronology (`end` strictly after `start` when present),
/// 2. conflicts with an open record,
/// 3. overlap with closed records (half-open semantics: `[start, end)`,
///    adjacent intervals touching at a boundary do not overlap).
///
/// The open branch uses `<=` on the starts while the closed branch is
/// strict; the asymmetry is intentional and keeps "started at the very same
/// minute as the active fast" an ActiveFastExists rejection.
pub fn validate(candidate: &Candidate, existing: &[FastingRecord]) -> Result<(), ValidationError> {
    if let Some(end) = candidate.end
        && candidate.start >= end
    {
        return Err(ValidationError::ChronologyInvalid);
    }

    let others = existing
        .iter()
        .filter(|r| Some(r.id) != candidate.exclude_id);

    for record in others.clone() {
        if record.end_time.is_none() {
            if candidate.start <= record.start_time {
                return Err(ValidationError::ActiveFastExists);
            }
            if let Some(end) = candidate.end
                && end > record.start_time
            {
                return Err(ValidationError::OverlapsActiveFast(record.start_time));
            }
        }
    }

    for record in others {
        if let Some(rec_end) = record.end_time {
            let overlaps = candidate.start < rec_end
                && match candidate.end {
                    None => true,
                    Some(end) => end > record.start_time,
                };
            if overlaps {
                return Err(ValidationError::OverlapsClosedInterval {
                    start: record.start_time,
                    end: rec_end,
                });
            }
        }
    }

    Ok(())
}

/// Duration of a closed interval in hours, rounded to 2 decimals.
/// Computed by the caller once validation passes; open records keep None.
pub fn duration_hours(start: NaiveDateTime, end: NaiveDateTime) -> f64 {
    let secs = (end - start).num_seconds() as f64;
    (secs / 3600.0 * 100.0).round() / 100.0
}
