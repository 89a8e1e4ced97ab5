//! Consecutive-day goal streak.

use crate::models::fasting::FastingRecord;
use chrono::NaiveDate;

/// Streaks saturate here: a longer run still reports 365.
pub const MAX_STREAK_DAYS: u32 = 365;

/// Number of consecutive calendar days, walking backward from `today`, on
/// which the summed duration of completed fasts met the user's goal.
///
/// A fast counts toward the day its `start_time` falls on. Open records
/// contribute nothing. A day with no completed fasts totals 0 hours, which
/// ends the streak (the goal is positive by invariant). Returns 0 when
/// today is already below goal.
///
/// `today` is passed in rather than read from the clock so the calculation
/// stays a pure function of its inputs.
pub fn calculate_streak(goal_hours: f64, records: &[FastingRecord], today: NaiveDate) -> u32 {
    let mut streak = 0;
    let mut current_date = today;

    while streak < MAX_STREAK_DAYS {
        let total_hours: f64 = records
            .iter()
            .filter(|r| r.end_time.is_some() && r.start_date() == current_date)
            .filter_map(|r| r.duration_hours)
            .sum();

        if total_hours < goal_hours {
            break;
        }

        streak += 1;
        match current_date.pred_opt() {
            Some(d) => current_date = d,
            None => break, // ran out of calendar
        }
    }

    streak
}

/// Total completed hours attributed to a single calendar day.
pub fn hours_for_day(records: &[FastingRecord], day: NaiveDate) -> f64 {
    records
        .iter()
        .filter(|r| r.end_time.is_some() && r.start_date() == day)
        .filter_map(|r| r.duration_hours)
        .sum()
}
