//! Dashboard aggregates.
//!
//! Everything here is computed from an in-memory snapshot of one user's
//! records; the caller decides what "now" is.

use crate::core::streak::{calculate_streak, hours_for_day};
use crate::models::fasting::FastingRecord;
use chrono::{Duration, NaiveDate, NaiveDateTime};
use serde::Serialize;

/// Completed hours attributed to one calendar day, for the 7-day chart.
#[derive(Debug, Clone, Serialize)]
pub struct DayTotal {
    pub date: NaiveDate,
    pub hours: f64,
}

#[derive(Debug, Clone)]
pub struct DashboardSummary {
    pub active_fast: Option<FastingRecord>,
    /// Average duration of fasts completed in the last 7 days.
    pub avg_duration: f64,
    /// Fasts completed in the last 7 days that individually met the goal.
    pub goal_hits: u32,
    pub streak: u32,
    /// Oldest day first, today last.
    pub chart: Vec<DayTotal>,
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

pub fn build_dashboard(
    goal_hours: f64,
    records: &[FastingRecord],
    now: NaiveDateTime,
) -> DashboardSummary {
    let active_fast = records.iter().find(|r| r.is_open()).cloned();

    let seven_days_ago = now - Duration::days(7);
    let recent: Vec<&FastingRecord> = records
        .iter()
        .filter(|r| r.end_time.is_some() && r.start_time >= seven_days_ago)
        .collect();

    let avg_duration = if recent.is_empty() {
        0.0
    } else {
        let total: f64 = recent.iter().filter_map(|r| r.duration_hours).sum();
        round2(total / recent.len() as f64)
    };

    let goal_hits = recent
        .iter()
        .filter(|r| r.duration_hours.is_some_and(|d| d >= goal_hours))
        .count() as u32;

    let streak = calculate_streak(goal_hours, records, now.date());

    let mut chart = Vec::with_capacity(7);
    for i in (0..7).rev() {
        let day = now.date() - Duration::days(i);
        chart.push(DayTotal {
            date: day,
            hours: round2(hours_for_day(records, day)),
        });
    }

    DashboardSummary {
        active_fast,
        avg_duration,
        goal_hits,
        streak,
        chart,
    }
}
