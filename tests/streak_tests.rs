//! Streak calculation tests, driven through the library.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use fastlife::core::streak::{MAX_STREAK_DAYS, calculate_streak};
use fastlife::core::validate::duration_hours;
use fastlife::models::fasting::FastingRecord;
use fastlife::models::fasting_type::FastingType;

const GOAL: f64 = 16.0;

fn day(offset_back: i64) -> NaiveDate {
    today() - Duration::days(offset_back)
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 6, 15).expect("valid date")
}

/// A completed fast starting on `date` at 20:00 and lasting `hours`.
fn fast_on(date: NaiveDate, hours: f64) -> FastingRecord {
    let start: NaiveDateTime = date.and_hms_opt(20, 0, 0).expect("valid time");
    let end = start + Duration::minutes((hours * 60.0) as i64);

    let mut rec = FastingRecord::new(1, start, Some(end), FastingType::Intermittent, String::new());
    rec.duration_hours = Some(duration_hours(start, end));
    rec
}

/// A fast still in progress, started on `date`.
fn open_on(date: NaiveDate) -> FastingRecord {
    let start = date.and_hms_opt(20, 0, 0).expect("valid time");
    FastingRecord::new(1, start, None, FastingType::Intermittent, String::new())
}

#[test]
fn five_qualifying_days_give_streak_five() {
    let records: Vec<FastingRecord> = (0..5).map(|i| fast_on(day(i), 16.0)).collect();

    assert_eq!(calculate_streak(GOAL, &records, today()), 5);
}

#[test]
fn streak_is_zero_when_today_misses_goal() {
    let records = vec![fast_on(today(), 3.0)];

    assert_eq!(calculate_streak(GOAL, &records, today()), 0);
}

#[test]
fn streak_is_zero_with_no_records() {
    assert_eq!(calculate_streak(GOAL, &[], today()), 0);
}

#[test]
fn sub_goal_day_breaks_the_streak() {
    // today and yesterday at goal, the day before only 3 hours
    let records = vec![
        fast_on(day(0), 16.5),
        fast_on(day(1), 16.0),
        fast_on(day(2), 3.0),
        fast_on(day(3), 16.0),
    ];

    assert_eq!(calculate_streak(GOAL, &records, today()), 2);
}

#[test]
fn missing_day_breaks_the_streak() {
    // a hole at day 2: zero hours fails the threshold
    let records = vec![fast_on(day(0), 16.0), fast_on(day(1), 16.0), fast_on(day(3), 16.0)];

    assert_eq!(calculate_streak(GOAL, &records, today()), 2);
}

#[test]
fn multiple_fasts_on_one_day_are_summed() {
    let records = vec![
        fast_on(day(0), 16.0),
        // two short fasts that only together reach the goal
        fast_on(day(1), 9.0),
        {
            let start = day(1).and_hms_opt(6, 0, 0).expect("valid time");
            let end = start + Duration::hours(8);
            let mut rec = FastingRecord::new(
                1,
                start,
                Some(end),
                FastingType::Intermittent,
                String::new(),
            );
            rec.duration_hours = Some(duration_hours(start, end));
            rec
        },
    ];

    assert_eq!(calculate_streak(GOAL, &records, today()), 2);
}

#[test]
fn open_fasts_contribute_nothing() {
    let records = vec![open_on(day(0))];

    assert_eq!(calculate_streak(GOAL, &records, today()), 0);
}

#[test]
fn fast_counts_toward_its_start_day_not_its_end_day() {
    // starts yesterday 20:00, ends today 12:00 → attributed to yesterday
    let records = vec![fast_on(day(1), 16.0)];

    assert_eq!(calculate_streak(GOAL, &records, today()), 0);
}

#[test]
fn streak_saturates_at_365() {
    let records: Vec<FastingRecord> = (0..400).map(|i| fast_on(day(i), 16.0)).collect();

    assert_eq!(calculate_streak(GOAL, &records, today()), MAX_STREAK_DAYS);
}
