use chrono::{Duration, Local};
use predicates::str::contains;

mod common;
use common::{TEST_USER, add_fast, flt, init_db_with_user, setup_test_db};

/// Seed a completed 16.5 h fast inside the given day (offset days back
/// from today), so the calendar day never shifts under the test.
fn seed_goal_day(db_path: &str, offset_back: i64) {
    let day = Local::now().date_naive() - Duration::days(offset_back);
    let start = format!("{} 00:10", day.format("%Y-%m-%d"));
    let end = format!("{} 16:40", day.format("%Y-%m-%d"));
    add_fast(db_path, &start, &end);
}

#[test]
fn test_dashboard_streak_counts_consecutive_goal_days() {
    let db_path = setup_test_db("dashboard_streak");
    init_db_with_user(&db_path);

    seed_goal_day(&db_path, 0);
    seed_goal_day(&db_path, 1);
    // day 2 left empty → streak stops at 2

    flt()
        .args(["--db", &db_path, "--test", "--user", TEST_USER, "dashboard"])
        .assert()
        .success()
        .stdout(contains("Streak:            2 day(s)"))
        .stdout(contains("Goal:              16 h/day"));
}

#[test]
fn test_dashboard_streak_zero_without_today() {
    let db_path = setup_test_db("dashboard_zero");
    init_db_with_user(&db_path);

    // only the day before yesterday qualifies
    seed_goal_day(&db_path, 2);

    flt()
        .args(["--db", &db_path, "--test", "--user", TEST_USER, "dashboard"])
        .assert()
        .success()
        .stdout(contains("Streak:            0 day(s)"));
}

#[test]
fn test_dashboard_shows_active_fast() {
    let db_path = setup_test_db("dashboard_active");
    init_db_with_user(&db_path);

    let start = format!(
        "{} 00:05",
        Local::now().date_naive().format("%Y-%m-%d")
    );

    flt()
        .args([
            "--db", &db_path, "--test", "--user", TEST_USER, "start", "--at", &start,
        ])
        .assert()
        .success();

    flt()
        .args(["--db", &db_path, "--test", "--user", TEST_USER, "dashboard"])
        .assert()
        .success()
        .stdout(contains("Active fast since"));
}

#[test]
fn test_lowering_the_goal_extends_the_streak() {
    let db_path = setup_test_db("dashboard_goal");
    init_db_with_user(&db_path);

    // 8.5 h fast today: misses the default 16 h goal...
    let day = Local::now().date_naive();
    let start = format!("{} 00:10", day.format("%Y-%m-%d"));
    let end = format!("{} 08:40", day.format("%Y-%m-%d"));
    add_fast(&db_path, &start, &end);

    flt()
        .args(["--db", &db_path, "--test", "--user", TEST_USER, "dashboard"])
        .assert()
        .success()
        .stdout(contains("Streak:            0 day(s)"));

    // ...but counts once the goal drops to 8
    flt()
        .args([
            "--db", &db_path, "--test", "--user", TEST_USER, "user", "goal", "8",
        ])
        .assert()
        .success();

    flt()
        .args(["--db", &db_path, "--test", "--user", TEST_USER, "dashboard"])
        .assert()
        .success()
        .stdout(contains("Streak:            1 day(s)"))
        .stdout(contains("Goal:              8 h/day"));
}

#[test]
fn test_dashboard_average_over_last_seven_days() {
    let db_path = setup_test_db("dashboard_avg");
    init_db_with_user(&db_path);

    // two completed fasts of 16.5 h each → average 16h 30m
    seed_goal_day(&db_path, 0);
    seed_goal_day(&db_path, 1);

    flt()
        .args(["--db", &db_path, "--test", "--user", TEST_USER, "dashboard"])
        .assert()
        .success()
        .stdout(contains("16h 30m"))
        .stdout(contains("Fasts at goal:     2"));
}
