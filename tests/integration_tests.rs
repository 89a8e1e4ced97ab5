use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{TEST_USER, add_fast, flt, init_db_with_user, setup_test_db};

#[test]
fn test_init_creates_database() {
    let db_path = setup_test_db("init");

    flt()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Database initialized"));

    assert!(std::path::Path::new(&db_path).exists());
}

#[test]
fn test_user_add_and_list() {
    let db_path = setup_test_db("user_add_list");
    init_db_with_user(&db_path);

    flt()
        .args(["--db", &db_path, "--test", "user", "list"])
        .assert()
        .success()
        .stdout(contains(TEST_USER))
        .stdout(contains("16"));
}

#[test]
fn test_user_add_duplicate_email_fails() {
    let db_path = setup_test_db("user_dup");
    init_db_with_user(&db_path);

    flt()
        .args([
            "--db",
            &db_path,
            "--test",
            "user",
            "add",
            "--email",
            TEST_USER,
            "--name",
            "Another",
        ])
        .assert()
        .failure()
        .stderr(contains("already exists"));
}

#[test]
fn test_commands_require_a_user() {
    let db_path = setup_test_db("no_user");

    flt()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    flt()
        .args(["--db", &db_path, "--test", "dashboard"])
        .assert()
        .failure()
        .stderr(contains("No user selected"));
}

#[test]
fn test_start_and_end_fast() {
    let db_path = setup_test_db("start_end");
    init_db_with_user(&db_path);

    flt()
        .args([
            "--db",
            &db_path,
            "--test",
            "--user",
            TEST_USER,
            "start",
            "--at",
            "2026-03-01 20:00",
        ])
        .assert()
        .success()
        .stdout(contains("Fast started at 2026-03-01 20:00"));

    flt()
        .args(["--db", &db_path, "--test", "--user", TEST_USER, "list", "--open"])
        .assert()
        .success()
        .stdout(contains("Active fast since 2026-03-01 20:00"));

    flt()
        .args([
            "--db",
            &db_path,
            "--test",
            "--user",
            TEST_USER,
            "end",
            "--at",
            "2026-03-02 12:00",
            "--energy",
            "3",
            "--mood",
            "2",
            "--notes",
            "felt fine",
        ])
        .assert()
        .success()
        .stdout(contains("Duration: 16.00 hours"));

    flt()
        .args(["--db", &db_path, "--test", "--user", TEST_USER, "list", "--open"])
        .assert()
        .success()
        .stdout(contains("No active fast"));
}

#[test]
fn test_cannot_start_two_fasts() {
    let db_path = setup_test_db("double_start");
    init_db_with_user(&db_path);

    flt()
        .args([
            "--db",
            &db_path,
            "--test",
            "--user",
            TEST_USER,
            "start",
            "--at",
            "2026-03-01 20:00",
        ])
        .assert()
        .success();

    flt()
        .args([
            "--db",
            &db_path,
            "--test",
            "--user",
            TEST_USER,
            "start",
            "--at",
            "2026-03-02 08:00",
        ])
        .assert()
        .failure()
        .stderr(contains("active fast"));
}

#[test]
fn test_end_without_active_fast_fails() {
    let db_path = setup_test_db("end_nothing");
    init_db_with_user(&db_path);

    flt()
        .args(["--db", &db_path, "--test", "--user", TEST_USER, "end"])
        .assert()
        .failure()
        .stderr(contains("No active fast"));
}

#[test]
fn test_end_before_start_fails() {
    let db_path = setup_test_db("end_chrono");
    init_db_with_user(&db_path);

    flt()
        .args([
            "--db",
            &db_path,
            "--test",
            "--user",
            TEST_USER,
            "start",
            "--at",
            "2026-03-01 20:00",
        ])
        .assert()
        .success();

    flt()
        .args([
            "--db",
            &db_path,
            "--test",
            "--user",
            TEST_USER,
            "end",
            "--at",
            "2026-03-01 19:00",
        ])
        .assert()
        .failure()
        .stderr(contains("End time must be later than start time"));
}

#[test]
fn test_add_rejects_overlap() {
    let db_path = setup_test_db("add_overlap");
    init_db_with_user(&db_path);

    add_fast(&db_path, "2026-03-01 10:00", "2026-03-01 18:00");

    flt()
        .args([
            "--db",
            &db_path,
            "--test",
            "--user",
            TEST_USER,
            "add",
            "2026-03-01 14:00",
            "2026-03-01 20:00",
        ])
        .assert()
        .failure()
        .stderr(contains("overlaps the fast from 2026-03-01 10:00"));
}

#[test]
fn test_add_accepts_adjacent_interval() {
    let db_path = setup_test_db("add_adjacent");
    init_db_with_user(&db_path);

    add_fast(&db_path, "2026-03-01 10:00", "2026-03-01 18:00");
    // shares only the boundary minute: half-open intervals do not collide
    add_fast(&db_path, "2026-03-01 18:00", "2026-03-01 22:00");

    flt()
        .args([
            "--db", &db_path, "--test", "--user", TEST_USER, "list", "--period", "2026-03-01",
        ])
        .assert()
        .success()
        .stdout(contains("8.00"))
        .stdout(contains("4.00"));
}

#[test]
fn test_edit_record_revalidates() {
    let db_path = setup_test_db("edit");
    init_db_with_user(&db_path);

    add_fast(&db_path, "2026-03-01 10:00", "2026-03-01 18:00");
    add_fast(&db_path, "2026-03-02 10:00", "2026-03-02 18:00");

    // shrinking the first record is fine
    flt()
        .args([
            "--db",
            &db_path,
            "--test",
            "--user",
            TEST_USER,
            "edit",
            "1",
            "--end",
            "2026-03-01 16:00",
        ])
        .assert()
        .success()
        .stdout(contains("Fast #1 updated"));

    // stretching it into the second one is not
    flt()
        .args([
            "--db",
            &db_path,
            "--test",
            "--user",
            TEST_USER,
            "edit",
            "1",
            "--end",
            "2026-03-02 12:00",
        ])
        .assert()
        .failure()
        .stderr(contains("overlaps the fast from 2026-03-02 10:00"));
}

#[test]
fn test_del_with_confirmation() {
    let db_path = setup_test_db("del");
    init_db_with_user(&db_path);

    add_fast(&db_path, "2026-03-01 10:00", "2026-03-01 18:00");

    flt()
        .args(["--db", &db_path, "--test", "--user", TEST_USER, "del", "1"])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(contains("has been deleted"));

    flt()
        .args(["--db", &db_path, "--test", "--user", TEST_USER, "list"])
        .assert()
        .success()
        .stdout(contains("No fasting records found"));
}

#[test]
fn test_del_unknown_id_fails() {
    let db_path = setup_test_db("del_unknown");
    init_db_with_user(&db_path);

    flt()
        .args(["--db", &db_path, "--test", "--user", TEST_USER, "del", "99"])
        .write_stdin("y\n")
        .assert()
        .failure()
        .stderr(contains("No fasting record with id 99"));
}

#[test]
fn test_list_period_filter() {
    let db_path = setup_test_db("list_period");
    init_db_with_user(&db_path);

    add_fast(&db_path, "2026-02-27 10:00", "2026-02-27 18:00");
    add_fast(&db_path, "2026-03-01 10:00", "2026-03-01 18:00");

    flt()
        .args([
            "--db", &db_path, "--test", "--user", TEST_USER, "list", "--period", "2026-03",
        ])
        .assert()
        .success()
        .stdout(contains("2026-03-01 10:00"))
        .stdout(
            predicates::str::is_match("2026-02-27")
                .expect("Invalid regex")
                .not(),
        );
}

#[test]
fn test_users_are_isolated() {
    let db_path = setup_test_db("user_isolation");
    init_db_with_user(&db_path);

    flt()
        .args([
            "--db",
            &db_path,
            "--test",
            "user",
            "add",
            "--email",
            "other@example.com",
            "--name",
            "Other",
        ])
        .assert()
        .success();

    add_fast(&db_path, "2026-03-01 10:00", "2026-03-01 18:00");

    // the other user's history is empty, and their own overlapping fast
    // is accepted
    flt()
        .args([
            "--db",
            &db_path,
            "--test",
            "--user",
            "other@example.com",
            "add",
            "2026-03-01 12:00",
            "2026-03-01 20:00",
        ])
        .assert()
        .success();

    flt()
        .args([
            "--db",
            &db_path,
            "--test",
            "--user",
            "other@example.com",
            "list",
        ])
        .assert()
        .success()
        .stdout(contains("12:00"))
        .stdout(
            predicates::str::is_match("10:00")
                .expect("Invalid regex")
                .not(),
        );
}

#[test]
fn test_open_fast_unique_index_backstop() {
    let db_path = setup_test_db("open_index");
    init_db_with_user(&db_path);

    flt()
        .args([
            "--db",
            &db_path,
            "--test",
            "--user",
            TEST_USER,
            "start",
            "--at",
            "2026-03-01 20:00",
        ])
        .assert()
        .success();

    // bypass the validator: a second open row must still be rejected by
    // the partial unique index
    let conn = rusqlite::Connection::open(&db_path).expect("open db");
    let result = conn.execute(
        "INSERT INTO fasting_records (user_id, start_time, fasting_type, notes, created_at)
         VALUES (1, '2026-03-02 08:00', 'intermittent', '', '2026-03-02T08:00:00+00:00')",
        [],
    );

    assert!(result.is_err(), "second open fast must violate the index");
}
