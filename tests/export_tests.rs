use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{TEST_USER, add_fast, flt, init_db_with_user, setup_test_db, temp_out};

fn export(db_path: &str, extra: &[&str]) -> assert_cmd::Command {
    let mut cmd = flt();
    cmd.args(["--db", db_path, "--test", "--user", TEST_USER, "export"]);
    cmd.args(extra);
    cmd
}

#[test]
fn test_export_csv_all() {
    let db_path = setup_test_db("export_csv_all");
    let out = temp_out("export_csv_all", "csv");
    init_db_with_user(&db_path);

    add_fast(&db_path, "2026-03-01 10:00", "2026-03-01 18:00");
    add_fast(&db_path, "2026-03-02 10:00", "2026-03-02 18:00");

    export(&db_path, &["--format", "csv", "--file", &out])
        .assert()
        .success()
        .stdout(contains("csv export completed"));

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.contains("start_time"), "header row expected");
    assert!(content.contains("2026-03-01 10:00"));
    assert!(content.contains("2026-03-02 10:00"));
}

#[test]
fn test_export_json_range_filters_rows() {
    let db_path = setup_test_db("export_json_range");
    let out = temp_out("export_json_range", "json");
    init_db_with_user(&db_path);

    add_fast(&db_path, "2026-02-27 10:00", "2026-02-27 18:00");
    add_fast(&db_path, "2026-03-01 10:00", "2026-03-01 18:00");

    export(
        &db_path,
        &["--format", "json", "--file", &out, "--range", "2026-03"],
    )
    .assert()
    .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    assert!(content.contains("2026-03-01 10:00"));
    assert!(!content.contains("2026-02-27"));

    let parsed: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    assert_eq!(parsed.as_array().map(|a| a.len()), Some(1));
}

#[test]
fn test_export_requires_absolute_path() {
    let db_path = setup_test_db("export_relative");
    init_db_with_user(&db_path);

    add_fast(&db_path, "2026-03-01 10:00", "2026-03-01 18:00");

    export(&db_path, &["--format", "csv", "--file", "relative.csv"])
        .assert()
        .failure()
        .stderr(contains("must be absolute"));
}

#[test]
fn test_export_refuses_overwrite_without_force() {
    let db_path = setup_test_db("export_force");
    let out = temp_out("export_force", "csv");
    init_db_with_user(&db_path);

    add_fast(&db_path, "2026-03-01 10:00", "2026-03-01 18:00");

    fs::write(&out, "keep me").expect("create existing file");

    export(&db_path, &["--format", "csv", "--file", &out])
        .assert()
        .failure()
        .stderr(contains("use --force"));

    export(&db_path, &["--format", "csv", "--file", &out, "--force"])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.contains("2026-03-01 10:00"));
}

#[test]
fn test_export_weights() {
    let db_path = setup_test_db("export_weights");
    let out = temp_out("export_weights", "csv");
    init_db_with_user(&db_path);

    flt()
        .args([
            "--db", &db_path, "--test", "--user", TEST_USER, "weight", "add", "75.5",
            "--month", "2026-01",
        ])
        .assert()
        .success();

    export(&db_path, &["--format", "csv", "--file", &out, "--weights"])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.contains("2026-01"));
    assert!(content.contains("75.5"));
}

#[test]
fn test_export_empty_range_writes_nothing() {
    let db_path = setup_test_db("export_empty");
    let out = temp_out("export_empty", "csv");
    init_db_with_user(&db_path);

    add_fast(&db_path, "2026-03-01 10:00", "2026-03-01 18:00");

    export(
        &db_path,
        &["--format", "csv", "--file", &out, "--range", "2025"],
    )
    .assert()
    .success()
    .stdout(contains("No fasting records found").or(contains("No fasting records")));

    assert!(!std::path::Path::new(&out).exists());
}
