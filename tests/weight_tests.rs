use predicates::str::contains;

mod common;
use common::{TEST_USER, flt, init_db_with_user, setup_test_db};

fn weight_add(db_path: &str, weight: &str, month: &str) -> assert_cmd::Command {
    let mut cmd = flt();
    cmd.args([
        "--db", db_path, "--test", "--user", TEST_USER, "weight", "add", weight, "--month",
        month,
    ]);
    cmd
}

#[test]
fn test_weight_add_and_list() {
    let db_path = setup_test_db("weight_add");
    init_db_with_user(&db_path);

    weight_add(&db_path, "75.5", "2026-01").assert().success();
    weight_add(&db_path, "74.8", "2026-02").assert().success();

    flt()
        .args(["--db", &db_path, "--test", "--user", TEST_USER, "weight", "list"])
        .assert()
        .success()
        .stdout(contains("2026-01"))
        .stdout(contains("75.5"))
        .stdout(contains("2026-02"))
        .stdout(contains("74.8"));
}

#[test]
fn test_weight_duplicate_month_violates_constraint() {
    let db_path = setup_test_db("weight_dup");
    init_db_with_user(&db_path);

    weight_add(&db_path, "75.5", "2026-01").assert().success();

    // the (user, month) uniqueness lives in the store; the violation
    // surfaces unchanged
    weight_add(&db_path, "76.0", "2026-01")
        .assert()
        .failure()
        .stderr(contains("UNIQUE constraint failed"));
}

#[test]
fn test_weight_must_be_positive() {
    let db_path = setup_test_db("weight_zero");
    init_db_with_user(&db_path);

    weight_add(&db_path, "0", "2026-01")
        .assert()
        .failure()
        .stderr(contains("must be greater than zero"));
}

#[test]
fn test_weight_rejects_bad_month() {
    let db_path = setup_test_db("weight_month");
    init_db_with_user(&db_path);

    weight_add(&db_path, "75.5", "2026-13")
        .assert()
        .failure()
        .stderr(contains("Invalid reference month"));
}

#[test]
fn test_same_month_allowed_for_different_users() {
    let db_path = setup_test_db("weight_two_users");
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

    weight_add(&db_path, "75.5", "2026-01").assert().success();

    flt()
        .args([
            "--db",
            &db_path,
            "--test",
            "--user",
            "other@example.com",
            "weight",
            "add",
            "80.0",
            "--month",
            "2026-01",
        ])
        .assert()
        .success();
}
