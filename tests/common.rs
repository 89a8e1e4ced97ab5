#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub const TEST_USER: &str = "test@example.com";

pub fn flt() -> Command {
    cargo_bin_cmd!("fastlife")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_fastlife.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize DB and create the default test user
pub fn init_db_with_user(db_path: &str) {
    // init DB (creates tables)
    flt()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    flt()
        .args([
            "--db",
            db_path,
            "--test",
            "user",
            "add",
            "--email",
            TEST_USER,
            "--name",
            "Test User",
            "--goal",
            "16",
        ])
        .assert()
        .success();
}

/// Backfill one completed fast via the CLI
pub fn add_fast(db_path: &str, start: &str, end: &str) {
    flt()
        .args([
            "--db", db_path, "--test", "--user", TEST_USER, "add", start, end,
        ])
        .assert()
        .success();
}
