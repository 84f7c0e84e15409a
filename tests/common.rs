#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn wl() -> Command {
    cargo_bin_cmd!("worklogger")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_worklogger.sqlite", name));
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

/// Initialize schema on a fresh test DB
pub fn init_db(db_path: &str) {
    wl().args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Initialize and load the fixed demo dataset (3 worklog rows)
pub fn init_db_with_demo(db_path: &str) {
    init_db(db_path);

    wl().args(["--db", db_path, "--test", "seed", "--demo"])
        .assert()
        .success();
}

/// Add one minimal marketing entry via the CLI
pub fn add_entry(db_path: &str, date: &str, owner: &str, title: &str, status: &str) {
    wl().args([
        "--db", db_path, "--test", "add", date, "--owner", owner, "--role", "行銷", "--title",
        title, "--status", status,
    ])
    .assert()
    .success();
}
