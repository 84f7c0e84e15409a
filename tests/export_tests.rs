use predicates::str::contains;
use std::fs;

mod common;
use common::{init_db_with_demo, setup_test_db, temp_out, wl};

#[test]
fn test_export_csv_writes_normalized_rows() {
    let db_path = setup_test_db("export_csv");
    init_db_with_demo(&db_path);

    let out = temp_out("export_csv", "csv");

    wl().args(["--db", &db_path, "export", "--format", "csv", "--file", &out])
        .assert()
        .success()
        .stdout(contains("CSV export completed"));

    let content = fs::read_to_string(&out).expect("read export file");
    assert!(content.starts_with("id,date,owner,role,project,title,details,status"));
    assert!(content.contains("已完成"));
    assert!(content.contains("58000"));
    assert!(content.contains("2025-06-21T00:00:00Z"));
}

#[test]
fn test_export_json_respects_filters() {
    let db_path = setup_test_db("export_json");
    init_db_with_demo(&db_path);

    let out = temp_out("export_json", "json");

    wl().args([
        "--db", &db_path, "export", "--format", "json", "--file", &out, "--status", "已完成",
    ])
    .assert()
    .success()
    .stdout(contains("JSON export completed"));

    let content = fs::read_to_string(&out).expect("read export file");
    assert!(content.contains("Reels 腳本：拆封即鮮 × 雙層魚子專利"));
    assert!(!content.contains("聯名活動頁"));
    assert!(content.contains("\"reach\": 58000"));
}

#[test]
fn test_export_refuses_overwrite_without_force() {
    let db_path = setup_test_db("export_noforce");
    init_db_with_demo(&db_path);

    let out = temp_out("export_noforce", "csv");
    fs::write(&out, "existing").expect("pre-create file");

    // stdin is closed → the overwrite prompt reads no confirmation
    wl().args(["--db", &db_path, "export", "--format", "csv", "--file", &out])
        .assert()
        .failure();

    assert_eq!(fs::read_to_string(&out).expect("file intact"), "existing");
}

#[test]
fn test_export_overwrites_with_force() {
    let db_path = setup_test_db("export_force");
    init_db_with_demo(&db_path);

    let out = temp_out("export_force", "csv");
    fs::write(&out, "existing").expect("pre-create file");

    wl().args([
        "--db", &db_path, "export", "--format", "csv", "--file", &out, "--force",
    ])
    .assert()
    .success();

    let content = fs::read_to_string(&out).expect("read export file");
    assert!(content.contains("Reels"));
}

#[test]
fn test_export_unknown_status_fails_before_writing() {
    let db_path = setup_test_db("export_bad_status");
    init_db_with_demo(&db_path);

    let out = temp_out("export_bad_status", "csv");

    wl().args([
        "--db", &db_path, "export", "--format", "csv", "--file", &out, "--status", "完了",
    ])
    .assert()
    .failure()
    .stderr(contains("Unknown status label"));

    assert!(!std::path::Path::new(&out).exists());
}
