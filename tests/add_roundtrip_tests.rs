use predicates::str::contains;

mod common;
use common::{init_db, setup_test_db, wl};

#[test]
fn test_add_then_list_round_trip() {
    let db_path = setup_test_db("roundtrip");
    init_db(&db_path);

    wl().args([
        "--db",
        &db_path,
        "--test",
        "add",
        "2025-07-01",
        "--owner",
        "Mia",
        "--role",
        "行銷",
        "--title",
        "月報整理",
        "--details",
        "整理六月成效數字",
        "--status",
        "進行中",
        "--reach",
        "1200",
        "--engage",
        "300",
    ])
    .assert()
    .success()
    .stdout(contains("Worklog #1 added for Mia (2025-07-01)"));

    // Same entry comes back through the list path, normalized
    wl().args(["--db", &db_path, "list", "--json"])
        .assert()
        .success()
        .stdout(contains("\"title\": \"月報整理\""))
        .stdout(contains("\"details\": \"整理六月成效數字\""))
        .stdout(contains("\"status\": \"進行中\""))
        .stdout(contains("\"date\": \"2025-07-01T00:00:00Z\""))
        .stdout(contains("\"reach\": 1200"))
        .stdout(contains("\"engage\": 300"))
        .stdout(contains("\"convert\": 0"));
}

#[test]
fn test_add_with_attachments_keeps_order() {
    let db_path = setup_test_db("attachments");
    init_db(&db_path);

    wl().args([
        "--db",
        &db_path,
        "--test",
        "add",
        "2025-07-02",
        "--owner",
        "Jessica Liu",
        "--role",
        "設計",
        "--title",
        "KV 定稿",
        "--attach",
        "brief=https://example.com/brief",
        "--attach",
        "figma=https://example.com/kv",
    ])
    .assert()
    .success();

    let out = wl()
        .args(["--db", &db_path, "list", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let text = String::from_utf8_lossy(&out);
    let brief = text.find("\"label\": \"brief\"").expect("brief present");
    let figma = text.find("\"label\": \"figma\"").expect("figma present");
    assert!(brief < figma, "attachment order must be preserved");
}

#[test]
fn test_add_without_metrics_serializes_null() {
    let db_path = setup_test_db("no_metrics");
    init_db(&db_path);

    wl().args([
        "--db",
        &db_path,
        "--test",
        "add",
        "2025-07-03",
        "--owner",
        "Mo",
        "--role",
        "行銷",
        "--title",
        "提案初稿",
    ])
    .assert()
    .success();

    // absence means "no measurable data", not zeros
    wl().args(["--db", &db_path, "list", "--json"])
        .assert()
        .success()
        .stdout(contains("\"metrics\": null"));
}

#[test]
fn test_add_rejects_bad_date() {
    let db_path = setup_test_db("bad_date");
    init_db(&db_path);

    wl().args([
        "--db", &db_path, "--test", "add", "01/07/2025", "--owner", "Mo", "--role", "行銷",
        "--title", "x",
    ])
    .assert()
    .failure()
    .stderr(contains("Invalid date format"));
}

#[test]
fn test_add_rejects_negative_metric() {
    let db_path = setup_test_db("neg_metric");
    init_db(&db_path);

    wl().args([
        "--db", &db_path, "--test", "add", "2025-07-01", "--owner", "Mo", "--role", "行銷",
        "--title", "x", "--budget=-5",
    ])
    .assert()
    .failure()
    .stderr(contains("Invalid metric value"));
}

#[test]
fn test_add_rejects_malformed_attachment() {
    let db_path = setup_test_db("bad_attach");
    init_db(&db_path);

    wl().args([
        "--db",
        &db_path,
        "--test",
        "add",
        "2025-07-01",
        "--owner",
        "Mo",
        "--role",
        "行銷",
        "--title",
        "x",
        "--attach",
        "no-separator",
    ])
    .assert()
    .failure()
    .stderr(contains("Invalid attachment"));
}
