use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{init_db_with_demo, setup_test_db, wl};

#[test]
fn test_list_unfiltered_shows_all_seeded_rows() {
    let db_path = setup_test_db("list_all");
    init_db_with_demo(&db_path);

    // Table view: long titles may wrap, so match on stable fragments
    wl().args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("主視覺"))
        .stdout(contains("Reels 腳本"))
        .stdout(contains("聯名活動頁"));

    // JSON view carries the full normalized titles
    wl().args(["--db", &db_path, "list", "--json"])
        .assert()
        .success()
        .stdout(contains("主視覺 KV 改版（深藍×金）"))
        .stdout(contains("Reels 腳本：拆封即鮮 × 雙層魚子專利"))
        .stdout(contains("聯名活動頁（早鳥抽獎）"));
}

#[test]
fn test_kpi_summary_over_seeded_data() {
    let db_path = setup_test_db("kpi_seeded");
    init_db_with_demo(&db_path);

    // total=3, done=1, doing=1, delayed=1, progress=33,
    // reach_sum=58000, budget_sum=15000
    wl().args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("3 entries"))
        .stdout(contains("Progress : 33% (1/3 done)"))
        .stdout(contains("Doing : 1   Delayed : 1   Not started : 0"))
        .stdout(contains("Reach 58,000"))
        .stdout(contains("Budget 15,000"));
}

#[test]
fn test_filter_by_status_label() {
    let db_path = setup_test_db("filter_status");
    init_db_with_demo(&db_path);

    // 已完成 (Done) matches exactly the Reels entry
    wl().args(["--db", &db_path, "list", "--status", "已完成"])
        .assert()
        .success()
        .stdout(contains("1 entries"))
        .stdout(contains("Reels 腳本"))
        .stdout(contains("主視覺").not())
        .stdout(contains("聯名活動頁").not());
}

#[test]
fn test_filter_by_date_range() {
    let db_path = setup_test_db("filter_dates");
    init_db_with_demo(&db_path);

    // Inclusive bounds: only the two 2025-06-21 entries
    wl().args([
        "--db",
        &db_path,
        "list",
        "--from",
        "2025-06-21",
        "--to",
        "2025-06-21",
    ])
    .assert()
    .success()
    .stdout(contains("2 entries"))
    .stdout(contains("主視覺"))
    .stdout(contains("Reels"))
    .stdout(contains("聯名活動頁").not());
}

#[test]
fn test_filter_by_role() {
    let db_path = setup_test_db("filter_role");
    init_db_with_demo(&db_path);

    wl().args(["--db", &db_path, "list", "--role", "設計"])
        .assert()
        .success()
        .stdout(contains("1 entries"))
        .stdout(contains("Jessica Liu"));
}

#[test]
fn test_keyword_matches_owner_and_project_names() {
    let db_path = setup_test_db("filter_keyword");
    init_db_with_demo(&db_path);

    // owner name
    wl().args(["--db", &db_path, "list", "-q", "Linnie"])
        .assert()
        .success()
        .stdout(contains("1 entries"))
        .stdout(contains("Reels"));

    // project name, ASCII case-insensitive
    wl().args(["--db", &db_path, "list", "-q", "caviar"])
        .assert()
        .success()
        .stdout(contains("1 entries"))
        .stdout(contains("Reels"));

    // title substring (CJK, exact bytes)
    wl().args(["--db", &db_path, "list", "-q", "早鳥"])
        .assert()
        .success()
        .stdout(contains("1 entries"))
        .stdout(contains("聯名活動頁"));
}

#[test]
fn test_combined_filters_are_anded() {
    let db_path = setup_test_db("filter_combined");
    init_db_with_demo(&db_path);

    // 行銷 alone matches two rows; with the date range only one survives
    wl().args([
        "--db",
        &db_path,
        "list",
        "--role",
        "行銷",
        "--from",
        "2025-06-21",
        "--to",
        "2025-06-21",
    ])
    .assert()
    .success()
    .stdout(contains("1 entries"))
    .stdout(contains("Reels"));
}

#[test]
fn test_unknown_status_label_is_rejected() {
    let db_path = setup_test_db("bad_status");
    init_db_with_demo(&db_path);

    wl().args(["--db", &db_path, "list", "--status", "完了"])
        .assert()
        .failure()
        .stderr(contains("Unknown status label: 完了"));
}

#[test]
fn test_unknown_role_label_is_rejected() {
    let db_path = setup_test_db("bad_role");
    init_db_with_demo(&db_path);

    wl().args(["--db", &db_path, "list", "--role", "業務"])
        .assert()
        .failure()
        .stderr(contains("Unknown department label: 業務"));
}

#[test]
fn test_no_matches_prints_empty_state() {
    let db_path = setup_test_db("empty_state");
    init_db_with_demo(&db_path);

    wl().args(["--db", &db_path, "list", "--from", "2030-01-01"])
        .assert()
        .success()
        .stdout(contains("No worklogs match the given filters."));
}

#[test]
fn test_db_info_reports_counts() {
    let db_path = setup_test_db("db_info");
    init_db_with_demo(&db_path);

    wl().args(["--db", &db_path, "db", "--info"])
        .assert()
        .success()
        .stdout(contains("Worklogs:"))
        .stdout(contains("Users:"))
        .stdout(contains("Projects:"));
}

#[test]
fn test_internal_log_records_operations() {
    let db_path = setup_test_db("internal_log");
    init_db_with_demo(&db_path);

    wl().args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("init"))
        .stdout(contains("seed"));
}
