use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::{
    NewWorklogRow, insert_metrics, insert_worklog, upsert_project, upsert_user,
};
use crate::errors::{AppError, AppResult};
use crate::models::department::Department;
use crate::models::metrics::Metrics;
use crate::models::status::Status;
use chrono::NaiveDate;

/// Demo-data seeding for the dashboard.
///
/// Users and projects are upserted by natural key (email / fixed id), so
/// repeating the command never duplicates them. The three demo worklog
/// rows are appended on every invocation; the returned count is the
/// number of worklog rows written.
pub struct SeedLogic;

impl SeedLogic {
    /// Guard for the create/seed boundary: anything that is not an
    /// explicit demo-seed request is rejected without touching the store.
    pub fn ensure_demo_request(demo: bool) -> AppResult<()> {
        if demo {
            Ok(())
        } else {
            Err(AppError::Unsupported(
                "Only demo seed supported here.".to_string(),
            ))
        }
    }

    pub fn apply(pool: &mut DbPool) -> AppResult<usize> {
        let tx = pool.conn.transaction()?;

        //
        // 1) Demo users (upsert by email)
        //
        let jessica = upsert_user(&tx, "Jessica Liu", "jessica@korena.tw", Department::Design)?;
        let linnie = upsert_user(&tx, "Linnie", "linnie@korena.tw", Department::Marketing)?;
        let mo = upsert_user(&tx, "Mo", "mo@korena.tw", Department::Marketing)?;

        //
        // 2) Demo projects (upsert by fixed id)
        //
        upsert_project(&tx, "p_618", "618 活動 / 品牌形象", "618")?;
        upsert_project(&tx, "p_caviar", "新品上市｜Caviar 8", "CAV8")?;
        upsert_project(&tx, "p_pilates", "Mo Pilates 聯名", "PILATES")?;

        //
        // 3) Demo worklog rows (appended unconditionally)
        //
        let d_0620 = NaiveDate::from_ymd_opt(2025, 6, 20)
            .ok_or_else(|| AppError::InvalidDate("2025-06-20".to_string()))?;
        let d_0621 = NaiveDate::from_ymd_opt(2025, 6, 21)
            .ok_or_else(|| AppError::InvalidDate("2025-06-21".to_string()))?;

        insert_worklog(
            &tx,
            &NewWorklogRow {
                date: d_0621,
                owner_id: jessica,
                role: Department::Design,
                project_id: Some("p_618"),
                title: "主視覺 KV 改版（深藍×金）",
                details: "完成 3 套版型；繳交 A/B 兩版動畫稿；待主管回饋",
                status: Status::Doing,
                blockers: "等待 KOL 名單最終確認（置入文案）",
                plan_tomorrow: "",
                source: "seed",
            },
        )?;

        let reels = insert_worklog(
            &tx,
            &NewWorklogRow {
                date: d_0621,
                owner_id: linnie,
                role: Department::Marketing,
                project_id: Some("p_caviar"),
                title: "Reels 腳本：拆封即鮮 × 雙層魚子專利",
                details: "完成 8 秒短版 + 15 秒長版腳本，安排 6/22 拍攝",
                status: Status::Done,
                blockers: "",
                plan_tomorrow: "",
                source: "seed",
            },
        )?;
        insert_metrics(
            &tx,
            reels,
            &Metrics {
                reach: 58000,
                engage: 4200,
                convert: 86,
                budget: 15000,
            },
        )?;

        insert_worklog(
            &tx,
            &NewWorklogRow {
                date: d_0620,
                owner_id: mo,
                role: Department::Marketing,
                project_id: Some("p_pilates"),
                title: "聯名活動頁（早鳥抽獎）",
                details: "完成 wireframe 與需求；等待設計套版",
                status: Status::Delay,
                blockers: "合作方素材延遲，Logo 版權聲明尚未簽回",
                plan_tomorrow: "",
                source: "seed",
            },
        )?;

        let count = 3;

        ttlog(
            &tx,
            "seed",
            "demo",
            &format!("Seeded {count} demo worklog rows"),
        )?;

        tx.commit()?;
        Ok(count)
    }
}
