use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::{
    NewWorklogRow, find_or_create_project, find_or_create_user, insert_attachments,
    insert_metrics, insert_worklog,
};
use crate::errors::AppResult;
use crate::models::attachment::Attachment;
use crate::models::department::Department;
use crate::models::metrics::Metrics;
use crate::models::status::Status;
use crate::ui::messages::success;
use chrono::NaiveDate;

/// Validated input for a new worklog entry.
pub struct NewEntry {
    pub date: NaiveDate,
    pub owner: String,
    pub role: Department,
    pub project: Option<String>,
    pub project_code: Option<String>,
    pub title: String,
    pub details: String,
    pub status: Status,
    pub blockers: String,
    pub plan_tomorrow: String,
    pub metrics: Option<Metrics>,
    pub attachments: Vec<Attachment>,
}

/// High-level business logic for the `add` command.
pub struct AddLogic;

impl AddLogic {
    /// Insert one worklog entry with its relations.
    /// Owner and project are looked up by name and created when missing.
    pub fn apply(pool: &mut DbPool, entry: &NewEntry) -> AppResult<i64> {
        let tx = pool.conn.transaction()?;

        let owner_id = find_or_create_user(&tx, &entry.owner, entry.role)?;

        let project_id = match &entry.project {
            Some(name) => Some(find_or_create_project(
                &tx,
                name,
                entry.project_code.as_deref(),
            )?),
            None => None,
        };

        let id = insert_worklog(
            &tx,
            &NewWorklogRow {
                date: entry.date,
                owner_id,
                role: entry.role,
                project_id: project_id.as_deref(),
                title: &entry.title,
                details: &entry.details,
                status: entry.status,
                blockers: &entry.blockers,
                plan_tomorrow: &entry.plan_tomorrow,
                source: "cli",
            },
        )?;

        if let Some(m) = &entry.metrics {
            insert_metrics(&tx, id, m)?;
        }

        if !entry.attachments.is_empty() {
            insert_attachments(&tx, id, &entry.attachments)?;
        }

        ttlog(
            &tx,
            "add",
            &format!("worklog #{id}"),
            &format!("{} | {} | {}", entry.date, entry.owner, entry.title),
        )?;

        tx.commit()?;

        success(format!(
            "Worklog #{id} added for {} ({})",
            entry.owner,
            entry.date.format("%Y-%m-%d")
        ));

        Ok(id)
    }
}
