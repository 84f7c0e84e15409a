use super::{
    attachment::Attachment, department::Department, metrics::Metrics, status::Status,
};
use chrono::NaiveDate;
use serde::Serialize;

/// One day's task entry for one person, fully materialized:
/// the owner name, the optional project name, the optional metrics
/// record and all attachments are resolved at load time.
#[derive(Debug, Clone, Serialize)]
pub struct WorkLog {
    pub id: i64,
    pub date: NaiveDate,      // ⇔ worklogs.date (TEXT "YYYY-MM-DD")
    pub owner: String,        // ⇔ users.name via worklogs.owner_id
    pub role: Department,     // ⇔ worklogs.role ('行銷' | '設計')
    pub project: Option<String>, // ⇔ projects.name via worklogs.project_id
    pub title: String,
    pub details: String,
    pub status: Status,       // ⇔ worklogs.status ('TODO','DOING','DONE','DELAY')
    pub blockers: String,     // ⇔ worklogs.blockers (TEXT, default '')
    pub plan_tomorrow: String, // ⇔ worklogs.plan_tomorrow (TEXT, default '')
    pub metrics: Option<Metrics>,
    pub attachments: Vec<Attachment>,

    pub source: String,     // ⇔ worklogs.source (TEXT, default 'cli')
    pub created_at: String, // ⇔ worklogs.created_at (TEXT, ISO8601)
}

impl WorkLog {
    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    /// ISO-8601 timestamp form of the date, as handed to any consumer
    /// outside the store-query boundary (JSON output, export files).
    pub fn date_iso(&self) -> String {
        self.date.format("%Y-%m-%dT00:00:00Z").to_string()
    }
}
