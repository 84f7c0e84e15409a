use crate::models::attachment::Attachment;
use crate::models::metrics::Metrics;
use crate::models::worklog::WorkLog;
use serde::Serialize;

/// Normalized worklog shape handed to consumers outside the
/// store-query boundary: display labels for status/role, ISO-8601
/// timestamp for the date.
#[derive(Serialize, Clone, Debug)]
pub struct WorklogExport {
    pub id: i64,
    pub date: String,
    pub owner: String,
    pub role: String,
    pub project: Option<String>,
    pub title: String,
    pub details: String,
    pub status: String,
    pub blockers: String,
    #[serde(rename = "planTomorrow")]
    pub plan_tomorrow: String,
    pub metrics: Option<Metrics>,
    pub attachments: Vec<Attachment>,
}

impl WorklogExport {
    pub fn from_worklog(log: &WorkLog) -> Self {
        Self {
            id: log.id,
            date: log.date_iso(),
            owner: log.owner.clone(),
            role: log.role.label().to_string(),
            project: log.project.clone(),
            title: log.title.clone(),
            details: log.details.clone(),
            status: log.status.label().to_string(),
            blockers: log.blockers.clone(),
            plan_tomorrow: log.plan_tomorrow.clone(),
            metrics: log.metrics,
            attachments: log.attachments.clone(),
        }
    }
}

/// Header for CSV files
pub(crate) fn get_headers() -> Vec<&'static str> {
    vec![
        "id",
        "date",
        "owner",
        "role",
        "project",
        "title",
        "details",
        "status",
        "blockers",
        "plan_tomorrow",
        "reach",
        "engage",
        "convert",
        "budget",
        "attachments",
    ]
}

/// Flatten one normalized row for CSV: metrics become four columns
/// (empty when absent), attachments a single "label=url; ..." cell.
pub(crate) fn to_csv_record(e: &WorklogExport) -> Vec<String> {
    let (reach, engage, convert, budget) = match &e.metrics {
        Some(m) => (
            m.reach.to_string(),
            m.engage.to_string(),
            m.convert.to_string(),
            m.budget.to_string(),
        ),
        None => (String::new(), String::new(), String::new(), String::new()),
    };

    vec![
        e.id.to_string(),
        e.date.clone(),
        e.owner.clone(),
        e.role.clone(),
        e.project.clone().unwrap_or_default(),
        e.title.clone(),
        e.details.clone(),
        e.status.clone(),
        e.blockers.clone(),
        e.plan_tomorrow.clone(),
        reach,
        engage,
        convert,
        budget,
        e.attachments
            .iter()
            .map(|a: &Attachment| format!("{}={}", a.label, a.url))
            .collect::<Vec<_>>()
            .join("; "),
    ]
}
