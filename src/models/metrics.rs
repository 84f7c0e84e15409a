use serde::Serialize;

/// Optional performance numbers attached to a worklog entry.
/// Absence of the record means "no measurable data", not zero.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct Metrics {
    pub reach: i64,
    pub engage: i64,
    pub convert: i64,
    pub budget: i64,
}
