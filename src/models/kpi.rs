use serde::Serialize;

/// Aggregated KPI figures over a (filtered) worklog list.
///
/// `todo` has no counterpart on the original dashboard tiles; it is kept
/// as an explicit field so that every status is accounted for somewhere
/// other than `total`.
#[derive(Debug, Default, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct KpiSummary {
    pub total: usize,
    pub todo: usize,
    pub doing: usize,
    pub done: usize,
    pub delayed: usize,

    /// done/total in percent, rounded half-up; 0 when total is 0.
    pub progress_percent: u32,

    pub reach_sum: i64,
    pub engage_sum: i64,
    pub convert_sum: i64,
    pub budget_sum: i64,
}
