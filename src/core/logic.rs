use crate::models::kpi::KpiSummary;
use crate::models::status::Status;
use crate::models::worklog::WorkLog;

pub struct Core;

impl Core {
    /// Aggregate KPI figures over a worklog list.
    ///
    /// Pure and order-independent: permuting the input changes nothing.
    /// Records without a metrics record contribute 0 to every sum.
    pub fn build_kpi_summary(logs: &[WorkLog]) -> KpiSummary {
        let total = logs.len();

        let mut summary = KpiSummary {
            total,
            ..KpiSummary::default()
        };

        for log in logs {
            match log.status {
                Status::Todo => summary.todo += 1,
                Status::Doing => summary.doing += 1,
                Status::Done => summary.done += 1,
                Status::Delay => summary.delayed += 1,
            }

            if let Some(m) = &log.metrics {
                summary.reach_sum += m.reach;
                summary.engage_sum += m.engage;
                summary.convert_sum += m.convert;
                summary.budget_sum += m.budget;
            }
        }

        summary.progress_percent = if total == 0 {
            0
        } else {
            // round half-up
            ((summary.done * 100) as f64 / total as f64).round() as u32
        };

        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::department::Department;
    use crate::models::metrics::Metrics;
    use chrono::NaiveDate;

    fn log(status: Status, metrics: Option<Metrics>) -> WorkLog {
        WorkLog {
            id: 0,
            date: NaiveDate::from_ymd_opt(2025, 6, 21).unwrap(),
            owner: "Linnie".to_string(),
            role: Department::Marketing,
            project: None,
            title: "t".to_string(),
            details: "d".to_string(),
            status,
            blockers: String::new(),
            plan_tomorrow: String::new(),
            metrics,
            attachments: Vec::new(),
            source: "cli".to_string(),
            created_at: String::new(),
        }
    }

    #[test]
    fn empty_input_is_all_zero() {
        let s = Core::build_kpi_summary(&[]);
        assert_eq!(s, KpiSummary::default());
    }

    #[test]
    fn counts_statuses_and_sums_metrics() {
        let logs = vec![
            log(Status::Doing, None),
            log(
                Status::Done,
                Some(Metrics {
                    reach: 58000,
                    engage: 4200,
                    convert: 86,
                    budget: 15000,
                }),
            ),
            log(Status::Delay, None),
        ];

        let s = Core::build_kpi_summary(&logs);
        assert_eq!(s.total, 3);
        assert_eq!(s.done, 1);
        assert_eq!(s.doing, 1);
        assert_eq!(s.delayed, 1);
        assert_eq!(s.todo, 0);
        assert_eq!(s.progress_percent, 33);
        assert_eq!(s.reach_sum, 58000);
        assert_eq!(s.engage_sum, 4200);
        assert_eq!(s.convert_sum, 86);
        assert_eq!(s.budget_sum, 15000);
    }

    #[test]
    fn all_done_is_one_hundred_percent() {
        let logs = vec![log(Status::Done, None), log(Status::Done, None)];
        let s = Core::build_kpi_summary(&logs);
        assert_eq!(s.progress_percent, 100);
    }

    #[test]
    fn progress_rounds_half_up() {
        // 1/8 = 12.5% → 13
        let mut logs = vec![log(Status::Done, None)];
        for _ in 0..7 {
            logs.push(log(Status::Todo, None));
        }
        let s = Core::build_kpi_summary(&logs);
        assert_eq!(s.progress_percent, 13);
        assert_eq!(s.todo, 7);
    }

    #[test]
    fn aggregation_is_order_independent() {
        let m = Some(Metrics {
            reach: 100,
            engage: 10,
            convert: 1,
            budget: 500,
        });
        let a = vec![log(Status::Done, m), log(Status::Doing, None), log(Status::Todo, None)];
        let b = vec![log(Status::Todo, None), log(Status::Done, m), log(Status::Doing, None)];

        assert_eq!(Core::build_kpi_summary(&a), Core::build_kpi_summary(&b));
    }

    #[test]
    fn progress_is_within_bounds() {
        for done in 0..=5usize {
            let mut logs = Vec::new();
            for _ in 0..done {
                logs.push(log(Status::Done, None));
            }
            for _ in 0..(5 - done) {
                logs.push(log(Status::Delay, None));
            }
            let s = Core::build_kpi_summary(&logs);
            assert!(s.progress_percent <= 100);
        }
    }
}
