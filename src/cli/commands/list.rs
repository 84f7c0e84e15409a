use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::filter::WorklogFilter;
use crate::core::logic::Core;
use crate::db::pool::DbPool;
use crate::db::queries::load_worklogs;
use crate::errors::AppResult;
use crate::export::WorklogExport;
use crate::models::kpi::KpiSummary;
use crate::models::worklog::WorkLog;
use crate::utils::colors::{CYAN, GREY, RESET, color_for_status};
use crate::utils::formatting::truncate_width;
use crate::utils::table::{Column, Table};
use crate::utils::thousands;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List {
        query,
        role,
        status,
        from,
        to,
        json,
    } = cmd
    {
        let filter = WorklogFilter::from_args(query, role, status, from, to)?;

        let mut pool = DbPool::new(&cfg.database)?;
        let logs = load_worklogs(&mut pool, &filter)?;

        if *json {
            print_json(&logs)?;
            return Ok(());
        }

        if logs.is_empty() {
            println!("No worklogs match the given filters.");
            return Ok(());
        }

        let kpi = Core::build_kpi_summary(&logs);
        print_kpi(&kpi);
        print_table(&logs);
    }

    Ok(())
}

/// Machine-readable output: the same `{items: [...]}` shape the
/// dashboard consumes, with normalized status labels and ISO dates.
fn print_json(logs: &[WorkLog]) -> AppResult<()> {
    let items: Vec<WorklogExport> = logs.iter().map(WorklogExport::from_worklog).collect();
    let body = serde_json::json!({ "items": items });
    println!(
        "{}",
        serde_json::to_string_pretty(&body)
            .map_err(|e| crate::errors::AppError::Other(e.to_string()))?
    );
    Ok(())
}

fn print_kpi(kpi: &KpiSummary) {
    println!();
    println!("📊 {}KPI{} ({} entries)", CYAN, RESET, kpi.total);
    println!(
        "   Progress : {}% ({}/{} done)",
        kpi.progress_percent, kpi.done, kpi.total
    );
    println!(
        "   Doing : {}   Delayed : {}   Not started : {}",
        kpi.doing, kpi.delayed, kpi.todo
    );
    println!(
        "   Reach {} | Engage {} | Convert {} | Budget {}",
        thousands(kpi.reach_sum),
        thousands(kpi.engage_sum),
        thousands(kpi.convert_sum),
        thousands(kpi.budget_sum)
    );
    println!();
}

fn print_table(logs: &[WorkLog]) {
    let mut table = Table::new(vec![
        Column::new("Date", 10),
        Column::new("Owner", 12),
        Column::new("Dept", 6),
        Column::new("Project", 22),
        Column::wrapped("Title", 26),
        Column::wrapped("Details", 32),
        Column::new("Status", 8),
        Column::new("Reach/Eng/Conv", 20),
    ]);

    for log in logs {
        let project = log
            .project
            .clone()
            .map(|p| truncate_width(&p, 22))
            .unwrap_or_else(|| format!("{GREY}—{RESET}"));

        let status = format!(
            "{}{}{}",
            color_for_status(log.status),
            log.status.label(),
            RESET
        );

        let metrics = match &log.metrics {
            Some(m) => format!(
                "{} / {} / {}",
                thousands(m.reach),
                thousands(m.engage),
                thousands(m.convert)
            ),
            None => format!("{GREY}—{RESET}"),
        };

        let mut details = log.details.clone();
        if !log.attachments.is_empty() {
            let labels: Vec<&str> = log.attachments.iter().map(|a| a.label.as_str()).collect();
            details.push_str(&format!(" [📎 {}]", labels.join(", ")));
        }

        table.add_row(vec![
            log.date_str(),
            log.owner.clone(),
            log.role.label().to_string(),
            project,
            log.title.clone(),
            details,
            status,
            metrics,
        ]);
    }

    print!("{}", table.render());
    println!();
}
