use crate::core::filter::WorklogFilter;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::load_worklogs;
use crate::errors::AppResult;
use crate::export::csv::write_csv;
use crate::export::fs_utils::ensure_writable;
use crate::export::json::write_json;
use crate::export::model::WorklogExport;
use crate::export::{ExportFormat, notify_export_success};
use crate::ui::messages::warning;
use std::path::Path;

/// High-level export logic: load the filtered worklog list, normalize
/// it, and write it in the requested format.
pub struct ExportLogic;

impl ExportLogic {
    pub fn export(
        pool: &mut DbPool,
        format: ExportFormat,
        file: &str,
        filter: &WorklogFilter,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);
        ensure_writable(path, force)?;

        let logs = load_worklogs(pool, filter)?;
        if logs.is_empty() {
            warning("No worklogs match the given filters — writing an empty file.");
        }

        let rows: Vec<WorklogExport> = logs.iter().map(WorklogExport::from_worklog).collect();

        match format {
            ExportFormat::Csv => write_csv(file, &rows)?,
            ExportFormat::Json => write_json(file, &rows)?,
        }

        ttlog(
            &pool.conn,
            "export",
            file,
            &format!("Exported {} worklog rows", rows.len()),
        )?;

        notify_export_success(
            match format {
                ExportFormat::Csv => "CSV",
                ExportFormat::Json => "JSON",
            },
            path,
        );

        Ok(())
    }
}
