use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::filter::WorklogFilter;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        query,
        role,
        status,
        from,
        to,
        force,
    } = cmd
    {
        let filter = WorklogFilter::from_args(query, role, status, from, to)?;

        let file = crate::utils::path::expand_tilde(file)
            .to_string_lossy()
            .to_string();

        let mut pool = DbPool::new(&cfg.database)?;
        ExportLogic::export(&mut pool, format.clone(), &file, &filter, *force)?;
    }

    Ok(())
}
