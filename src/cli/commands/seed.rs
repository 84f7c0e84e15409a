use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::seed::SeedLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Seed { demo } = cmd {
        // Reject anything that is not the demo seed before opening the DB
        SeedLogic::ensure_demo_request(*demo)?;

        let mut pool = DbPool::new(&cfg.database)?;
        let count = SeedLogic::apply(&mut pool)?;

        success(format!("Demo data imported: {count} worklog rows created."));
    }

    Ok(())
}
