use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::lesson::StudentRef;
use crate::core::stats::StatsLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Stats { student, month } = cmd {
        let pool = DbPool::open(cfg)?;

        match (student, month) {
            (Some(name), _) => StatsLogic::student(&pool, cfg, &StudentRef::Name(name.clone()))?,
            (None, Some(m)) => {
                let (year, month) = date::parse_month(m)?;
                StatsLogic::month(&pool, cfg, year, month)?
            }
            (None, None) => StatsLogic::overall(&pool, cfg)?,
        }
    }
    Ok(())
}
