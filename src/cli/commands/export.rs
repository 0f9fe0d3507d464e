use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        student,
        format,
        file,
        force,
    } = cmd
    {
        let pool = DbPool::open(cfg)?;
        ExportLogic::export(
            &pool,
            cfg,
            student.as_deref(),
            *format,
            file.as_deref(),
            *force,
        )?;
    }
    Ok(())
}
