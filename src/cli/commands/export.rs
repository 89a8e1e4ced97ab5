use crate::cli::commands::resolve_user;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        range,
        weights,
        force,
    } = &cli.command
    {
        let mut pool = DbPool::new(&cfg.database)?;
        let user = resolve_user(&pool, cli, cfg)?;

        ExportLogic::export(
            &mut pool,
            &user,
            format.clone(),
            file,
            range,
            *weights,
            *force,
        )?;
    }

    Ok(())
}
