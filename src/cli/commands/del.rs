use crate::cli::commands::resolve_user;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::del::DeleteLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{ask_confirmation, info, success};

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id } = &cli.command {
        let prompt = format!("Delete fast #{}? This action is irreversible.", id);

        if !ask_confirmation(&prompt) {
            info("Operation cancelled.");
            return Ok(());
        }

        let mut pool = DbPool::new(&cfg.database)?;
        let user = resolve_user(&pool, cli, cfg)?;

        DeleteLogic::apply(&mut pool, &user, *id)?;

        success(format!("Fast #{} has been deleted.", id));
    }

    Ok(())
}
