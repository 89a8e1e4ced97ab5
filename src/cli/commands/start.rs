use crate::cli::commands::resolve_user;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::start::StartLogic;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::fasting_type::FastingType;
use crate::ui::messages::success;
use crate::utils::time::parse_optional_datetime;

/// Start a fast.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Start { at, fasting_type } = &cli.command {
        //
        // 1. Resolve start time (default: now)
        //
        let start = parse_optional_datetime(at.as_ref())?;

        //
        // 2. Resolve fasting type (CLI flag, else config default)
        //
        let code = fasting_type
            .clone()
            .unwrap_or_else(|| cfg.default_fasting_type.clone());
        let ftype = FastingType::from_code(&code)
            .ok_or_else(|| AppError::InvalidFastingType(code.clone()))?;

        //
        // 3. Open DB, resolve user, execute logic
        //
        let mut pool = DbPool::new(&cfg.database)?;
        let user = resolve_user(&pool, cli, cfg)?;

        let rec = StartLogic::apply(&mut pool, &user, start, ftype)?;

        success(format!(
            "Fast started at {} ({}).",
            rec.start_str(),
            rec.fasting_type.label()
        ));
    }

    Ok(())
}
