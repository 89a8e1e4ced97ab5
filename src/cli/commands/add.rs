use crate::cli::commands::resolve_user;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::fasting_type::FastingType;
use crate::ui::messages::success;
use crate::utils::time::parse_datetime;

/// Backfill a completed fast.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        start,
        end,
        fasting_type,
        notes,
    } = &cli.command
    {
        let start_parsed =
            parse_datetime(start).ok_or_else(|| AppError::InvalidDateTime(start.clone()))?;
        let end_parsed =
            parse_datetime(end).ok_or_else(|| AppError::InvalidDateTime(end.clone()))?;

        let code = fasting_type
            .clone()
            .unwrap_or_else(|| cfg.default_fasting_type.clone());
        let ftype = FastingType::from_code(&code)
            .ok_or_else(|| AppError::InvalidFastingType(code.clone()))?;

        let mut pool = DbPool::new(&cfg.database)?;
        let user = resolve_user(&pool, cli, cfg)?;

        let rec = AddLogic::apply(
            &mut pool,
            &user,
            start_parsed,
            end_parsed,
            ftype,
            notes.clone(),
        )?;

        success(format!(
            "Added fast {} → {} ({:.2} h).",
            rec.start_str(),
            rec.end_str(),
            rec.duration_hours.unwrap_or(0.0)
        ));
    }

    Ok(())
}
