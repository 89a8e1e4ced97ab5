use crate::cli::commands::{parse_optional_level, resolve_user};
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::end::EndLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::time::parse_optional_datetime;

/// End the active fast.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::End {
        at,
        energy,
        focus,
        mood,
        notes,
    } = &cli.command
    {
        let end = parse_optional_datetime(at.as_ref())?;

        let energy = parse_optional_level(*energy)?;
        let focus = parse_optional_level(*focus)?;
        let mood = parse_optional_level(*mood)?;

        let mut pool = DbPool::new(&cfg.database)?;
        let user = resolve_user(&pool, cli, cfg)?;

        let rec = EndLogic::apply(&mut pool, &user, end, energy, focus, mood, notes.clone())?;

        success(format!(
            "Fast ended! Duration: {:.2} hours.",
            rec.duration_hours.unwrap_or(0.0)
        ));
    }

    Ok(())
}
