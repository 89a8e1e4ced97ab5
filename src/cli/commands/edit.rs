use crate::cli::commands::{parse_optional_level, resolve_user};
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::edit::{EditLogic, EditPatch};
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::fasting_type::FastingType;
use crate::ui::messages::success;
use crate::utils::time::parse_datetime;

/// Edit an existing fasting record.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit {
        id,
        start,
        end,
        fasting_type,
        energy,
        focus,
        mood,
        notes,
    } = &cli.command
    {
        let parse = |s: &Option<String>| -> AppResult<Option<chrono::NaiveDateTime>> {
            match s {
                None => Ok(None),
                Some(v) => parse_datetime(v)
                    .map(Some)
                    .ok_or_else(|| AppError::InvalidDateTime(v.clone())),
            }
        };

        let ftype = match fasting_type {
            None => None,
            Some(code) => Some(
                FastingType::from_code(code)
                    .ok_or_else(|| AppError::InvalidFastingType(code.clone()))?,
            ),
        };

        let patch = EditPatch {
            start: parse(start)?,
            end: parse(end)?,
            fasting_type: ftype,
            energy: parse_optional_level(*energy)?,
            focus: parse_optional_level(*focus)?,
            mood: parse_optional_level(*mood)?,
            notes: notes.clone(),
        };

        let mut pool = DbPool::new(&cfg.database)?;
        let user = resolve_user(&pool, cli, cfg)?;

        let rec = EditLogic::apply(&mut pool, &user, *id, patch)?;

        success(format!(
            "Fast #{} updated ({} → {}).",
            rec.id,
            rec.start_str(),
            rec.end_str()
        ));
    }

    Ok(())
}
