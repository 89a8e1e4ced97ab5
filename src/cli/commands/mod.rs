pub mod add;
pub mod backup;
pub mod config;
pub mod dashboard;
pub mod db;
pub mod del;
pub mod edit;
pub mod end;
pub mod export;
pub mod init;
pub mod list;
pub mod log;
pub mod start;
pub mod user;
pub mod weight;

use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries::find_user_by_email;
use crate::errors::{AppError, AppResult};
use crate::models::level::Level;
use crate::models::user::User;

/// Resolve the acting user from --user or the config default.
pub(crate) fn resolve_user(pool: &DbPool, cli: &Cli, cfg: &Config) -> AppResult<User> {
    let email = match &cli.user {
        Some(e) => e.clone(),
        None if !cfg.default_user.is_empty() => cfg.default_user.clone(),
        None => return Err(AppError::NoUserSelected),
    };

    find_user_by_email(&pool.conn, &email)?.ok_or(AppError::UnknownUser(email))
}

/// Parse an optional 1..=3 wellbeing level from the CLI.
pub(crate) fn parse_optional_level(input: Option<i32>) -> AppResult<Option<Level>> {
    match input {
        None => Ok(None),
        Some(v) => Level::from_db_int(v)
            .map(Some)
            .ok_or_else(|| AppError::InvalidLevel(v.to_string())),
    }
}
