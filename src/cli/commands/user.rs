use crate::cli::commands::resolve_user;
use crate::cli::parser::{Cli, Commands, UserCommands};
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries::{find_user_by_email, insert_user, list_users, update_user_goal};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};
use crate::utils::formatting::pad_right;

/// Manage user accounts.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::User { action } = &cli.command {
        let mut pool = DbPool::new(&cfg.database)?;

        match action {
            UserCommands::Add { email, name, goal } => {
                let goal_hours = goal.unwrap_or(16.0);
                if goal_hours <= 0.0 {
                    return Err(AppError::InvalidGoal(goal_hours));
                }

                if find_user_by_email(&pool.conn, email)?.is_some() {
                    return Err(AppError::UserExists(email.clone()));
                }

                insert_user(&pool.conn, email, name, goal_hours)?;

                success(format!(
                    "User {} created (goal: {} h/day).",
                    email, goal_hours
                ));

                // First account becomes the default, so single-user setups
                // never need --user.
                if cfg.default_user.is_empty() && !cli.test {
                    let mut updated = Config::load();
                    updated.default_user = email.clone();
                    updated.save()?;
                    info(format!("Set {} as default user.", email));
                }
            }

            UserCommands::List => {
                let users = list_users(&pool.conn)?;
                if users.is_empty() {
                    info("No users yet. Create one with `fastlife user add`.");
                    return Ok(());
                }

                println!("👤 Users:\n");
                for u in users {
                    println!(
                        "- {} {} (goal: {} h/day)",
                        pad_right(&u.email, 30),
                        u.name,
                        u.fasting_goal_hours
                    );
                }
            }

            UserCommands::Goal { hours } => {
                if *hours <= 0.0 {
                    return Err(AppError::InvalidGoal(*hours));
                }

                let user = resolve_user(&pool, cli, cfg)?;
                update_user_goal(&pool.conn, user.id, *hours)?;

                success(format!(
                    "Fasting goal for {} set to {} h/day.",
                    user.email, hours
                ));
            }
        }
    }

    Ok(())
}
