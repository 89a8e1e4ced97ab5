use crate::cli::commands::resolve_user;
use crate::cli::parser::{Cli, Commands, WeightCommands};
use crate::config::Config;
use crate::core::weight::WeightLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::utils::table::{Column, Table};

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Weight { action } = &cli.command {
        let mut pool = DbPool::new(&cfg.database)?;
        let user = resolve_user(&pool, cli, cfg)?;

        match action {
            WeightCommands::Add { weight, month } => {
                let reference_month =
                    WeightLogic::add(&mut pool, &user, *weight, month.clone())?;
                success(format!(
                    "Recorded {} kg for {}.",
                    weight, reference_month
                ));
            }

            WeightCommands::List => {
                let weights = WeightLogic::list(&mut pool, &user)?;

                if weights.is_empty() {
                    info("No weight records yet.");
                    return Ok(());
                }

                println!("⚖️  Weights for {}:\n", user.email);

                let mut table = Table::new(vec![
                    Column::new("MONTH", 8),
                    Column::new("WEIGHT (kg)", 11),
                ]);
                for w in weights {
                    table.add_row(vec![w.reference_month.clone(), format!("{:.1}", w.weight)]);
                }
                print!("{}", table.render());
            }
        }
    }

    Ok(())
}
