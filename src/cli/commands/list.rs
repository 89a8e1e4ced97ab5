use crate::cli::commands::resolve_user;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries::{find_by_user, find_open_by_user};
use crate::errors::AppResult;
use crate::models::fasting::FastingRecord;
use crate::ui::messages::info;
use crate::utils::colors::{GREEN, RESET};
use crate::utils::date::parse_period;
use crate::utils::formatting::fmt_hours;
use crate::utils::table::{Column, Table};

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::List { period, open } = &cli.command {
        let mut pool = DbPool::new(&cfg.database)?;
        let user = resolve_user(&pool, cli, cfg)?;

        if *open {
            match find_open_by_user(&pool.conn, user.id)? {
                Some(rec) => {
                    println!(
                        "{}⏳ Active fast since {} ({}).{}",
                        GREEN,
                        rec.start_str(),
                        rec.fasting_type.label(),
                        RESET
                    );
                }
                None => info("No active fast."),
            }
            return Ok(());
        }

        let mut records = find_by_user(&pool.conn, user.id)?;

        if let Some(p) = period {
            let (from, to) = parse_period(p)?;
            records.retain(|r| {
                let day = r.start_date();
                day >= from && day <= to
            });
            println!("📅 Fasts for {} in {}:\n", user.email, p);
        } else {
            println!("📅 Fasts for {}:\n", user.email);
        }

        if records.is_empty() {
            info("No fasting records found.");
            return Ok(());
        }

        print_records(&records);
    }

    Ok(())
}

fn print_records(records: &[FastingRecord]) {
    let mut table = Table::new(vec![
        Column::new("ID", 5),
        Column::new("START", 16),
        Column::new("END", 16),
        Column::new("HOURS", 6),
        Column::new("TYPE", 12),
        Column::new("NOTES", 24),
    ]);

    for rec in records {
        table.add_row(vec![
            rec.id.to_string(),
            rec.start_str(),
            rec.end_str(),
            fmt_hours(rec.duration_hours),
            rec.fasting_type.label().to_string(),
            rec.notes.clone(),
        ]);
    }

    print!("{}", table.render());
}
