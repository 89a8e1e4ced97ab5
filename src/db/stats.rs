use crate::db::pool::DbPool;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use rusqlite::OptionalExtension;
use std::fs;

pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> rusqlite::Result<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_mb = (file_size as f64) / (1024.0 * 1024.0);

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.2} MB", CYAN, RESET, file_mb);

    //
    // 2) ROW COUNTS
    //
    let count = |table: &str| -> rusqlite::Result<i64> {
        pool.conn
            .query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| {
                row.get(0)
            })
    };

    let users = count("users")?;
    let fasts = count("fasting_records")?;
    let weights = count("weight_records")?;

    println!("{}• Users:{} {}{}{}", CYAN, RESET, GREEN, users, RESET);
    println!("{}• Fasts:{} {}{}{}", CYAN, RESET, GREEN, fasts, RESET);
    println!("{}• Weights:{} {}{}{}", CYAN, RESET, GREEN, weights, RESET);

    //
    // 3) FASTING DATE RANGE
    //
    let first: Option<String> = pool
        .conn
        .query_row(
            "SELECT start_time FROM fasting_records ORDER BY start_time ASC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let last: Option<String> = pool
        .conn
        .query_row(
            "SELECT start_time FROM fasting_records ORDER BY start_time DESC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    println!("{}• Fast range:{}", CYAN, RESET);
    println!(
        "    from: {}",
        first.unwrap_or_else(|| format!("{GREY}--{RESET}"))
    );
    println!(
        "    to:   {}",
        last.unwrap_or_else(|| format!("{GREY}--{RESET}"))
    );

    println!();
    Ok(())
}
