use crate::cli::commands::resolve_user;
use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::summary::build_dashboard;
use crate::db::pool::DbPool;
use crate::db::queries::find_by_user;
use crate::errors::AppResult;
use crate::ui::messages::header;
use crate::utils::colors::{GREEN, GREY, RESET, color_for_goal};
use crate::utils::time::{hours2readable, now_minute};

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let mut pool = DbPool::new(&cfg.database)?;
    let user = resolve_user(&pool, cli, cfg)?;

    let records = find_by_user(&pool.conn, user.id)?;
    let summary = build_dashboard(user.fasting_goal_hours, &records, now_minute());

    header(format!("Dashboard for {}", user.email));
    println!();

    match &summary.active_fast {
        Some(fast) => println!(
            "{}⏳ Active fast since {} ({}).{}",
            GREEN,
            fast.start_str(),
            fast.fasting_type.label(),
            RESET
        ),
        None => println!("{}No active fast.{}", GREY, RESET),
    }

    println!();
    println!("🔥 Streak:            {} day(s)", summary.streak);
    println!("🎯 Goal:              {} h/day", user.fasting_goal_hours);
    println!(
        "📈 Avg (last 7 days): {} ",
        hours2readable(summary.avg_duration)
    );
    println!("✔️  Fasts at goal:     {}", summary.goal_hits);

    println!();
    println!("📊 Last 7 days:");
    for day in &summary.chart {
        let color = color_for_goal(day.hours, user.fasting_goal_hours);
        println!(
            "  {}  {}{:<24}{} {:>6.2} h",
            day.date.format("%Y-%m-%d"),
            color,
            bar(day.hours, user.fasting_goal_hours),
            RESET,
            day.hours
        );
    }
    println!();

    Ok(())
}

/// Scale a day's hours against the goal into a fixed-width bar; a full bar
/// means the goal was reached.
fn bar(hours: f64, goal_hours: f64) -> String {
    const WIDTH: usize = 24;

    let ratio = if goal_hours > 0.0 {
        (hours / goal_hours).clamp(0.0, 1.0)
    } else {
        0.0
    };
    let filled = (ratio * WIDTH as f64).round() as usize;

    let mut out = String::with_capacity(WIDTH);
    out.push_str(&"█".repeat(filled));
    out.push_str(&"░".repeat(WIDTH - filled));
    out
}
