/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";
pub const MAGENTA: &str = "\x1b[35m";

/// Goal color:
/// total ≥ goal → green
/// total > 0 → yellow
/// 0 → grey
pub fn color_for_goal(total_hours: f64, goal_hours: f64) -> &'static str {
    if total_hours >= goal_hours {
        GREEN
    } else if total_hours > 0.0 {
        YELLOW
    } else {
        GREY
    }
}

