use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Validate a "YYYY-MM" reference month, normalizing nothing.
pub fn parse_month(s: &str) -> AppResult<String> {
    if s.len() == 7
        && let (Ok(_), Ok(m)) = (s[0..4].parse::<i32>(), s[5..7].parse::<u32>())
        && s.as_bytes()[4] == b'-'
        && (1..=12).contains(&m)
    {
        return Ok(s.to_string());
    }
    Err(AppError::InvalidMonth(s.to_string()))
}

/// Current "YYYY-MM" key, used as the default for weight entries.
pub fn current_month() -> String {
    today().format("%Y-%m").to_string()
}

/// Parse a period expression into inclusive date bounds.
///
/// Supports:
/// - YYYY
/// - YYYY-MM
/// - YYYY-MM-DD
/// - YYYY:YYYY
/// - YYYY-MM:YYYY-MM
/// - YYYY-MM-DD:YYYY-MM-DD
pub fn parse_period(p: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    if let Some((start_raw, end_raw)) = p.split_once(':') {
        let start = start_raw.trim();
        let end = end_raw.trim();

        if start.is_empty() || end.is_empty() || start.len() != end.len() {
            return Err(AppError::InvalidDate(p.to_string()));
        }

        let (s1, _) = parse_single(start)?;
        let (_, e2) = parse_single(end)?;
        Ok((s1, e2))
    } else {
        parse_single(p)
    }
}

/// Bounds of a single period atom (year, month or day).
fn parse_single(p: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    match p.len() {
        // YYYY
        4 => {
            let y: i32 = p
                .parse()
                .map_err(|_| AppError::InvalidDate(p.to_string()))?;
            let d1 = NaiveDate::from_ymd_opt(y, 1, 1)
                .ok_or_else(|| AppError::InvalidDate(p.to_string()))?;
            let d2 = NaiveDate::from_ymd_opt(y, 12, 31)
                .ok_or_else(|| AppError::InvalidDate(p.to_string()))?;
            Ok((d1, d2))
        }
        // YYYY-MM
        7 => {
            let y: i32 = p[0..4]
                .parse()
                .map_err(|_| AppError::InvalidDate(p.to_string()))?;
            let m: u32 = p[5..7]
                .parse()
                .map_err(|_| AppError::InvalidDate(p.to_string()))?;
            let last =
                month_last_day(y, m).ok_or_else(|| AppError::InvalidDate(p.to_string()))?;
            let d1 = NaiveDate::from_ymd_opt(y, m, 1)
                .ok_or_else(|| AppError::InvalidDate(p.to_string()))?;
            let d2 = NaiveDate::from_ymd_opt(y, m, last)
                .ok_or_else(|| AppError::InvalidDate(p.to_string()))?;
            Ok((d1, d2))
        }
        // YYYY-MM-DD
        10 => {
            let d = NaiveDate::parse_from_str(p, "%Y-%m-%d")
                .map_err(|_| AppError::InvalidDate(p.to_string()))?;
            Ok((d, d))
        }
        _ => Err(AppError::InvalidDate(p.to_string())),
    }
}

fn month_last_day(y: i32, m: u32) -> Option<u32> {
    match m {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => Some(31),
        4 | 6 | 9 | 11 => Some(30),
        2 => {
            let leap = (y % 4 == 0 && y % 100 != 0) || (y % 400 == 0);
            Some(if leap { 29 } else { 28 })
        }
        _ => None,
    }
}
