//! Unified application error type.
//! All modules (db, core, cli, utils) return AppError to keep the error
//! handling consistent and easy to manage.

use chrono::NaiveDateTime;
use std::io;
use thiserror::Error;

/// Rejection reasons produced by the fasting interval validator.
///
/// Every reason is recoverable by the user: the CLI reports the message
/// and the operation can be retried with corrected bounds.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("End time must be later than start time.")]
    ChronologyInvalid,

    #[error("An active fast already exists. End it before starting a new one.")]
    ActiveFastExists,

    #[error("This fast overlaps the active fast started at {0}.")]
    OverlapsActiveFast(NaiveDateTime),

    #[error("This fast overlaps the fast from {start} to {end}.")]
    OverlapsClosedInterval {
        start: NaiveDateTime,
        end: NaiveDateTime,
    },
}

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    // ---------------------------
    // Domain validation
    // ---------------------------
    #[error("{0}")]
    Validation(#[from] ValidationError),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid date/time format: {0} (expected YYYY-MM-DD HH:MM)")]
    InvalidDateTime(String),

    #[error("Invalid reference month: {0} (expected YYYY-MM)")]
    InvalidMonth(String),

    #[error("Invalid level: {0} (expected 1, 2 or 3)")]
    InvalidLevel(String),

    #[error("Invalid fasting type: {0}")]
    InvalidFastingType(String),

    #[error("Invalid goal: {0} (must be greater than zero)")]
    InvalidGoal(f64),

    #[error("Invalid weight: {0} (must be greater than zero)")]
    InvalidWeight(f64),

    // ---------------------------
    // User errors
    // ---------------------------
    #[error("No user selected. Pass --user or set default_user in the config file.")]
    NoUserSelected,

    #[error("Unknown user: {0}")]
    UnknownUser(String),

    #[error("A user with email {0} already exists")]
    UserExists(String),

    // ---------------------------
    // Logic errors
    // ---------------------------
    #[error("No active fast to end")]
    NoActiveFast,

    #[error("No fasting record with id {0}")]
    RecordNotFound(i64),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
