//! Unified application error type.
//! All modules (db, core, cli, utils) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

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
    // Parsing / validation
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    #[error("Invalid weekday: {0}")]
    InvalidWeekday(String),

    #[error("Invalid input: {0}")]
    Validation(String),

    // ---------------------------
    // Punch gating
    // ---------------------------
    #[error("Too far from the company premises ({distance_m} m). Move closer to punch.")]
    OutOfRange { distance_m: i64 },

    #[error("The scanned NFC tag does not match the expected one")]
    IdentityMismatch,

    #[error("An NFC scan of the office tag is required to punch here")]
    MissingIdentity,

    #[error("A punch was recorded moments ago. Wait a minute and retry.")]
    TooSoon,

    // ---------------------------
    // Lookups
    // ---------------------------
    #[error("No {0} found with id {1}")]
    NotFound(&'static str, i64),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),
}

pub type AppResult<T> = Result<T, AppError>;
