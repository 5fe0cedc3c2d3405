pub mod date;
pub mod formatting;
pub mod path;
pub mod time;

// Re-exports for the most commonly used helpers
pub use formatting::format_secs;
pub use formatting::secs_to_hours;
