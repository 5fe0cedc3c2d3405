pub mod balance;
pub mod company;
pub mod employee;
pub mod incident;
pub mod punch;
pub mod punch_kind;
pub mod reminder;
pub mod schedule;
pub mod session;
