pub mod balance;
pub mod company;
pub mod config;
pub mod employee;
pub mod export;
pub mod incident;
pub mod init;
pub mod log;
pub mod punch;
pub mod remind;
pub mod schedule;
pub mod sessions;
pub mod sweep;
