pub mod balance;
pub mod geofence;
pub mod logcmd;
pub mod nfc;
pub mod notify;
pub mod policy;
pub mod punch;
pub mod reminder;
pub mod sessions;
pub mod sweep;
