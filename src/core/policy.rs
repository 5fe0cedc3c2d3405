//! Tunable thresholds of the presence engine, gathered in one struct instead
//! of scattered literals. Defaults match the production values.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Policy {
    /// Anti double-tap cooldown between punches of one employee.
    #[serde(default = "default_debounce_secs")]
    pub debounce_secs: i64,

    /// An entry open longer than this is a forgotten shift: the next punch
    /// starts a fresh one and files an OLVIDO incident.
    #[serde(default = "default_zombie_cutoff_hours")]
    pub zombie_cutoff_hours: i64,

    /// Closed sessions longer than this are flagged warning-long.
    #[serde(default = "default_long_shift_hours")]
    pub long_shift_hours: i64,

    /// Extra meters tolerated on top of the company radius (GPS jitter).
    #[serde(default = "default_geofence_margin_m")]
    pub geofence_margin_m: f64,

    /// Courtesy window after the scheduled entry/exit before reminding.
    #[serde(default = "default_grace_minutes")]
    pub grace_minutes: i64,

    /// Radius applied when a company has none configured.
    #[serde(default = "default_radius_m")]
    pub default_radius_m: i64,
}

fn default_debounce_secs() -> i64 {
    60
}
fn default_zombie_cutoff_hours() -> i64 {
    16
}
fn default_long_shift_hours() -> i64 {
    12
}
fn default_geofence_margin_m() -> f64 {
    10.0
}
fn default_grace_minutes() -> i64 {
    15
}
fn default_radius_m() -> i64 {
    100
}

impl Default for Policy {
    fn default() -> Self {
        Self {
            debounce_secs: default_debounce_secs(),
            zombie_cutoff_hours: default_zombie_cutoff_hours(),
            long_shift_hours: default_long_shift_hours(),
            geofence_margin_m: default_geofence_margin_m(),
            grace_minutes: default_grace_minutes(),
            default_radius_m: default_radius_m(),
        }
    }
}

impl Policy {
    pub fn debounce(&self) -> chrono::Duration {
        chrono::Duration::seconds(self.debounce_secs)
    }

    pub fn zombie_cutoff(&self) -> chrono::Duration {
        chrono::Duration::hours(self.zombie_cutoff_hours)
    }

    pub fn long_shift(&self) -> chrono::Duration {
        chrono::Duration::hours(self.long_shift_hours)
    }

    pub fn grace(&self) -> chrono::Duration {
        chrono::Duration::minutes(self.grace_minutes)
    }
}
