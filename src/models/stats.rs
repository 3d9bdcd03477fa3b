//! Per-user project statistics.

use serde::{Deserialize, Serialize};

/// Statistics derived from a user's projects. Never persisted.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    /// Number of projects returned for the user
    pub total: u32,

    /// Projects created in the current calendar month
    pub month: u32,

    /// Synthetic activity minutes (`total` times a fixed per-project constant)
    pub active_min: u32,

    /// `month / days_in_month`, rounded to two decimals
    pub avg_per_day: f64,
}
