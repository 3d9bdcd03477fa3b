// src/feed/stats.rs

//! Per-user statistics over fetched projects.

use chrono::{DateTime, Datelike, NaiveDate, TimeZone};

use crate::models::{Project, Stats};

/// Compute statistics for a user's projects as of `now`.
///
/// `month` counts projects created in the same calendar year and month as
/// `now`, judged in `now`'s time zone; projects without a creation time are
/// counted in `total` only.
pub fn compute_stats<Tz: TimeZone>(
    projects: &[Project],
    now: DateTime<Tz>,
    minutes_per_project: u32,
) -> Stats {
    let tz = now.timezone();
    let total = projects.len() as u32;
    let month = projects
        .iter()
        .filter_map(|p| p.created_at)
        .map(|created| created.with_timezone(&tz))
        .filter(|created| created.year() == now.year() && created.month() == now.month())
        .count() as u32;

    let days = days_in_month(now.year(), now.month());
    Stats {
        total,
        month,
        active_min: total.saturating_mul(minutes_per_project),
        avg_per_day: round2(f64::from(month) / f64::from(days)),
    }
}

/// Number of days in the given month (1-12).
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    match (
        NaiveDate::from_ymd_opt(year, month, 1),
        NaiveDate::from_ymd_opt(next_year, next_month, 1),
    ) {
        (Some(first), Some(next)) => (next - first).num_days() as u32,
        _ => 30,
    }
}

/// Round to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
