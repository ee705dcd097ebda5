//! Savings transform
//!
//! Turns an unordered set of entries into the two views the dashboard shows:
//!
//! ```text
//! entries ─┬─ sort desc ───────────────────────────► table view
//!          └─ sort asc ── running sum ── merge same-day ► chart series
//! ```
//!
//! Dates compare as calendar dates, which for `YYYY-MM-DD` is the same
//! order as comparing the strings.

use serde::Serialize;

use super::types::{ChartPoint, SavingsEntry};

/// Entries ordered most recent first
///
/// The sort is stable, so entries sharing a date stay adjacent in input order.
pub fn table_view(entries: &[SavingsEntry]) -> Vec<SavingsEntry> {
    let mut sorted = entries.to_vec();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));
    sorted
}

/// Cumulative series ordered oldest first
///
/// Entries on the same date collapse into one point holding the running
/// total after the last of them.
pub fn chart_series(entries: &[SavingsEntry]) -> Vec<ChartPoint> {
    let mut sorted: Vec<&SavingsEntry> = entries.iter().collect();
    sorted.sort_by(|a, b| a.date.cmp(&b.date));

    let mut series: Vec<ChartPoint> = Vec::with_capacity(sorted.len());
    let mut running: u64 = 0;

    for entry in sorted {
        running = running.saturating_add(entry.amount);

        match series.last_mut() {
            Some(last) if last.date == entry.date => last.amount = running,
            _ => series.push(ChartPoint::new(entry.date, running)),
        }
    }

    series
}

/// Sum of every amount, independent of order
pub fn total_savings(entries: &[SavingsEntry]) -> u64 {
    entries
        .iter()
        .fold(0u64, |acc, e| acc.saturating_add(e.amount))
}

/// Everything the dashboard needs, computed once
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SavingsSummary {
    /// Headline figure
    pub total: u64,
    /// Table view, most recent first
    pub entries: Vec<SavingsEntry>,
    /// Cumulative series, oldest first
    pub series: Vec<ChartPoint>,
}

impl SavingsSummary {
    pub fn from_entries(entries: &[SavingsEntry]) -> Self {
        Self {
            total: total_savings(entries),
            entries: table_view(entries),
            series: chart_series(entries),
        }
    }

    /// Number of distinct reporting days
    pub fn reporting_days(&self) -> usize {
        self.series.len()
    }
}
