//! Savings domain
//!
//! - **types**: `SavingsEntry` and `ChartPoint`
//! - **transform**: table view, cumulative chart series and total
//! - **data**: built-in dataset and JSON file loader
//! - **error**: error types
//!
//! # Example
//!
//! ```rust
//! use savings_dashboard::savings::{SavingsEntry, SavingsSummary};
//!
//! let entries = vec![
//!     SavingsEntry::new("2025-01-24", 420_000_000, "Contracts", "https://example.com/1").unwrap(),
//!     SavingsEntry::new("2025-01-25", 145_000_000, "More contracts", "https://example.com/2").unwrap(),
//! ];
//!
//! let summary = SavingsSummary::from_entries(&entries);
//! assert_eq!(summary.total, 565_000_000);
//! assert_eq!(summary.series.last().unwrap().amount, 565_000_000);
//! ```

pub mod data;
pub mod error;
pub mod transform;
pub mod types;

pub use data::{builtin_entries, date_span, load_entries, resolve_entries};
pub use error::{SavingsError, SavingsResult};
pub use transform::{chart_series, table_view, total_savings, SavingsSummary};
pub use types::{parse_date, ChartPoint, SavingsEntry, DATE_FORMAT};
