//! # Savings Dashboard
//!
//! A small Rust web service that shows reported savings as a headline
//! total, a cumulative line chart and a scrollable table, and serves the
//! same data as JSON.
//!
//! ## Modules
//!
//! - [`savings`]: entries, the dataset and the table/chart transform
//! - [`render`]: HTML and SVG rendering of the dashboard
//! - [`api`]: HTTP server with Axum
//! - [`export`]: static site export
//! - [`config`]: TOML configuration with environment overrides
//!
//! ## Quick Start
//!
//! ```rust
//! use savings_dashboard::savings::{builtin_entries, SavingsSummary};
//!
//! let summary = SavingsSummary::from_entries(&builtin_entries());
//!
//! // most recent first for the table
//! assert!(summary.entries.windows(2).all(|w| w[0].date >= w[1].date));
//!
//! // running total for the chart ends at the headline figure
//! assert_eq!(summary.series.last().map(|p| p.amount), Some(summary.total));
//! ```

pub mod api;
pub mod config;
pub mod export;
pub mod render;
pub mod savings;

// Re-export top-level types for convenience
pub use savings::{
    chart_series, table_view, total_savings, ChartPoint, SavingsEntry, SavingsError,
    SavingsResult, SavingsSummary,
};

pub use render::{render_chart, render_page, FixedSizeList, TableMode};

pub use api::{build_router, serve, ApiConfig, ApiError, AppState};

pub use export::{export_site, ExportError};

pub use config::{Config, ConfigError, DataConfig, LoggingConfig, ServerConfig};
