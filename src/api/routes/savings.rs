//! Savings Routes
//!
//! - GET {base}/api/savings - All entries, most recent first
//! - GET {base}/api/savings/summary - Total, table view and chart series

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::state::AppState;
use crate::savings::{SavingsEntry, SavingsSummary};

/// GET {base}/api/savings
///
/// Always the full static set; no filtering or paging.
pub async fn list_savings(State(state): State<Arc<AppState>>) -> Json<Vec<SavingsEntry>> {
    Json(state.summary.entries.clone())
}

/// GET {base}/api/savings/summary
pub async fn savings_summary(State(state): State<Arc<AppState>>) -> Json<SavingsSummary> {
    Json(state.summary.as_ref().clone())
}
