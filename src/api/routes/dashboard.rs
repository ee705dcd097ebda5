//! Dashboard Routes
//!
//! - GET {base}/ - HTML dashboard, optional `?offset=N` scroll position
//! - GET {base}/rows - Table rows for a scroll offset, as an HTML fragment

use axum::{
    extract::{Query, State},
    response::Html,
};
use std::sync::Arc;

use crate::api::dto::ScrollQuery;
use crate::api::state::AppState;
use crate::render::{render_page, render_rows, TableMode};

/// GET {base}/
pub async fn dashboard(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ScrollQuery>,
) -> Html<String> {
    let mode = TableMode::Virtualized {
        offset: query.offset(),
        rows_url: state.rows_url(),
    };

    Html(render_page(&state.summary, &state.config.list, &mode))
}

/// GET {base}/rows
pub async fn rows(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ScrollQuery>,
) -> Html<String> {
    let offset = query.offset();
    tracing::debug!(offset, "Rendering row window");

    Html(render_rows(&state.summary.entries, &state.config.list, offset))
}
