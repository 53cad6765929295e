//! Slow query diagnostics handler

use crate::models::SlowQuery;
use crate::AppState;
use axum::{extract::State, http::StatusCode, Json};

pub async fn slowest_queries(
    State(state): State<AppState>,
) -> Result<Json<Vec<SlowQuery>>, StatusCode> {
    match state.diagnostics.slowest_queries().await {
        Ok(queries) => Ok(Json(queries)),
        Err(e) => {
            tracing::error!("Failed to collect slowest queries: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
