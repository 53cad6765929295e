//! Health check handler

use crate::AppState;
use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    status: &'static str,
    database: &'static str,
    cache: &'static str,
}

/// Probes both external systems; only a database failure reports 503
pub async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let database_up = match state.db.ping().await {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!("Database health check failed: {}", e);
            false
        }
    };

    let cache_up = match state.cache.ping().await {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!("Cache health check failed: {}", e);
            false
        }
    };

    let code = if database_up {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (
        code,
        Json(HealthResponse {
            status: if database_up && cache_up {
                "ok"
            } else {
                "degraded"
            },
            database: if database_up { "up" } else { "down" },
            cache: if cache_up { "up" } else { "down" },
        }),
    )
}
