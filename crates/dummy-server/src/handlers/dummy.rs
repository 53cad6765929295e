//! Dummy data CRUD handlers

use crate::models::DummyData;
use crate::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateDummyDataRequest {
    name: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateDummyDataRequest {
    name: String,
}

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<DummyData>>, StatusCode> {
    match state.dummy_service.list().await {
        Ok(items) => Ok(Json(items)),
        Err(e) => {
            tracing::error!("Failed to list dummy data: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

pub async fn create(
    State(state): State<AppState>,
    Json(req_body): Json<CreateDummyDataRequest>,
) -> Result<Json<DummyData>, StatusCode> {
    match state.dummy_service.create(&req_body.name).await {
        Ok(created) => Ok(Json(created)),
        Err(e) => {
            tracing::error!("Failed to create dummy data: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(req_body): Json<UpdateDummyDataRequest>,
) -> Result<StatusCode, StatusCode> {
    match state.dummy_service.update(id, &req_body.name).await {
        Ok(true) => Ok(StatusCode::OK),
        Ok(false) => Err(StatusCode::NOT_FOUND),
        Err(e) => {
            tracing::error!("Failed to update dummy data {}: {}", id, e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, StatusCode> {
    match state.dummy_service.delete(id).await {
        Ok(true) => Ok(StatusCode::OK),
        Ok(false) => Err(StatusCode::NOT_FOUND),
        Err(e) => {
            tracing::error!("Failed to delete dummy data {}: {}", id, e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
