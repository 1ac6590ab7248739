//! HTTP API endpoint handlers.

use std::sync::Arc;

use axum::{Json, extract::State};

use crate::{infrastructure::dto::http::HealthDto, ui::state::AppState};

/// Health check endpoint
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthDto> {
    let room = state.get_room_state_usecase.execute().await;
    Json(HealthDto {
        status: "ok".to_string(),
        connections: room.connections,
        history: room.history_len,
    })
}
