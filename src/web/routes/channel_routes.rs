use axum::{
    extract::{Path, State},
    routing::{delete, get},
    Json, Router,
};
use serde_json::{json, Value};
use std::sync::Arc;

use crate::db::models::Channel;
use crate::db::services::channel_service;
use crate::web::{AppError, AppState};

async fn list_channels_handler(
    State(app_state): State<Arc<AppState>>,
) -> Result<Json<Vec<Channel>>, AppError> {
    let channels = channel_service::list_channels(&app_state.pool).await?;
    Ok(Json(channels))
}

async fn create_channel_handler(
    State(app_state): State<Arc<AppState>>,
    Json(payload): Json<Channel>,
) -> Result<Json<Value>, AppError> {
    channel_service::create_channel(&app_state.pool, &payload).await?;
    Ok(Json(json!({ "message": "Channel added!" })))
}

async fn delete_channel_handler(
    State(app_state): State<Arc<AppState>>,
    Path(channel_id): Path<String>,
) -> Result<Json<Value>, AppError> {
    channel_service::delete_channel(&app_state.pool, &channel_id).await?;
    Ok(Json(json!({ "message": "Channel deleted!" })))
}

pub fn channel_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(list_channels_handler).post(create_channel_handler))
        .route("/{id}", delete(delete_channel_handler))
}
