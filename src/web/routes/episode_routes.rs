use axum::{extract::State, routing::get, Json, Router};
use serde_json::{json, Value};
use std::sync::Arc;

use crate::db::models::Episode;
use crate::db::services::episode_service;
use crate::web::{AppError, AppState};

async fn list_episodes_handler(
    State(app_state): State<Arc<AppState>>,
) -> Result<Json<Vec<Episode>>, AppError> {
    let episodes = episode_service::list_episodes(&app_state.pool).await?;
    Ok(Json(episodes))
}

/// The engine's after-insert trigger updates the parent show's episode count.
async fn create_episode_handler(
    State(app_state): State<Arc<AppState>>,
    Json(payload): Json<Episode>,
) -> Result<Json<Value>, AppError> {
    episode_service::create_episode(&app_state.pool, &payload).await?;
    Ok(Json(
        json!({ "message": "Episode added! Show episode count updated by trigger." }),
    ))
}

pub fn episode_router() -> Router<Arc<AppState>> {
    Router::new().route("/", get(list_episodes_handler).post(create_episode_handler))
}
