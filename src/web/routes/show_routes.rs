use axum::{extract::State, routing::get, Json, Router};
use serde_json::{json, Value};
use std::sync::Arc;

use crate::db::models::{NewShow, Show};
use crate::db::services::show_service;
use crate::web::{AppError, AppState};

async fn list_shows_handler(
    State(app_state): State<Arc<AppState>>,
) -> Result<Json<Vec<Show>>, AppError> {
    let shows = show_service::list_shows(&app_state.pool).await?;
    Ok(Json(shows))
}

async fn create_show_handler(
    State(app_state): State<Arc<AppState>>,
    Json(payload): Json<NewShow>,
) -> Result<Json<Value>, AppError> {
    show_service::create_show(&app_state.pool, &payload).await?;
    Ok(Json(json!({ "message": "Show created!" })))
}

pub fn show_router() -> Router<Arc<AppState>> {
    Router::new().route("/", get(list_shows_handler).post(create_show_handler))
}
