use axum::{extract::State, routing::get, Json, Router};
use serde_json::{json, Value};
use std::sync::Arc;

use crate::db::models::Installation;
use crate::db::services::installation_service;
use crate::web::{AppError, AppState};

async fn list_installations_handler(
    State(app_state): State<Arc<AppState>>,
) -> Result<Json<Vec<Installation>>, AppError> {
    let installations = installation_service::list_installations(&app_state.pool).await?;
    Ok(Json(installations))
}

/// The engine's before-insert trigger validates `Employee_Id`; an unknown
/// employee surfaces as a 500 carrying the trigger's message.
async fn create_installation_handler(
    State(app_state): State<Arc<AppState>>,
    Json(payload): Json<Installation>,
) -> Result<Json<Value>, AppError> {
    installation_service::create_installation(&app_state.pool, &payload).await?;
    Ok(Json(
        json!({ "message": "Installation scheduled! Employee validated by trigger." }),
    ))
}

pub fn installation_router() -> Router<Arc<AppState>> {
    Router::new().route(
        "/",
        get(list_installations_handler).post(create_installation_handler),
    )
}
