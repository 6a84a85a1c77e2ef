use axum::{extract::State, routing::get, Json, Router};
use serde_json::{json, Value};
use std::sync::Arc;

use crate::db::models::Billing;
use crate::db::services::billing_service;
use crate::web::{AppError, AppState};

async fn list_billing_handler(
    State(app_state): State<Arc<AppState>>,
) -> Result<Json<Vec<Billing>>, AppError> {
    let billing = billing_service::list_billing(&app_state.pool).await?;
    Ok(Json(billing))
}

async fn create_billing_handler(
    State(app_state): State<Arc<AppState>>,
    Json(payload): Json<Billing>,
) -> Result<Json<Value>, AppError> {
    billing_service::create_billing(&app_state.pool, &payload).await?;
    Ok(Json(json!({ "message": "Billing record created!" })))
}

pub fn billing_router() -> Router<Arc<AppState>> {
    Router::new().route("/", get(list_billing_handler).post(create_billing_handler))
}
