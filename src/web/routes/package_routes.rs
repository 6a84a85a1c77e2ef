use axum::{extract::State, routing::get, Json, Router};
use serde_json::{json, Value};
use std::sync::Arc;

use crate::db::models::Package;
use crate::db::services::package_service;
use crate::web::{AppError, AppState};

// Packages expose no delete; retiring a plan is out of scope here.

async fn list_packages_handler(
    State(app_state): State<Arc<AppState>>,
) -> Result<Json<Vec<Package>>, AppError> {
    let packages = package_service::list_packages(&app_state.pool).await?;
    Ok(Json(packages))
}

async fn create_package_handler(
    State(app_state): State<Arc<AppState>>,
    Json(payload): Json<Package>,
) -> Result<Json<Value>, AppError> {
    package_service::create_package(&app_state.pool, &payload).await?;
    Ok(Json(json!({ "message": "Package added!" })))
}

pub fn package_router() -> Router<Arc<AppState>> {
    Router::new().route("/", get(list_packages_handler).post(create_package_handler))
}
