use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use std::sync::Arc;

use crate::db::models::PackageSummary;
use crate::db::services::routine_service;
use crate::web::{AppError, AppState};

// Read-only wrappers over the engine's scalar functions and its
// PackageSummary view. An unknown id yields a null scalar, not an error;
// the engine decides.

async fn subscription_status_handler(
    State(app_state): State<Arc<AppState>>,
    Path(subscription_id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let status = routine_service::subscription_status(&app_state.pool, &subscription_id).await?;
    Ok(Json(json!({ "status": status })))
}

async fn package_channel_count_handler(
    State(app_state): State<Arc<AppState>>,
    Path(package_id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let count = routine_service::package_channel_count(&app_state.pool, &package_id).await?;
    Ok(Json(json!({ "count": count })))
}

async fn has_active_installation_handler(
    State(app_state): State<Arc<AppState>>,
    Path(customer_id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let installed = routine_service::has_active_installation(&app_state.pool, &customer_id).await?;
    Ok(Json(json!({ "installed": installed })))
}

async fn package_summary_handler(
    State(app_state): State<Arc<AppState>>,
) -> Result<Json<Vec<PackageSummary>>, AppError> {
    let summary = routine_service::package_summary(&app_state.pool).await?;
    Ok(Json(summary))
}

pub fn function_router() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/api/functions/subscription-status/{id}",
            get(subscription_status_handler),
        )
        .route(
            "/api/functions/package-channel-count/{id}",
            get(package_channel_count_handler),
        )
        .route(
            "/api/functions/has-active-installation/{id}",
            get(has_active_installation_handler),
        )
        .route("/api/views/package-summary", get(package_summary_handler))
}
