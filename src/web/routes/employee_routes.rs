use axum::{
    extract::{Path, State},
    routing::{delete, get},
    Json, Router,
};
use serde_json::{json, Value};
use std::sync::Arc;

use crate::db::models::Employee;
use crate::db::services::employee_service;
use crate::web::{AppError, AppState};

async fn list_employees_handler(
    State(app_state): State<Arc<AppState>>,
) -> Result<Json<Vec<Employee>>, AppError> {
    let employees = employee_service::list_employees(&app_state.pool).await?;
    Ok(Json(employees))
}

async fn create_employee_handler(
    State(app_state): State<Arc<AppState>>,
    Json(payload): Json<Employee>,
) -> Result<Json<Value>, AppError> {
    employee_service::create_employee(&app_state.pool, &payload).await?;
    Ok(Json(json!({ "message": "Employee added!" })))
}

/// Fails with the engine's foreign-key message while installations still
/// reference this employee.
async fn delete_employee_handler(
    State(app_state): State<Arc<AppState>>,
    Path(employee_id): Path<String>,
) -> Result<Json<Value>, AppError> {
    employee_service::delete_employee(&app_state.pool, &employee_id).await?;
    Ok(Json(json!({ "message": "Employee deleted!" })))
}

pub fn employee_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(list_employees_handler).post(create_employee_handler))
        .route("/{id}", delete(delete_employee_handler))
}
