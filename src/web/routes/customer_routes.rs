use axum::{
    extract::{Path, State},
    routing::{delete, get},
    Json, Router,
};
use serde_json::{json, Value};
use std::sync::Arc;

use crate::db::models::{Customer, NewCustomer};
use crate::db::services::customer_service;
use crate::web::{AppError, AppState};

// --- Route Handlers ---

async fn list_customers_handler(
    State(app_state): State<Arc<AppState>>,
) -> Result<Json<Vec<Customer>>, AppError> {
    let customers = customer_service::list_customers(&app_state.pool).await?;
    Ok(Json(customers))
}

async fn create_customer_handler(
    State(app_state): State<Arc<AppState>>,
    Json(payload): Json<NewCustomer>,
) -> Result<Json<Value>, AppError> {
    customer_service::create_customer(&app_state.pool, &payload).await?;
    Ok(Json(json!({ "message": "Customer added successfully!" })))
}

async fn delete_customer_handler(
    State(app_state): State<Arc<AppState>>,
    Path(customer_id): Path<String>,
) -> Result<Json<Value>, AppError> {
    customer_service::delete_customer(&app_state.pool, &customer_id).await?;
    Ok(Json(json!({ "message": "Customer deleted!" })))
}

// --- Router ---

pub fn customer_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(list_customers_handler).post(create_customer_handler))
        .route("/{id}", delete(delete_customer_handler))
}
