use axum::{extract::State, routing::post, Json, Router};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

use crate::db::services::routine_service;
use crate::web::{AppError, AppState};

// --- Request Structs ---
//
// Procedure payloads use the routines' own lowercase parameter names, unlike
// the entity endpoints which use column names. Field order here mirrors the
// positional argument order of each routine.

#[derive(Deserialize)]
pub struct NewCustomerSubscriptionRequest {
    customer_id: String,
    first_name: String,
    phone_no: String,
    city: String,
    date_of_birth: NaiveDate,
    package_id: String,
    subscription_id: String,
}

#[derive(Deserialize)]
pub struct RecordPaymentRequest {
    billing_id: String,
    customer_id: String,
    amount: Decimal,
    discount: Decimal,
}

#[derive(Deserialize)]
pub struct ChannelsByCityRequest {
    category: String,
    city: String,
}

// --- Route Handlers ---

async fn new_customer_subscription_handler(
    State(app_state): State<Arc<AppState>>,
    Json(payload): Json<NewCustomerSubscriptionRequest>,
) -> Result<Json<Value>, AppError> {
    let results = routine_service::new_customer_subscription(
        &app_state.pool,
        &payload.customer_id,
        &payload.first_name,
        &payload.phone_no,
        &payload.city,
        payload.date_of_birth,
        &payload.package_id,
        &payload.subscription_id,
    )
    .await?;
    Ok(Json(json!({
        "message": "New customer and subscription created via stored procedure.",
        "results": results,
    })))
}

async fn record_payment_handler(
    State(app_state): State<Arc<AppState>>,
    Json(payload): Json<RecordPaymentRequest>,
) -> Result<Json<Value>, AppError> {
    let results = routine_service::record_payment(
        &app_state.pool,
        &payload.billing_id,
        &payload.customer_id,
        payload.amount,
        payload.discount,
    )
    .await?;
    Ok(Json(json!({
        "message": "Payment recorded via stored procedure.",
        "results": results,
    })))
}

async fn channels_by_city_handler(
    State(app_state): State<Arc<AppState>>,
    Json(payload): Json<ChannelsByCityRequest>,
) -> Result<Json<Value>, AppError> {
    let results = routine_service::channels_by_category_and_city(
        &app_state.pool,
        &payload.category,
        &payload.city,
    )
    .await?;
    Ok(Json(json!({ "results": results })))
}

// --- Router ---

pub fn procedure_router() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/new-customer-subscription",
            post(new_customer_subscription_handler),
        )
        .route("/record-payment", post(record_payment_handler))
        .route("/channels-by-city", post(channels_by_city_handler))
}
