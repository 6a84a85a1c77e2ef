use axum::{extract::State, routing::get, Json, Router};
use serde_json::{json, Value};
use std::sync::Arc;

use crate::db::models::{NewSubscription, Subscription};
use crate::db::services::subscription_service;
use crate::web::{AppError, AppState};

/// Every listed row carries a `Status` field computed by the engine's
/// `GetSubscriptionStatus` function at query time.
async fn list_subscriptions_handler(
    State(app_state): State<Arc<AppState>>,
) -> Result<Json<Vec<Subscription>>, AppError> {
    let subscriptions = subscription_service::list_subscriptions(&app_state.pool).await?;
    Ok(Json(subscriptions))
}

async fn create_subscription_handler(
    State(app_state): State<Arc<AppState>>,
    Json(payload): Json<NewSubscription>,
) -> Result<Json<Value>, AppError> {
    subscription_service::create_subscription(&app_state.pool, &payload).await?;
    Ok(Json(json!({ "message": "Subscription created!" })))
}

pub fn subscription_router() -> Router<Arc<AppState>> {
    Router::new().route(
        "/",
        get(list_subscriptions_handler).post(create_subscription_handler),
    )
}
