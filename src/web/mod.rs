use axum::{http::Method, routing::get, Router};
use sqlx::MySqlPool;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

pub mod error;
pub mod routes;

pub use error::{AppError, ErrorKind};

use routes::*;

/// Shared state: one pool to the external engine, acquired per request and
/// released on every exit path. No other cross-request state exists.
#[derive(Clone)]
pub struct AppState {
    pub pool: MySqlPool,
}

async fn health_check_handler() -> &'static str {
    "OK"
}

pub fn create_router(pool: MySqlPool) -> Router {
    let app_state = Arc::new(AppState { pool });

    // The dashboard is served from a different origin; no auth anywhere.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(vec![Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers(Any);

    Router::new()
        .route("/api/health", get(health_check_handler))
        .nest("/api/customers", customer_routes::customer_router())
        .nest("/api/employees", employee_routes::employee_router())
        .nest("/api/packages", package_routes::package_router())
        .nest(
            "/api/subscriptions",
            subscription_routes::subscription_router(),
        )
        .nest("/api/channels", channel_routes::channel_router())
        .nest("/api/shows", show_routes::show_router())
        .nest("/api/episodes", episode_routes::episode_router())
        .nest("/api/billing", billing_routes::billing_router())
        .nest(
            "/api/installations",
            installation_routes::installation_router(),
        )
        .nest("/api/procedures", procedure_routes::procedure_router())
        .merge(function_routes::function_router())
        .with_state(app_state)
        .layer(cors)
}
