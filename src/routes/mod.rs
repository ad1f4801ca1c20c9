use axum::{http::StatusCode, middleware, routing::get, Json, Router};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::middleware::request_id::{make_span_with_request_id, request_id_middleware};
pub use crate::state::AppState;

pub mod people;
pub mod recommendations;
pub mod releases;
pub mod titles;

/// Creates the application router with all routes
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(welcome))
        .route("/health", get(health_check))
        .merge(api_routes())
        .with_state(state)
        .layer(
            // Request IDs are assigned before the trace span is created
            ServiceBuilder::new()
                .layer(middleware::from_fn(request_id_middleware))
                .layer(TraceLayer::new_for_http().make_span_with(make_span_with_request_id)),
        )
}

fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/releases/month/:month", get(releases::by_month))
        .route("/releases/weekday/:day", get(releases::by_weekday))
        .route("/titles/:title/score", get(titles::score))
        .route("/titles/:title/votes", get(titles::votes))
        .route("/actors/:name", get(people::actor))
        .route("/directors/:name", get(people::director))
        .route("/recommendation/:title", get(recommendations::recommend))
}

async fn welcome() -> Json<Value> {
    Json(json!({ "message": "Movie catalog and recommendation API" }))
}

/// Health check endpoint
async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}
