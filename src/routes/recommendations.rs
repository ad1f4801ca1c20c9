use axum::{
    extract::{Path, State},
    Extension, Json,
};
use std::sync::Arc;

use crate::{
    error::{AppError, AppResult},
    middleware::request_id::RequestId,
    routes::AppState,
    services::recommendations,
};

/// Handler for the recommendation endpoint
///
/// The vector space is fit on the blocking pool; each request builds and
/// drops its own.
pub async fn recommend(
    State(state): State<Arc<AppState>>,
    Extension(request_id): Extension<RequestId>,
    Path(title): Path<String>,
) -> AppResult<Json<Vec<String>>> {
    tracing::info!(request_id = %request_id, title = %title, "Processing recommendation request");

    let catalog = state.catalog.clone();
    let recommendation = tokio::task::spawn_blocking(move || {
        let corpus = catalog.corpus();
        recommendations::recommend(&title, &corpus)
    })
    .await
    .map_err(|e| AppError::Internal(e.to_string()))?
    .map_err(|e| {
        tracing::info!(request_id = %request_id, error = %e, "Recommendation failed");
        AppError::from(e)
    })?;

    tracing::info!(
        request_id = %request_id,
        returned = recommendation.len(),
        "Recommendation completed"
    );

    Ok(Json(recommendation.into_titles()))
}
