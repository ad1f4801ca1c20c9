use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;

use crate::{
    error::AppResult,
    models::{ScoreResponse, VotesResponse},
    routes::AppState,
    services::lookups,
};

/// Release year and popularity score of a title
pub async fn score(
    State(state): State<Arc<AppState>>,
    Path(title): Path<String>,
) -> AppResult<Json<ScoreResponse>> {
    Ok(Json(lookups::score_by_title(&state.catalog, &title)?))
}

/// Vote count and average of a title
pub async fn votes(
    State(state): State<Arc<AppState>>,
    Path(title): Path<String>,
) -> AppResult<Json<VotesResponse>> {
    Ok(Json(lookups::votes_by_title(&state.catalog, &title)?))
}
