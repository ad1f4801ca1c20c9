use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;

use crate::{
    error::AppResult,
    models::{ActorSummary, DirectorSummary},
    routes::AppState,
    services::lookups,
};

/// Film count and return for an actor (substring match on the cast list)
pub async fn actor(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> AppResult<Json<ActorSummary>> {
    Ok(Json(lookups::actor_summary(&state.catalog, &name)?))
}

/// Total return and filmography for a director (exact name match)
pub async fn director(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> AppResult<Json<DirectorSummary>> {
    Ok(Json(lookups::director_summary(&state.catalog, &name)?))
}
