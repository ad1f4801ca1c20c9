use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;

use crate::{
    error::AppResult,
    models::{MonthCountResponse, WeekdayCountResponse},
    routes::AppState,
    services::lookups,
};

pub async fn by_month(
    State(state): State<Arc<AppState>>,
    Path(month): Path<String>,
) -> AppResult<Json<MonthCountResponse>> {
    Ok(Json(lookups::count_by_month(&state.catalog, &month)?))
}

pub async fn by_weekday(
    State(state): State<Arc<AppState>>,
    Path(day): Path<String>,
) -> AppResult<Json<WeekdayCountResponse>> {
    Ok(Json(lookups::count_by_weekday(&state.catalog, &day)?))
}
