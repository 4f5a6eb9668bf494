use axum::extract::{Path, Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::api::{parse_query_param, AppState};
use crate::domain::{TimeMs, TrackId, YearMonth};
use crate::error::AppError;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyStatsQuery {
    pub year: Option<String>,
    pub month: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyStatsResponse {
    pub track_id: String,
    pub year: i32,
    pub month: u32,
    pub play_count: u64,
    pub unique_listeners: u64,
}

/// Play summary for one track and month. Year and month default to the
/// current UTC month independently.
pub async fn get_track_monthly_stats(
    Path(id): Path<String>,
    Query(params): Query<MonthlyStatsQuery>,
    State(state): State<AppState>,
) -> Result<Json<MonthlyStatsResponse>, AppError> {
    let current = YearMonth::containing(TimeMs::now())
        .map_err(|e| AppError::Internal(e.to_string()))?;
    let year = parse_query_param::<i32>("year", params.year.as_deref())?;
    let month = parse_query_param::<u32>("month", params.month.as_deref())?;
    let period = YearMonth::new(
        year.unwrap_or(current.year()),
        month.unwrap_or(current.month()),
    )
    .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let track_id = TrackId::new(id);
    if state.repo.get_track(&track_id).await?.is_none() {
        return Err(AppError::NotFound(format!("track {}", track_id)));
    }

    let stats = state
        .repo
        .query_track_monthly_stats(&track_id, period)
        .await?;

    Ok(Json(MonthlyStatsResponse {
        track_id: track_id.as_str().to_string(),
        year: period.year(),
        month: period.month(),
        play_count: stats.play_count,
        unique_listeners: stats.unique_listeners,
    }))
}
