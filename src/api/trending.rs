use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;

use crate::api::{parse_query_param, AppState};
use crate::domain::{ScoredTrack, TimeMs};
use crate::error::AppError;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendingQuery {
    /// Kept as text so malformed values can be normalized instead of rejected.
    pub limit: Option<String>,
    /// Evaluate the ranking as of this instant instead of now.
    pub at_ms: Option<String>,
}

pub async fn get_trending(
    Query(params): Query<TrendingQuery>,
    State(state): State<AppState>,
) -> Result<Json<Vec<ScoredTrack>>, AppError> {
    let limit = parse_limit(params.limit.as_deref(), state.config.trending_default_limit);
    let now = parse_query_param::<i64>("atMs", params.at_ms.as_deref())?
        .map(TimeMs::new)
        .unwrap_or_else(TimeMs::now);

    let ranked = state.trending.monthly_popular(now, limit).await?;
    Ok(Json(ranked))
}

/// Resolve the requested ranking size.
///
/// Absent or blank -> `default`. A positive integer -> that many. Anything
/// else (zero, negative, fractional, garbage) -> `None`, meaning no truncation.
fn parse_limit(raw: Option<&str>, default: usize) -> Option<usize> {
    let raw = match raw.map(str::trim) {
        None | Some("") => return Some(default),
        Some(s) => s,
    };

    match raw.parse::<i64>() {
        Ok(n) if n > 0 => usize::try_from(n).ok(),
        _ => None,
    }
}
