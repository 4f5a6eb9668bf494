use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::api::AppState;
use crate::domain::{PlayEvent, TimeMs, TrackId, UserId};
use crate::error::AppError;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordPlayRequest {
    pub track_id: String,
    pub listener: Option<String>,
    /// Falls back to the first `X-Forwarded-For` hop when absent.
    pub ip_address: Option<String>,
    pub time_ms: Option<i64>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordPlayResponse {
    pub recorded: bool,
    pub event_id: String,
    pub year: i32,
    pub month: u32,
}

pub async fn record_play(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(body): Json<RecordPlayRequest>,
) -> Result<(StatusCode, Json<RecordPlayResponse>), AppError> {
    let track_id = body.track_id.trim();
    if track_id.is_empty() {
        return Err(AppError::BadRequest("trackId is required".to_string()));
    }

    let listener = body
        .listener
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| UserId::new(s.to_string()));
    let ip_address = body
        .ip_address
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .or_else(|| forwarded_for(&headers));
    let time_ms = body.time_ms.map(TimeMs::new).unwrap_or_else(TimeMs::now);

    let event = PlayEvent::new(TrackId::new(track_id.to_string()), listener, ip_address, time_ms)
        .map_err(|e| AppError::BadRequest(format!("Invalid timeMs: {}", e)))?;

    if !state.repo.record_play(&event).await? {
        return Err(AppError::NotFound(format!("track {}", track_id)));
    }

    tracing::debug!(track = %event.track_id, event_id = %event.event_id, "Recorded play");

    Ok((
        StatusCode::CREATED,
        Json(RecordPlayResponse {
            recorded: true,
            event_id: event.event_id.to_string(),
            year: event.year,
            month: event.month,
        }),
    ))
}

fn forwarded_for(headers: &HeaderMap) -> Option<String> {
    headers
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn forwarded_for_takes_first_hop() {
        let mut headers = HeaderMap::new();
        headers.insert(
            "x-forwarded-for",
            HeaderValue::from_static("203.0.113.7, 10.0.0.1"),
        );
        assert_eq!(forwarded_for(&headers).as_deref(), Some("203.0.113.7"));
    }

    #[test]
    fn forwarded_for_absent() {
        assert_eq!(forwarded_for(&HeaderMap::new()), None);
    }
}
