pub mod health;
pub mod plays;
pub mod stats;
pub mod trending;

use crate::config::Config;
use crate::db::Repository;
use crate::error::AppError;
use crate::orchestration::TrendingService;
use axum::{
    routing::{get, post},
    Router,
};
use std::str::FromStr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<Repository>,
    pub config: Config,
    pub trending: Arc<TrendingService>,
}

impl AppState {
    pub fn new(repo: Arc<Repository>, config: Config, trending: Arc<TrendingService>) -> Self {
        Self {
            repo,
            config,
            trending,
        }
    }

    /// State whose trending ranking reads straight from `repo`.
    pub fn from_repository(repo: Arc<Repository>, config: Config) -> Self {
        let trending = Arc::new(TrendingService::new(
            repo.clone(),
            repo.clone(),
            config.trending_track_types.clone(),
        ));
        Self::new(repo, config, trending)
    }
}

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        .route("/v1/tracks/trending", get(trending::get_trending))
        .route(
            "/v1/tracks/:id/monthly-stats",
            get(stats::get_track_monthly_stats),
        )
        .route("/v1/plays", post(plays::record_play))
        .layer(cors)
        .with_state(state)
}

/// Parse an optional text query parameter, reporting failures as JSON 400s.
///
/// Absent or blank values yield `None`.
pub(crate) fn parse_query_param<T: FromStr>(
    name: &str,
    raw: Option<&str>,
) -> Result<Option<T>, AppError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => s
            .parse::<T>()
            .map(Some)
            .map_err(|_| AppError::BadRequest(format!("Invalid {}: {}", name, s))),
    }
}
