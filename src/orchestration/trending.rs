use crate::datasource::{DataSourceError, PlayStatsStore, TrackStore};
use crate::domain::{ScoredTrack, TimeMs, TrackType, YearMonth, YearMonthError};
use crate::engine::{rank, score_tracks};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Runs the monthly-popularity ranking against injected providers.
#[derive(Debug, Clone)]
pub struct TrendingService {
    tracks: Arc<dyn TrackStore>,
    plays: Arc<dyn PlayStatsStore>,
    track_types: Vec<TrackType>,
}

impl TrendingService {
    pub fn new(
        tracks: Arc<dyn TrackStore>,
        plays: Arc<dyn PlayStatsStore>,
        track_types: Vec<TrackType>,
    ) -> Self {
        Self {
            tracks,
            plays,
            track_types,
        }
    }

    /// Rank candidate tracks by trending score as of `now`.
    ///
    /// Monthly plays come from the calendar month (UTC) containing `now`.
    /// Either read failing fails the whole ranking; no partial results.
    pub async fn monthly_popular(
        &self,
        now: TimeMs,
        limit: Option<usize>,
    ) -> Result<Vec<ScoredTrack>, TrendingError> {
        let period = YearMonth::containing(now)?;

        let (tracks, aggregates) = futures::try_join!(
            self.tracks.tracks_by_type(&self.track_types),
            self.plays.monthly_aggregates(period),
        )?;

        debug!(
            period = %period,
            candidates = tracks.len(),
            tracks_with_plays = aggregates.len(),
            "Loaded trending inputs"
        );

        let ranked = rank(score_tracks(tracks, &aggregates, now), limit);

        info!(period = %period, returned = ranked.len(), ?limit, "Computed trending ranking");
        Ok(ranked)
    }
}

#[derive(Debug, Error)]
pub enum TrendingError {
    #[error(transparent)]
    DataSource(#[from] DataSourceError),
    #[error("Invalid ranking instant: {0}")]
    Period(#[from] YearMonthError),
}
