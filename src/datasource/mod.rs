//! Data provider abstractions consumed by the trending engine.

use crate::domain::{MonthlyAggregates, Track, TrackType, YearMonth};
use async_trait::async_trait;
use std::fmt;
use thiserror::Error;

pub mod mock;

pub use mock::{MockPlayStatsStore, MockTrackStore};

/// Source of candidate tracks.
#[async_trait]
pub trait TrackStore: Send + Sync + fmt::Debug {
    /// Fetch all tracks whose type is in `types`.
    ///
    /// # Returns
    /// Tracks in a stable order (insertion order for the bundled stores).
    /// Ranking ties fall back to this order.
    async fn tracks_by_type(&self, types: &[TrackType]) -> Result<Vec<Track>, DataSourceError>;
}

/// Source of monthly play aggregates.
#[async_trait]
pub trait PlayStatsStore: Send + Sync + fmt::Debug {
    /// Play count and distinct-address count per track for `period`.
    ///
    /// Tracks without plays in the period are absent from the result.
    async fn monthly_aggregates(
        &self,
        period: YearMonth,
    ) -> Result<MonthlyAggregates, DataSourceError>;
}

/// Error type for data provider operations.
#[derive(Debug, Clone, Error)]
pub enum DataSourceError {
    /// Storage query failed.
    #[error("Database error: {0}")]
    Database(String),
    /// Store could not be reached.
    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

impl From<sqlx::Error> for DataSourceError {
    fn from(err: sqlx::Error) -> Self {
        DataSourceError::Database(err.to_string())
    }
}
