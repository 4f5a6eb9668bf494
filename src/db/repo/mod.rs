//! Repository layer for database operations.
//!
//! Methods are organized across submodules by domain:
//! - `tracks.rs` - Track catalog reads and writes
//! - `plays.rs` - Play-history appends and monthly aggregation
//!
//! `Repository` also implements the trending data provider traits so the
//! engine can run directly against SQLite.

mod plays;
mod tracks;

use crate::datasource::{DataSourceError, PlayStatsStore, TrackStore};
use crate::domain::{MonthlyAggregates, Track, TrackType, YearMonth};
use async_trait::async_trait;
use sqlx::sqlite::SqlitePool;
use tracing::warn;

/// Repository for database operations.
#[derive(Debug)]
pub struct Repository {
    pool: SqlitePool,
}

impl Repository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: SqlitePool) -> Self {
        Repository { pool }
    }

    /// Round-trip a trivial query to confirm the database is reachable.
    pub async fn ping(&self) -> Result<(), sqlx::Error> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

#[async_trait]
impl TrackStore for Repository {
    async fn tracks_by_type(&self, types: &[TrackType]) -> Result<Vec<Track>, DataSourceError> {
        Ok(self.query_tracks_by_type(types).await?)
    }
}

#[async_trait]
impl PlayStatsStore for Repository {
    async fn monthly_aggregates(
        &self,
        period: YearMonth,
    ) -> Result<MonthlyAggregates, DataSourceError> {
        Ok(self.query_monthly_aggregates(period).await?)
    }
}

/// Read a stored counter, treating corrupt negative values as zero.
fn counter_from_row(value: i64, column: &str, key: &str) -> u64 {
    u64::try_from(value).unwrap_or_else(|_| {
        warn!(
            key = %key,
            column = %column,
            value,
            "Negative counter in database, using 0"
        );
        0
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counter_from_row() {
        assert_eq!(counter_from_row(42, "lifetime_plays", "t1"), 42);
        assert_eq!(counter_from_row(0, "lifetime_plays", "t1"), 0);
        assert_eq!(counter_from_row(-3, "lifetime_plays", "t1"), 0);
    }
}
