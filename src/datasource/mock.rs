//! In-memory stores for testing without a database.

use super::{DataSourceError, PlayStatsStore, TrackStore};
use crate::domain::{MonthlyAggregates, PlayEvent, Track, TrackType, YearMonth};
use crate::engine::aggregate_monthly;
use async_trait::async_trait;

/// Track store backed by a vector, returned in insertion order.
#[derive(Debug, Clone, Default)]
pub struct MockTrackStore {
    tracks: Vec<Track>,
    failure: Option<String>,
}

impl MockTrackStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_track(mut self, track: Track) -> Self {
        self.tracks.push(track);
        self
    }

    pub fn with_tracks(mut self, tracks: Vec<Track>) -> Self {
        self.tracks.extend(tracks);
        self
    }

    /// Make every fetch fail with `Unavailable(message)`.
    pub fn failing(mut self, message: &str) -> Self {
        self.failure = Some(message.to_string());
        self
    }
}

#[async_trait]
impl TrackStore for MockTrackStore {
    async fn tracks_by_type(&self, types: &[TrackType]) -> Result<Vec<Track>, DataSourceError> {
        if let Some(msg) = &self.failure {
            return Err(DataSourceError::Unavailable(msg.clone()));
        }

        Ok(self
            .tracks
            .iter()
            .filter(|t| types.contains(&t.track_type))
            .cloned()
            .collect())
    }
}

/// Play stats store that aggregates an in-memory event log on demand.
#[derive(Debug, Clone, Default)]
pub struct MockPlayStatsStore {
    events: Vec<PlayEvent>,
    failure: Option<String>,
}

impl MockPlayStatsStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_event(mut self, event: PlayEvent) -> Self {
        self.events.push(event);
        self
    }

    pub fn with_events(mut self, events: Vec<PlayEvent>) -> Self {
        self.events.extend(events);
        self
    }

    /// Make every aggregation fail with `Unavailable(message)`.
    pub fn failing(mut self, message: &str) -> Self {
        self.failure = Some(message.to_string());
        self
    }
}

#[async_trait]
impl PlayStatsStore for MockPlayStatsStore {
    async fn monthly_aggregates(
        &self,
        period: YearMonth,
    ) -> Result<MonthlyAggregates, DataSourceError> {
        if let Some(msg) = &self.failure {
            return Err(DataSourceError::Unavailable(msg.clone()));
        }
        Ok(aggregate_monthly(&self.events, period))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{TimeMs, TrackId, UserId};

    fn make_track(id: &str, kind: &str) -> Track {
        Track::new(
            TrackId::new(id.to_string()),
            UserId::new("creator".to_string()),
            TrackType::new(kind),
            0,
            Some(TimeMs::new(0)),
        )
    }

    #[tokio::test]
    async fn test_mock_track_store_filters_by_type_in_order() {
        let store = MockTrackStore::new().with_tracks(vec![
            make_track("1", "song"),
            make_track("2", "podcast"),
            make_track("3", "mix"),
            make_track("4", "song"),
        ]);

        let tracks = store
            .tracks_by_type(&[TrackType::new("song"), TrackType::new("mix")])
            .await
            .unwrap();
        let ids: Vec<&str> = tracks.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3", "4"]);
    }

    #[tokio::test]
    async fn test_mock_track_store_failure() {
        let store = MockTrackStore::new()
            .with_track(make_track("1", "song"))
            .failing("down");
        let err = store.tracks_by_type(&[TrackType::new("song")]).await.unwrap_err();
        assert!(matches!(err, DataSourceError::Unavailable(m) if m == "down"));
    }

    #[tokio::test]
    async fn test_mock_play_stats_store_aggregates() {
        // 2024-03-15T12:00:00Z
        let at = TimeMs::new(1_710_504_000_000);
        let event = PlayEvent::new(
            TrackId::new("1".to_string()),
            None,
            Some("10.0.0.1".to_string()),
            at,
        )
        .unwrap();

        let store = MockPlayStatsStore::new().with_event(event);
        let agg = store
            .monthly_aggregates(YearMonth::containing(at).unwrap())
            .await
            .unwrap();
        assert_eq!(agg[&TrackId::new("1".to_string())].play_count, 1);
    }
}
