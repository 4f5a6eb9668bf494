//! Track records and their scored, ranked projection.

use crate::domain::{TimeMs, TrackId, TrackType, UserId};
use serde::{Deserialize, Serialize};

/// A single uploaded audio item, as the trending engine sees it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Track {
    pub id: TrackId,
    pub creator: UserId,
    #[serde(rename = "type")]
    pub track_type: TrackType,
    /// Lifetime play counter, never decreases.
    pub lifetime_plays: u64,
    /// Creation time. `None` when the stored value is missing or unreadable.
    pub created_at: Option<TimeMs>,
}

impl Track {
    pub fn new(
        id: TrackId,
        creator: UserId,
        track_type: TrackType,
        lifetime_plays: u64,
        created_at: Option<TimeMs>,
    ) -> Self {
        Self {
            id,
            creator,
            track_type,
            lifetime_plays,
            created_at,
        }
    }
}

/// A track annotated with its trending score for one ranking request.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredTrack {
    #[serde(flatten)]
    pub track: Track,
    pub monthly_plays: u64,
    pub unique_listeners: u64,
    pub age_in_days: f64,
    pub score: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scored_track_serializes_flat_camel_case() {
        let scored = ScoredTrack {
            track: Track::new(
                TrackId::new("t1".to_string()),
                UserId::new("u1".to_string()),
                TrackType::new("song"),
                50,
                Some(TimeMs::new(1000)),
            ),
            monthly_plays: 5,
            unique_listeners: 3,
            age_in_days: 10.0,
            score: 1505.0,
        };

        let v = serde_json::to_value(&scored).unwrap();
        assert_eq!(v["id"], "t1");
        assert_eq!(v["creator"], "u1");
        assert_eq!(v["type"], "song");
        assert_eq!(v["lifetimePlays"], 50);
        assert_eq!(v["createdAt"], 1000);
        assert_eq!(v["monthlyPlays"], 5);
        assert_eq!(v["uniqueListeners"], 3);
        assert_eq!(v["ageInDays"], 10.0);
        assert_eq!(v["score"], 1505.0);
        assert!(v.get("track").is_none());
    }

    #[test]
    fn test_missing_created_at_serializes_as_null() {
        let track = Track::new(
            TrackId::new("t1".to_string()),
            UserId::new("u1".to_string()),
            TrackType::new("mix"),
            0,
            None,
        );
        let v = serde_json::to_value(&track).unwrap();
        assert!(v["createdAt"].is_null());
    }
}
