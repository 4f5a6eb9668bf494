//! Ranking and truncation of scored tracks.

use crate::domain::ScoredTrack;

/// Sort by score descending and keep the first `limit` entries.
///
/// The sort is stable: equal scores keep their input order. `None` means no
/// truncation.
pub fn rank(mut scored: Vec<ScoredTrack>, limit: Option<usize>) -> Vec<ScoredTrack> {
    scored.sort_by(|a, b| b.score.total_cmp(&a.score));
    if let Some(limit) = limit {
        scored.truncate(limit);
    }
    scored
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{TimeMs, Track, TrackId, TrackType, UserId};

    fn scored(id: &str, score: f64) -> ScoredTrack {
        ScoredTrack {
            track: Track::new(
                TrackId::new(id.to_string()),
                UserId::new("creator".to_string()),
                TrackType::new("beat"),
                0,
                Some(TimeMs::new(0)),
            ),
            monthly_plays: 0,
            unique_listeners: 0,
            age_in_days: 0.0,
            score,
        }
    }

    fn ids(ranked: &[ScoredTrack]) -> Vec<&str> {
        ranked.iter().map(|s| s.track.id.as_str()).collect()
    }

    #[test]
    fn test_sorts_descending() {
        let ranked = rank(vec![scored("b", 500.0), scored("a", 1505.0), scored("c", 1.0)], None);
        assert_eq!(ids(&ranked), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let ranked = rank(
            vec![
                scored("x", 100.0),
                scored("C", 500.0),
                scored("y", 900.0),
                scored("D", 500.0),
                scored("E", 500.0),
            ],
            None,
        );
        assert_eq!(ids(&ranked), vec!["y", "C", "D", "E", "x"]);
    }

    #[test]
    fn test_truncation_length() {
        let candidates = || (0..5).map(|i| scored(&i.to_string(), i as f64)).collect::<Vec<_>>();

        assert_eq!(rank(candidates(), Some(3)).len(), 3);
        assert_eq!(rank(candidates(), Some(5)).len(), 5);
        assert_eq!(rank(candidates(), Some(50)).len(), 5);
        assert_eq!(rank(candidates(), None).len(), 5);
        assert_eq!(ids(&rank(candidates(), Some(2))), vec!["4", "3"]);
    }

    #[test]
    fn test_empty_candidates() {
        assert!(rank(Vec::new(), Some(20)).is_empty());
        assert!(rank(Vec::new(), None).is_empty());
    }
}
