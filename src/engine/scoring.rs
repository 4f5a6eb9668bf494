//! Trending score computation.
//!
//! `score = monthly_plays * 100 + lifetime_plays * 0.1 + recency_bonus`
//!
//! The recency bonus is a step function on track age with upper-bound
//! thresholds, so negative ages (creation time in the future) land in the
//! newest tier.

use crate::domain::{MonthlyAggregates, MonthlyStats, ScoredTrack, TimeMs, Track};
use tracing::warn;

pub const MONTHLY_PLAY_WEIGHT: f64 = 100.0;
pub const LIFETIME_PLAY_WEIGHT: f64 = 0.1;

/// Recency tiers as (max age in days, bonus). Checked in order.
pub const RECENCY_TIERS: [(f64, f64); 3] = [(30.0, 1000.0), (90.0, 500.0), (180.0, 100.0)];

/// Additive bonus for newer tracks.
pub fn recency_bonus(age_in_days: f64) -> f64 {
    RECENCY_TIERS
        .iter()
        .find(|(max_age, _)| age_in_days <= *max_age)
        .map(|(_, bonus)| *bonus)
        .unwrap_or(0.0)
}

/// Composite ranking value.
pub fn composite_score(monthly_plays: u64, lifetime_plays: u64, age_in_days: f64) -> f64 {
    monthly_plays as f64 * MONTHLY_PLAY_WEIGHT
        + lifetime_plays as f64 * LIFETIME_PLAY_WEIGHT
        + recency_bonus(age_in_days)
}

/// Age of a track at `now` in fractional days.
///
/// A missing creation time is treated as age 0 (maximally recent).
pub fn age_in_days(track: &Track, now: TimeMs) -> f64 {
    match track.created_at {
        Some(created_at) => now.days_since(created_at),
        None => {
            warn!(track = %track.id, "Track has no creation timestamp, scoring as age 0");
            0.0
        }
    }
}

/// Annotate every candidate with its monthly stats, age and score.
///
/// Output order matches input order.
pub fn score_tracks(
    tracks: Vec<Track>,
    aggregates: &MonthlyAggregates,
    now: TimeMs,
) -> Vec<ScoredTrack> {
    tracks
        .into_iter()
        .map(|track| {
            let stats = aggregates.get(&track.id).copied().unwrap_or_default();
            score_track(track, stats, now)
        })
        .collect()
}

fn score_track(track: Track, stats: MonthlyStats, now: TimeMs) -> ScoredTrack {
    let age_in_days = age_in_days(&track, now);
    let score = composite_score(stats.play_count, track.lifetime_plays, age_in_days);
    ScoredTrack {
        track,
        monthly_plays: stats.play_count,
        unique_listeners: stats.unique_listeners,
        age_in_days,
        score,
    }
}
