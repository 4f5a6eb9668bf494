//! Domain types for the trending engine.
//!
//! This module provides:
//! - Domain primitives: TimeMs, YearMonth, TrackId, UserId, TrackType
//! - Track and ScoredTrack with camelCase JSON serialization
//! - PlayEvent log entries and their monthly summaries

pub mod play;
pub mod primitives;
pub mod track;

pub use play::{MonthlyAggregates, MonthlyStats, PlayEvent};
pub use primitives::{TimeMs, TrackId, TrackType, UserId, YearMonth, YearMonthError, MS_PER_DAY};
pub use track::{ScoredTrack, Track};
