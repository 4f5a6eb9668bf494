pub mod api;
pub mod config;
pub mod datasource;
pub mod db;
pub mod domain;
pub mod engine;
pub mod error;
pub mod orchestration;

pub use config::Config;
pub use datasource::{
    DataSourceError, MockPlayStatsStore, MockTrackStore, PlayStatsStore, TrackStore,
};
pub use db::{init_db, Repository};
pub use domain::{
    MonthlyAggregates, MonthlyStats, PlayEvent, ScoredTrack, TimeMs, Track, TrackId, TrackType,
    UserId, YearMonth,
};
pub use error::AppError;
pub use orchestration::{TrendingError, TrendingService};
