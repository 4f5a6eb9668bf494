//! Pure computation for the trending ranking.
//!
//! Nothing here performs I/O: inputs are plain data supplied by the
//! orchestration layer.

pub mod aggregation;
pub mod ranking;
pub mod scoring;

pub use aggregation::aggregate_monthly;
pub use ranking::rank;
pub use scoring::{age_in_days, composite_score, recency_bonus, score_tracks};
