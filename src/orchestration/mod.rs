pub mod trending;

pub use trending::{TrendingError, TrendingService};
