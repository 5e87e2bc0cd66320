pub mod calculator;
pub mod performance;

pub use calculator::PlayerStats;
pub use performance::{format_average, PerformanceClassifier, PlayerPerformance, RatingTier};
