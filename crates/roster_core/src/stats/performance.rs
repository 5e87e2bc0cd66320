//! Performance tags for one (card, position) rating history.
//!
//! Tags are derived fresh from the history on every call and never stored.

use super::PlayerStats;
use crate::models::{Rating, Role};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Number of most recent ratings compared against the all-time average.
pub const HOT_STREAK_WINDOW: usize = 3;
/// Recent average must beat the all-time average by more than this.
pub const HOT_STREAK_MARGIN: f64 = 0.5;
pub const CONSISTENT_MIN_MATCHES: usize = 5;
/// Exclusive upper bound on the spread of a consistent card.
pub const CONSISTENT_MAX_STD_DEV: f64 = 0.5;
/// Exclusive upper bound on the sample size of a promising card.
pub const PROMISING_MAX_MATCHES: usize = 10;
pub const VERSATILE_MIN_AVERAGE: f64 = 7.5;
pub const VERSATILE_MIN_POSITIONS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
pub struct PlayerPerformance {
    pub stats: PlayerStats,
    pub is_hot_streak: bool,
    pub is_consistent: bool,
    pub is_promising: bool,
    pub is_versatile: bool,
    pub most_common_role: Option<Role>,
}

pub struct PerformanceClassifier;

impl PerformanceClassifier {
    /// Classifies one position's history.
    ///
    /// `position_averages` holds the average at every rated position of the
    /// same card (including this one) and only feeds the versatility tag.
    pub fn classify(ratings: &[Rating], position_averages: &[f64]) -> PlayerPerformance {
        let stats = PlayerStats::from_ratings(ratings);

        PlayerPerformance {
            stats,
            is_hot_streak: Self::is_hot_streak(ratings, &stats),
            is_consistent: Self::is_consistent(&stats),
            is_promising: Self::is_promising(&stats),
            is_versatile: Self::is_versatile(position_averages),
            most_common_role: Self::most_common_role(ratings),
        }
    }

    pub fn is_hot_streak(ratings: &[Rating], stats: &PlayerStats) -> bool {
        if stats.matches < HOT_STREAK_WINDOW {
            return false;
        }
        let recent = PlayerStats::from_ratings(&ratings[ratings.len() - HOT_STREAK_WINDOW..]);
        recent.average > stats.average + HOT_STREAK_MARGIN
    }

    pub fn is_consistent(stats: &PlayerStats) -> bool {
        stats.matches >= CONSISTENT_MIN_MATCHES && stats.std_dev < CONSISTENT_MAX_STD_DEV
    }

    pub fn is_promising(stats: &PlayerStats) -> bool {
        stats.matches >= 1 && stats.matches < PROMISING_MAX_MATCHES
    }

    pub fn is_versatile(position_averages: &[f64]) -> bool {
        position_averages.iter().filter(|avg| **avg >= VERSATILE_MIN_AVERAGE).count()
            >= VERSATILE_MIN_POSITIONS
    }

    /// Role recorded most often; ties go to the role recorded first.
    pub fn most_common_role(ratings: &[Rating]) -> Option<Role> {
        let mut counts: Vec<(Role, usize)> = Vec::new();
        for role in ratings.iter().filter_map(|r| r.role) {
            match counts.iter_mut().find(|(r, _)| *r == role) {
                Some((_, count)) => *count += 1,
                None => counts.push((role, 1)),
            }
        }

        let mut best: Option<(Role, usize)> = None;
        for (role, count) in counts {
            if best.map_or(true, |(_, top)| count > top) {
                best = Some((role, count));
            }
        }
        best.map(|(role, _)| role)
    }
}

/// Quality band of an average rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum RatingTier {
    Developing,
    Solid,
    Strong,
    Elite,
}

impl RatingTier {
    pub fn of(average: f64) -> Self {
        if average >= 8.5 {
            RatingTier::Elite
        } else if average >= 7.5 {
            RatingTier::Strong
        } else if average >= 6.0 {
            RatingTier::Solid
        } else {
            RatingTier::Developing
        }
    }
}

/// One decimal place, as shown next to a card.
pub fn format_average(average: f64) -> String {
    format!("{:.1}", average)
}
