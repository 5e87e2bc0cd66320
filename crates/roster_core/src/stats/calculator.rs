//! Average / spread / sample size of a rating history.

use crate::models::Rating;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
pub struct PlayerStats {
    pub average: f64,
    pub matches: usize,
    pub std_dev: f64,
}

impl PlayerStats {
    /// Computes stats over raw values.
    ///
    /// Empty input yields all zeros. The standard deviation uses the N
    /// denominator and is 0 for fewer than two values.
    pub fn from_values(values: &[f64]) -> Self {
        let matches = values.len();
        if matches == 0 {
            return Self::default();
        }

        let n = matches as f64;
        let average = values.iter().sum::<f64>() / n;
        let std_dev = if matches < 2 {
            0.0
        } else {
            let variance = values.iter().map(|v| (v - average).powi(2)).sum::<f64>() / n;
            variance.sqrt()
        };

        Self { average, matches, std_dev }
    }

    pub fn from_ratings(ratings: &[Rating]) -> Self {
        let values: Vec<f64> = ratings.iter().map(|r| r.value).collect();
        Self::from_values(&values)
    }
}
