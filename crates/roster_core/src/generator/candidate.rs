//! Flattening a roster into (player, card, position) candidates.

use crate::models::{Player, PlayerCard, Position};
use crate::stats::{PerformanceClassifier, PlayerPerformance, PlayerStats};

/// One way a player can fill a position: a specific card rated there.
///
/// Ephemeral; rebuilt on every generation run.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate<'a> {
    pub player: &'a Player,
    pub card: &'a PlayerCard,
    pub position: Position,
    pub average: f64,
    pub performance: PlayerPerformance,
}

impl<'a> Candidate<'a> {
    pub fn player_id(&self) -> &'a str {
        &self.player.id
    }

    pub fn card_id(&self) -> &'a str {
        &self.card.id
    }
}

/// Emits one candidate per player, per card, per position with at least one rating.
///
/// Order is roster order, then card order, then canonical position order.
pub fn build_candidate_pool(players: &[Player]) -> Vec<Candidate<'_>> {
    let mut pool = Vec::new();
    for player in players {
        for card in &player.cards {
            pool.extend(card_candidates(player, card));
        }
    }
    pool
}

fn card_candidates<'a>(player: &'a Player, card: &'a PlayerCard) -> Vec<Candidate<'a>> {
    let position_averages: Vec<f64> = card
        .rated_positions()
        .map(|(_, ratings)| PlayerStats::from_ratings(ratings).average)
        .collect();

    card.rated_positions()
        .map(|(position, ratings)| {
            let performance = PerformanceClassifier::classify(ratings, &position_averages);
            Candidate { player, card, position, average: performance.stats.average, performance }
        })
        .collect()
}
