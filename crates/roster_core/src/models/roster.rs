//! Players, their cards and recorded ratings.

use super::{PlayStyle, Position, Role};
use crate::error::{Result, RosterError};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub type PlayerId = String;
pub type CardId = String;

pub const MIN_RATING: f64 = 1.0;
pub const MAX_RATING: f64 = 10.0;

/// One match rating. Immutable once recorded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Rating {
    pub value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
}

impl Rating {
    pub fn new(value: f64, role: Option<Role>) -> Result<Self> {
        let rating = Self { value, role };
        rating.validate()?;
        Ok(rating)
    }

    pub fn validate(&self) -> Result<()> {
        if !(MIN_RATING..=MAX_RATING).contains(&self.value) {
            return Err(RosterError::RatingOutOfRange(self.value));
        }
        Ok(())
    }
}

/// A separately rated version of a player (special edition, event card, ...).
///
/// Ratings are kept per position in recording order. A position missing from
/// the map and a position mapped to an empty list both mean "never rated there".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PlayerCard {
    pub id: CardId,
    pub name: String,
    #[serde(default)]
    pub style: PlayStyle,
    #[serde(default)]
    pub ratings_by_position: BTreeMap<Position, Vec<Rating>>,
}

impl PlayerCard {
    pub fn new(id: impl Into<CardId>, name: impl Into<String>, style: PlayStyle) -> Self {
        Self { id: id.into(), name: name.into(), style, ratings_by_position: BTreeMap::new() }
    }

    /// Builder-style helper to attach a rating history at one position.
    pub fn with_ratings(mut self, position: Position, values: &[f64]) -> Result<Self> {
        let ratings = values.iter().map(|v| Rating::new(*v, None)).collect::<Result<Vec<_>>>()?;
        self.ratings_by_position.entry(position).or_default().extend(ratings);
        Ok(self)
    }

    pub fn add_rating(&mut self, position: Position, rating: Rating) -> Result<()> {
        rating.validate()?;
        self.ratings_by_position.entry(position).or_default().push(rating);
        Ok(())
    }

    /// Rating history at `position`; `None` when the card was never rated there.
    pub fn ratings_at(&self, position: Position) -> Option<&[Rating]> {
        self.ratings_by_position
            .get(&position)
            .map(Vec::as_slice)
            .filter(|ratings| !ratings.is_empty())
    }

    /// Positions with at least one rating, in canonical position order.
    pub fn rated_positions(&self) -> impl Iterator<Item = (Position, &[Rating])> + '_ {
        self.ratings_by_position
            .iter()
            .filter(|(_, ratings)| !ratings.is_empty())
            .map(|(position, ratings)| (*position, ratings.as_slice()))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    #[serde(default)]
    pub cards: Vec<PlayerCard>,
}

impl Player {
    pub fn new(id: impl Into<PlayerId>, name: impl Into<String>) -> Self {
        Self { id: id.into(), name: name.into(), cards: Vec::new() }
    }

    pub fn with_card(mut self, card: PlayerCard) -> Self {
        self.cards.push(card);
        self
    }

    pub fn card(&self, card_id: &str) -> Option<&PlayerCard> {
        self.cards.iter().find(|c| c.id == card_id)
    }
}

/// Checks every recorded rating of a deserialized roster.
pub fn validate_roster(players: &[Player]) -> Result<()> {
    players
        .iter()
        .flat_map(|p| &p.cards)
        .flat_map(|c| c.ratings_by_position.values())
        .flatten()
        .try_for_each(Rating::validate)
}
