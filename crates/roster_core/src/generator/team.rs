//! Generated team: one starter and one substitute per formation slot.

use super::Candidate;
use crate::models::{CardId, Formation, PlayStyle, PlayerId, Position};
use crate::stats::PlayerPerformance;
use fxhash::FxHasher;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// A card placed in a slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct AssignedPlayer {
    pub player_id: PlayerId,
    pub player_name: String,
    pub card_id: CardId,
    pub card_name: String,
    pub style: PlayStyle,
    pub position: Position,
    pub average: f64,
    pub performance: PlayerPerformance,
}

impl AssignedPlayer {
    pub fn from_candidate(candidate: &Candidate<'_>, position: Position) -> Self {
        Self {
            player_id: candidate.player.id.clone(),
            player_name: candidate.player.name.clone(),
            card_id: candidate.card.id.clone(),
            card_name: candidate.card.name.clone(),
            style: candidate.card.style,
            position,
            average: candidate.average,
            performance: candidate.performance,
        }
    }
}

/// No eligible candidate existed for this slot role.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct VacantSlot {
    pub position: Position,
    pub average: f64,
    pub performance: PlayerPerformance,
}

impl VacantSlot {
    pub fn new(position: Position) -> Self {
        Self { position, average: 0.0, performance: PlayerPerformance::default() }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SlotAssignment {
    Assigned(AssignedPlayer),
    Vacant(VacantSlot),
}

impl SlotAssignment {
    pub fn resolve(candidate: Option<&Candidate<'_>>, position: Position) -> Self {
        match candidate {
            Some(c) => SlotAssignment::Assigned(AssignedPlayer::from_candidate(c, position)),
            None => SlotAssignment::Vacant(VacantSlot::new(position)),
        }
    }

    pub fn position(&self) -> Position {
        match self {
            SlotAssignment::Assigned(p) => p.position,
            SlotAssignment::Vacant(v) => v.position,
        }
    }

    pub fn average(&self) -> f64 {
        match self {
            SlotAssignment::Assigned(p) => p.average,
            SlotAssignment::Vacant(v) => v.average,
        }
    }

    pub fn performance(&self) -> &PlayerPerformance {
        match self {
            SlotAssignment::Assigned(p) => &p.performance,
            SlotAssignment::Vacant(v) => &v.performance,
        }
    }

    pub fn assigned(&self) -> Option<&AssignedPlayer> {
        match self {
            SlotAssignment::Assigned(p) => Some(p),
            SlotAssignment::Vacant(_) => None,
        }
    }

    pub fn is_vacant(&self) -> bool {
        matches!(self, SlotAssignment::Vacant(_))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct IdealTeamSlot {
    pub starter: SlotAssignment,
    pub substitute: SlotAssignment,
}

/// Output of a generation run, index-aligned with the formation's slots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct IdealTeam {
    pub slots: Vec<IdealTeamSlot>,
}

impl IdealTeam {
    /// Pairs up both phases' picks, filling gaps with vacant entries.
    pub fn from_phases(
        formation: &Formation,
        starters: &[Option<&Candidate<'_>>],
        substitutes: &[Option<&Candidate<'_>>],
    ) -> Self {
        let slots = formation
            .slots()
            .iter()
            .enumerate()
            .map(|(i, slot)| IdealTeamSlot {
                starter: SlotAssignment::resolve(starters.get(i).copied().flatten(), slot.position),
                substitute: SlotAssignment::resolve(
                    substitutes.get(i).copied().flatten(),
                    slot.position,
                ),
            })
            .collect();
        Self { slots }
    }

    pub fn starters(&self) -> impl Iterator<Item = &SlotAssignment> {
        self.slots.iter().map(|s| &s.starter)
    }

    pub fn substitutes(&self) -> impl Iterator<Item = &SlotAssignment> {
        self.slots.iter().map(|s| &s.substitute)
    }

    /// Every filled entry, starters first.
    pub fn assigned(&self) -> impl Iterator<Item = &AssignedPlayer> {
        self.starters().chain(self.substitutes()).filter_map(SlotAssignment::assigned)
    }

    pub fn assigned_card_ids(&self) -> Vec<&str> {
        self.assigned().map(|p| p.card_id.as_str()).collect()
    }

    pub fn vacancy_count(&self) -> usize {
        self.starters().chain(self.substitutes()).filter(|a| a.is_vacant()).count()
    }

    /// Version-stable hash of the team, for cheap change detection between runs.
    pub fn fingerprint(&self) -> u64 {
        let mut hasher = FxHasher::default();
        for slot in &self.slots {
            for entry in [&slot.starter, &slot.substitute] {
                entry.position().code().hash(&mut hasher);
                entry.average().to_bits().hash(&mut hasher);
                match entry {
                    SlotAssignment::Assigned(p) => {
                        1u8.hash(&mut hasher);
                        p.player_id.hash(&mut hasher);
                        p.card_id.hash(&mut hasher);
                    }
                    SlotAssignment::Vacant(_) => 0u8.hash(&mut hasher),
                }
            }
        }
        hasher.finish()
    }
}
