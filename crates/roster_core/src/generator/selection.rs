//! Selection state and the ordered strategy chains used to fill a slot.

use super::Candidate;
use crate::models::{CardId, FormationSlot, Position};
use crate::stats::PlayerPerformance;
use fxhash::FxHashSet;
use std::collections::HashSet;

/// Bookkeeping for one generation run.
///
/// Created empty per run and threaded through both assignment phases, so
/// substitutes are picked against the starters already claimed.
#[derive(Debug, Clone)]
pub struct SelectionState<'a> {
    used_player_ids: FxHashSet<&'a str>,
    used_card_ids: FxHashSet<&'a str>,
    discarded_card_ids: &'a HashSet<CardId>,
}

impl<'a> SelectionState<'a> {
    pub fn new(discarded_card_ids: &'a HashSet<CardId>) -> Self {
        Self {
            used_player_ids: FxHashSet::default(),
            used_card_ids: FxHashSet::default(),
            discarded_card_ids,
        }
    }

    pub fn is_eligible(&self, candidate: &Candidate<'_>) -> bool {
        !self.used_player_ids.contains(candidate.player_id())
            && !self.used_card_ids.contains(candidate.card_id())
            && !self.discarded_card_ids.contains(candidate.card_id())
    }

    /// Marks the candidate's player and card as taken for the rest of the run.
    pub fn claim(&mut self, candidate: &Candidate<'a>) {
        self.used_player_ids.insert(candidate.player_id());
        self.used_card_ids.insert(candidate.card_id());
    }

    pub fn is_player_used(&self, player_id: &str) -> bool {
        self.used_player_ids.contains(player_id)
    }

    pub fn is_card_used(&self, card_id: &str) -> bool {
        self.used_card_ids.contains(card_id)
    }

    pub fn claimed_count(&self) -> usize {
        self.used_card_ids.len()
    }
}

/// Candidates at `position`, best average first.
///
/// The sort is stable: equal averages keep roster enumeration order.
pub fn rank_for_position<'c, 'a>(
    pool: &'c [Candidate<'a>],
    position: Position,
) -> Vec<&'c Candidate<'a>> {
    let mut ranked: Vec<&Candidate<'a>> = pool.iter().filter(|c| c.position == position).collect();
    ranked.sort_by(|a, b| b.average.total_cmp(&a.average));
    ranked
}

/// Which part of the ranked position list a strategy searches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CandidateScope {
    /// Only cards whose style the slot prefers.
    PreferredStyles,
    /// Every candidate at the slot's position.
    Position,
}

/// Performance filter applied inside a scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Any,
    HotStreak,
    Promising,
    /// Neither hot nor promising.
    Others,
}

impl Tier {
    pub const SUBSTITUTE_ORDER: [Tier; 3] = [Tier::HotStreak, Tier::Promising, Tier::Others];

    pub fn admits(&self, performance: &PlayerPerformance) -> bool {
        match self {
            Tier::Any => true,
            Tier::HotStreak => performance.is_hot_streak,
            Tier::Promising => performance.is_promising,
            Tier::Others => !performance.is_hot_streak && !performance.is_promising,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Strategy {
    pub scope: CandidateScope,
    pub tier: Tier,
}

impl Strategy {
    pub fn new(scope: CandidateScope, tier: Tier) -> Self {
        Self { scope, tier }
    }

    /// Starters: preferred styles first (if any), then the whole position.
    pub fn starter_chain(slot: &FormationSlot) -> Vec<Strategy> {
        let mut chain = Vec::with_capacity(2);
        if slot.has_style_preference() {
            chain.push(Strategy::new(CandidateScope::PreferredStyles, Tier::Any));
        }
        chain.push(Strategy::new(CandidateScope::Position, Tier::Any));
        chain
    }

    /// Substitutes: every tier within preferred styles (if any), then every
    /// tier within the whole position. Tiers are never blended by rating.
    pub fn substitute_chain(slot: &FormationSlot) -> Vec<Strategy> {
        let mut scopes = Vec::with_capacity(2);
        if slot.has_style_preference() {
            scopes.push(CandidateScope::PreferredStyles);
        }
        scopes.push(CandidateScope::Position);

        scopes
            .into_iter()
            .flat_map(|scope| Tier::SUBSTITUTE_ORDER.into_iter().map(move |t| Strategy::new(scope, t)))
            .collect()
    }

    pub fn matches(&self, candidate: &Candidate<'_>, slot: &FormationSlot) -> bool {
        let in_scope = match self.scope {
            CandidateScope::PreferredStyles => slot.prefers(candidate.card.style),
            CandidateScope::Position => true,
        };
        in_scope && self.tier.admits(&candidate.performance)
    }

    /// Best eligible candidate this strategy sees in `ranked`.
    pub fn pick<'c, 'a>(
        &self,
        ranked: &[&'c Candidate<'a>],
        slot: &FormationSlot,
        state: &SelectionState<'_>,
    ) -> Option<&'c Candidate<'a>> {
        ranked.iter().copied().find(|c| self.matches(c, slot) && state.is_eligible(c))
    }
}

/// Runs `chain` in order and returns the first hit with the strategy that found it.
pub fn select_first<'c, 'a>(
    chain: &[Strategy],
    ranked: &[&'c Candidate<'a>],
    slot: &FormationSlot,
    state: &SelectionState<'_>,
) -> Option<(&'c Candidate<'a>, Strategy)> {
    chain.iter().find_map(|strategy| strategy.pick(ranked, slot, state).map(|c| (c, *strategy)))
}
