//! Ideal team generation.
//!
//! Pipeline: roster -> candidate pool -> starter pass -> substitute pass ->
//! vacancy fill. Pure and synchronous; every call owns its own selection
//! state, so identical inputs always give identical output.

pub mod assignment;
pub mod candidate;
pub mod selection;
pub mod team;

pub use assignment::{assign_phase, Phase};
pub use candidate::{build_candidate_pool, Candidate};
pub use selection::{CandidateScope, SelectionState, Strategy, Tier};
pub use team::{AssignedPlayer, IdealTeam, IdealTeamSlot, SlotAssignment, VacantSlot};

use crate::models::{CardId, Formation, Player};
use std::collections::HashSet;
use tracing::info;

/// Picks a starter and a substitute for every slot of `formation`.
///
/// No player or card is used twice, and no card in `discarded_card_ids` is
/// used at all. Slots without an eligible candidate come back vacant. The
/// inputs are never modified.
pub fn generate_ideal_team(
    players: &[Player],
    formation: &Formation,
    discarded_card_ids: &HashSet<CardId>,
) -> IdealTeam {
    let pool = build_candidate_pool(players);
    let mut state = SelectionState::new(discarded_card_ids);

    let starters = assign_phase(&pool, formation, Phase::Starter, &mut state);
    let substitutes = assign_phase(&pool, formation, Phase::Substitute, &mut state);

    let team = IdealTeam::from_phases(formation, &starters, &substitutes);

    info!(
        formation = %formation.name,
        candidates = pool.len(),
        discarded = discarded_card_ids.len(),
        filled = state.claimed_count(),
        vacant = team.vacancy_count(),
        "ideal team generated"
    );

    team
}
