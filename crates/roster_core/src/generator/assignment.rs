//! The two assignment passes over the formation.

use super::selection::{rank_for_position, select_first, SelectionState, Strategy};
use super::Candidate;
use crate::models::{Formation, FormationSlot};
use tracing::debug;

/// Which role a pass fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Starter,
    Substitute,
}

impl Phase {
    pub fn label(&self) -> &'static str {
        match self {
            Phase::Starter => "starter",
            Phase::Substitute => "substitute",
        }
    }

    pub fn chain(&self, slot: &FormationSlot) -> Vec<Strategy> {
        match self {
            Phase::Starter => Strategy::starter_chain(slot),
            Phase::Substitute => Strategy::substitute_chain(slot),
        }
    }
}

/// Fills one role for every slot, in formation order.
///
/// Each pick is claimed in `state` before the next slot is looked at, so
/// later slots (and later passes) can never reuse that player or card.
pub fn assign_phase<'c, 'a>(
    pool: &'c [Candidate<'a>],
    formation: &Formation,
    phase: Phase,
    state: &mut SelectionState<'a>,
) -> Vec<Option<&'c Candidate<'a>>> {
    formation
        .slots()
        .iter()
        .enumerate()
        .map(|(index, slot)| {
            let ranked = rank_for_position(pool, slot.position);
            let picked = select_first(&phase.chain(slot), &ranked, slot, state);

            match picked {
                Some((candidate, strategy)) => {
                    state.claim(candidate);
                    debug!(
                        slot = index,
                        role = phase.label(),
                        position = slot.position.code(),
                        card_id = candidate.card_id(),
                        average = candidate.average,
                        scope = ?strategy.scope,
                        tier = ?strategy.tier,
                        "slot filled"
                    );
                    Some(candidate)
                }
                None => {
                    debug!(
                        slot = index,
                        role = phase.label(),
                        position = slot.position.code(),
                        ranked = ranked.len(),
                        "no eligible candidate, slot left vacant"
                    );
                    None
                }
            }
        })
        .collect()
}
