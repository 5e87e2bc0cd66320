pub mod formation;
pub mod position;
pub mod role;
pub mod roster;
pub mod style;

pub use formation::{
    Formation, FormationRecord, FormationSlot, MatchOutcome, MatchResult, SlotCoords,
    FORMATION_SIZE,
};
pub use position::{Position, PositionGroup};
pub use role::Role;
pub use roster::{validate_roster, CardId, Player, PlayerCard, PlayerId, Rating, MAX_RATING, MIN_RATING};
pub use style::PlayStyle;
