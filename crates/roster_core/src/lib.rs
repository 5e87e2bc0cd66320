//! # roster_core - Ideal Team Generator
//!
//! Picks the best starter and substitute for every slot of an 11-slot
//! formation from a roster of rated player cards.
//!
//! ## Features
//! - 100% deterministic selection (same roster + formation + discards = same team)
//! - Per-(card, position) performance stats and tags (hot streak, consistent,
//!   promising, versatile)
//! - Style preferences per slot with fallback to the whole position pool
//! - Global no-reuse constraint for players and cards, plus a discard list
//! - JSON API for easy integration with UI layers

pub mod api;
pub mod error;
pub mod generator;
pub mod models;
pub mod stats;

// Re-export main API functions
pub use api::{
    generate_ideal_team_json, handle_ideal_team_json, ideal_team_request_schema, IdealTeamRequest,
    IdealTeamResponse,
};
pub use error::{Result, RosterError};

// Re-export the generator
pub use generator::{
    build_candidate_pool, generate_ideal_team, AssignedPlayer, Candidate, IdealTeam, IdealTeamSlot,
    SlotAssignment, VacantSlot,
};

// Re-export model types
pub use models::{
    validate_roster, CardId, Formation, FormationRecord, FormationSlot, MatchOutcome, MatchResult,
    PlayStyle, Player, PlayerCard, PlayerId, Position, PositionGroup, Rating, Role, SlotCoords,
    FORMATION_SIZE,
};

// Re-export stats
pub use stats::{format_average, PerformanceClassifier, PlayerPerformance, PlayerStats, RatingTier};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const SCHEMA_VERSION: u8 = 1;
