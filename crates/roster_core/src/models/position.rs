//! Pitch positions and position groups.

use crate::error::RosterError;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Field position a card can be rated at.
///
/// Serialized as the short code shown on the pitch (`"PT"`, `"DFC"`, ...).
/// Declaration order is the canonical order used by per-position maps.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[cfg_attr(test, derive(strum_macros::EnumIter))]
pub enum Position {
    #[serde(rename = "PT")]
    Goalkeeper,
    #[serde(rename = "DFC")]
    CenterBack,
    #[serde(rename = "LI")]
    LeftBack,
    #[serde(rename = "LD")]
    RightBack,
    #[serde(rename = "MCD")]
    DefensiveMidfielder,
    #[serde(rename = "MC")]
    CentralMidfielder,
    #[serde(rename = "MDI")]
    LeftMidfielder,
    #[serde(rename = "MDD")]
    RightMidfielder,
    #[serde(rename = "MO")]
    AttackingMidfielder,
    #[serde(rename = "EXI")]
    LeftWinger,
    #[serde(rename = "EXD")]
    RightWinger,
    #[serde(rename = "SD")]
    SecondStriker,
    #[serde(rename = "DC")]
    Striker,
}

/// Coarse grouping used for colouring and role lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum PositionGroup {
    Goalkeeper,
    Defender,
    Midfielder,
    Forward,
}

impl Position {
    pub const ALL: [Position; 13] = [
        Position::Goalkeeper,
        Position::CenterBack,
        Position::LeftBack,
        Position::RightBack,
        Position::DefensiveMidfielder,
        Position::CentralMidfielder,
        Position::LeftMidfielder,
        Position::RightMidfielder,
        Position::AttackingMidfielder,
        Position::LeftWinger,
        Position::RightWinger,
        Position::SecondStriker,
        Position::Striker,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Self::Goalkeeper => "PT",
            Self::CenterBack => "DFC",
            Self::LeftBack => "LI",
            Self::RightBack => "LD",
            Self::DefensiveMidfielder => "MCD",
            Self::CentralMidfielder => "MC",
            Self::LeftMidfielder => "MDI",
            Self::RightMidfielder => "MDD",
            Self::AttackingMidfielder => "MO",
            Self::LeftWinger => "EXI",
            Self::RightWinger => "EXD",
            Self::SecondStriker => "SD",
            Self::Striker => "DC",
        }
    }

    pub fn group(&self) -> PositionGroup {
        match self {
            Self::Goalkeeper => PositionGroup::Goalkeeper,
            Self::CenterBack | Self::LeftBack | Self::RightBack => PositionGroup::Defender,
            Self::DefensiveMidfielder
            | Self::CentralMidfielder
            | Self::LeftMidfielder
            | Self::RightMidfielder
            | Self::AttackingMidfielder => PositionGroup::Midfielder,
            Self::LeftWinger | Self::RightWinger | Self::SecondStriker | Self::Striker => {
                PositionGroup::Forward
            }
        }
    }

    pub fn is_goalkeeper(&self) -> bool {
        matches!(self, Self::Goalkeeper)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Position {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim();
        Position::ALL
            .iter()
            .copied()
            .find(|p| p.code().eq_ignore_ascii_case(code))
            .ok_or_else(|| RosterError::UnknownPosition(s.to_string()))
    }
}
