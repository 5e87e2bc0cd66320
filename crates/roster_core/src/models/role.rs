use super::Position;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Tactical role a card was played in when a rating was recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Goalkeeper,
    SweeperKeeper,
    FullBack,
    WingBack,
    InvertedWingBack,
    CenterBack,
    Stopper,
    Sweeper,
    AnchorMan,
    DeepLyingPlaymaker,
    BallWinningMidfielder,
    WideMidfielder,
    Winger,
    BoxToBox,
    CentralMidfielder,
    RoamingPlaymaker,
    AttackingMidfielder,
    AdvancedPlaymaker,
    Trequartista,
    InsideForward,
    Raumdeuter,
    Poacher,
    TargetMan,
    CompleteForward,
    PressingForward,
    FalseNine,
}

impl Role {
    /// Roles a rating at `position` may be tagged with.
    pub fn available_for(position: Position) -> &'static [Role] {
        use Role::*;

        match position {
            Position::Goalkeeper => &[Goalkeeper, SweeperKeeper],
            Position::LeftBack | Position::RightBack => &[FullBack, WingBack, InvertedWingBack],
            Position::CenterBack => &[CenterBack, Stopper, Sweeper],
            Position::DefensiveMidfielder => {
                &[AnchorMan, DeepLyingPlaymaker, BallWinningMidfielder]
            }
            Position::LeftMidfielder | Position::RightMidfielder => &[WideMidfielder, Winger],
            Position::CentralMidfielder => &[BoxToBox, CentralMidfielder, RoamingPlaymaker],
            Position::AttackingMidfielder => {
                &[AttackingMidfielder, AdvancedPlaymaker, Trequartista]
            }
            Position::LeftWinger | Position::RightWinger => &[Winger, InsideForward, Raumdeuter],
            Position::SecondStriker | Position::Striker => {
                &[Poacher, TargetMan, CompleteForward, PressingForward, FalseNine]
            }
        }
    }

    pub fn fits(&self, position: Position) -> bool {
        Role::available_for(position).contains(self)
    }
}
