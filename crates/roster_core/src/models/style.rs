//! Card playing styles.

use super::Position;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Playing style printed on a card. Formation slots may prefer a set of these.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
    JsonSchema,
)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(test, derive(strum_macros::EnumIter))]
pub enum PlayStyle {
    #[default]
    None,
    // Goalkeepers
    DefensiveGoalkeeper,
    OffensiveGoalkeeper,
    // Full-backs
    DefensiveFullBack,
    OffensiveFullBack,
    FullBackFinisher,
    // Centre-backs
    Destroyer,
    BuildUp,
    ExtraFrontman,
    // Midfield
    BoxToBox,
    AnchorMan,
    Orchestrator,
    HolePlayer,
    CreativePlaymaker,
    CrossSpecialist,
    RoamingFlank,
    ClassicNo10,
    // Attack
    DummyRunner,
    DeepLyingForward,
    ProlificWinger,
    GoalPoacher,
    FoxInTheBox,
    TargetMan,
}

impl PlayStyle {
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::None => "None",
            Self::DefensiveGoalkeeper => "Defensive Goalkeeper",
            Self::OffensiveGoalkeeper => "Offensive Goalkeeper",
            Self::DefensiveFullBack => "Defensive Full-back",
            Self::OffensiveFullBack => "Offensive Full-back",
            Self::FullBackFinisher => "Full-back Finisher",
            Self::Destroyer => "Destroyer",
            Self::BuildUp => "Build Up",
            Self::ExtraFrontman => "Extra Frontman",
            Self::BoxToBox => "Box-to-Box",
            Self::AnchorMan => "Anchor Man",
            Self::Orchestrator => "Orchestrator",
            Self::HolePlayer => "Hole Player",
            Self::CreativePlaymaker => "Creative Playmaker",
            Self::CrossSpecialist => "Cross Specialist",
            Self::RoamingFlank => "Roaming Flank",
            Self::ClassicNo10 => "Classic No. 10",
            Self::DummyRunner => "Dummy Runner",
            Self::DeepLyingForward => "Deep-Lying Forward",
            Self::ProlificWinger => "Prolific Winger",
            Self::GoalPoacher => "Goal Poacher",
            Self::FoxInTheBox => "Fox in the Box",
            Self::TargetMan => "Target Man",
        }
    }

    /// Styles that make sense at `position`, in menu order.
    ///
    /// `include_none` prepends [`PlayStyle::None`] for "no preference" pickers.
    pub fn available_for(position: Position, include_none: bool) -> Vec<PlayStyle> {
        use PlayStyle::*;

        let styles: &[PlayStyle] = match position {
            Position::Goalkeeper => &[DefensiveGoalkeeper, OffensiveGoalkeeper],
            Position::LeftBack | Position::RightBack => {
                &[DefensiveFullBack, OffensiveFullBack, FullBackFinisher]
            }
            Position::CenterBack => &[Destroyer, BuildUp, ExtraFrontman],
            Position::DefensiveMidfielder => &[BoxToBox, AnchorMan, Orchestrator, Destroyer],
            Position::CentralMidfielder => {
                &[HolePlayer, BoxToBox, AnchorMan, Destroyer, Orchestrator, CreativePlaymaker]
            }
            Position::LeftMidfielder | Position::RightMidfielder => {
                &[BoxToBox, HolePlayer, CrossSpecialist, RoamingFlank, CreativePlaymaker]
            }
            Position::AttackingMidfielder => {
                &[CreativePlaymaker, ClassicNo10, HolePlayer, DummyRunner]
            }
            Position::SecondStriker => {
                &[DeepLyingForward, CreativePlaymaker, ClassicNo10, HolePlayer, DummyRunner]
            }
            Position::LeftWinger | Position::RightWinger => {
                &[CreativePlaymaker, ProlificWinger, RoamingFlank, CrossSpecialist]
            }
            Position::Striker => {
                &[GoalPoacher, DummyRunner, FoxInTheBox, TargetMan, DeepLyingForward]
            }
        };

        let mut out = Vec::with_capacity(styles.len() + 1);
        if include_none {
            out.push(PlayStyle::None);
        }
        out.extend_from_slice(styles);
        out
    }
}
