//! Formations, their slots and the per-formation match record.

use super::{PlayStyle, Position};
use crate::error::{Result, RosterError};
use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Number of slots every formation must have.
pub const FORMATION_SIZE: usize = 11;

/// Where a slot is drawn on the pitch, in percent of width/height.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SlotCoords {
    pub x: f32,
    pub y: f32,
}

impl SlotCoords {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x: x.clamp(0.0, 100.0), y: y.clamp(0.0, 100.0) }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct FormationSlot {
    pub position: Position,
    /// Preferred card styles; empty means no preference.
    #[serde(default)]
    pub styles: Vec<PlayStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coords: Option<SlotCoords>,
}

impl FormationSlot {
    pub fn new(position: Position) -> Self {
        Self { position, styles: Vec::new(), coords: None }
    }

    pub fn with_styles(mut self, styles: impl IntoIterator<Item = PlayStyle>) -> Self {
        self.styles = styles.into_iter().collect();
        self
    }

    pub fn with_coords(mut self, x: f32, y: f32) -> Self {
        self.coords = Some(SlotCoords::new(x, y));
        self
    }

    pub fn has_style_preference(&self) -> bool {
        !self.styles.is_empty()
    }

    pub fn prefers(&self, style: PlayStyle) -> bool {
        self.styles.contains(&style)
    }
}

/// A validated 11-slot formation.
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct Formation {
    pub name: String,
    slots: Vec<FormationSlot>,
    #[serde(default)]
    pub matches: Vec<MatchResult>,
}

impl Formation {
    pub fn new(name: impl Into<String>, slots: Vec<FormationSlot>) -> Result<Self> {
        if slots.len() != FORMATION_SIZE {
            return Err(RosterError::InvalidFormationSize {
                expected: FORMATION_SIZE,
                found: slots.len(),
            });
        }
        Ok(Self { name: name.into(), slots, matches: Vec::new() })
    }

    pub fn slots(&self) -> &[FormationSlot] {
        &self.slots
    }

    pub fn record_match(&mut self, result: MatchResult) {
        self.matches.push(result);
    }

    pub fn record(&self) -> FormationRecord {
        FormationRecord::from_matches(&self.matches)
    }
}

#[derive(Deserialize)]
struct RawFormation {
    name: String,
    slots: Vec<FormationSlot>,
    #[serde(default)]
    matches: Vec<MatchResult>,
}

impl<'de> Deserialize<'de> for Formation {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = RawFormation::deserialize(deserializer)?;
        let mut formation = Formation::new(raw.name, raw.slots).map_err(serde::de::Error::custom)?;
        formation.matches = raw.matches;
        Ok(formation)
    }
}

/// A played match with this formation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct MatchResult {
    pub id: String,
    pub goals_for: u32,
    pub goals_against: u32,
    pub date: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum MatchOutcome {
    Win,
    Draw,
    Loss,
}

impl MatchOutcome {
    pub fn of(result: &MatchResult) -> Self {
        match result.goals_for.cmp(&result.goals_against) {
            std::cmp::Ordering::Greater => MatchOutcome::Win,
            std::cmp::Ordering::Equal => MatchOutcome::Draw,
            std::cmp::Ordering::Less => MatchOutcome::Loss,
        }
    }

    pub fn points(&self) -> u32 {
        match self {
            MatchOutcome::Win => 3,
            MatchOutcome::Draw => 1,
            MatchOutcome::Loss => 0,
        }
    }
}

/// Win/draw/loss summary of a formation's match history.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
pub struct FormationRecord {
    pub total: usize,
    pub wins: usize,
    pub draws: usize,
    pub losses: usize,
    pub goals_for: u32,
    pub goals_against: u32,
    pub goal_difference: i64,
    /// Share of available points won, 0-100.
    pub effectiveness: f64,
}

impl FormationRecord {
    pub fn from_matches(matches: &[MatchResult]) -> Self {
        if matches.is_empty() {
            return Self::default();
        }

        let mut record = Self { total: matches.len(), ..Self::default() };
        let mut points = 0u32;
        for m in matches {
            let outcome = MatchOutcome::of(m);
            match outcome {
                MatchOutcome::Win => record.wins += 1,
                MatchOutcome::Draw => record.draws += 1,
                MatchOutcome::Loss => record.losses += 1,
            }
            points += outcome.points();
            record.goals_for += m.goals_for;
            record.goals_against += m.goals_against;
        }
        record.goal_difference = i64::from(record.goals_for) - i64::from(record.goals_against);
        record.effectiveness = f64::from(points) / (record.total as f64 * 3.0) * 100.0;
        record
    }

    /// Most recent `n` matches, newest first.
    pub fn recent(matches: &[MatchResult], n: usize) -> Vec<&MatchResult> {
        let mut sorted: Vec<&MatchResult> = matches.iter().collect();
        sorted.sort_by(|a, b| b.date.cmp(&a.date));
        sorted.truncate(n);
        sorted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn result(id: &str, gf: u32, ga: u32, day: u32) -> MatchResult {
        MatchResult {
            id: id.to_string(),
            goals_for: gf,
            goals_against: ga,
            date: Utc.with_ymd_and_hms(2024, 3, day, 20, 0, 0).unwrap(),
        }
    }

    fn slots(n: usize) -> Vec<FormationSlot> {
        (0..n).map(|_| FormationSlot::new(Position::CentralMidfielder)).collect()
    }

    #[test]
    fn test_formation_requires_eleven_slots() {
        assert!(Formation::new("4-3-3", slots(11)).is_ok());
        match Formation::new("broken", slots(10)) {
            Err(RosterError::InvalidFormationSize { expected, found }) => {
                assert_eq!(expected, 11);
                assert_eq!(found, 10);
            }
            other => panic!("expected size error, got {:?}", other),
        }
    }

    #[test]
    fn test_deserialize_rejects_wrong_size() {
        let json = serde_json::json!({
            "name": "short",
            "slots": [{ "position": "PT" }]
        });
        assert!(serde_json::from_value::<Formation>(json).is_err());
    }

    #[test]
    fn test_coords_are_clamped() {
        let slot = FormationSlot::new(Position::Striker).with_coords(120.0, -5.0);
        assert_eq!(slot.coords, Some(SlotCoords { x: 100.0, y: 0.0 }));
    }

    #[test]
    fn test_record_summary() {
        let matches =
            vec![result("m1", 2, 0, 1), result("m2", 1, 1, 2), result("m3", 0, 3, 3), result("m4", 4, 2, 4)];
        let record = FormationRecord::from_matches(&matches);

        assert_eq!(record.total, 4);
        assert_eq!((record.wins, record.draws, record.losses), (2, 1, 1));
        assert_eq!(record.goals_for, 7);
        assert_eq!(record.goals_against, 6);
        assert_eq!(record.goal_difference, 1);
        // (2*3 + 1) / 12
        assert!((record.effectiveness - 58.333_333).abs() < 1e-4);
    }

    #[test]
    fn test_empty_record() {
        let record = FormationRecord::from_matches(&[]);
        assert_eq!(record, FormationRecord::default());
        assert_eq!(record.effectiveness, 0.0);
    }

    #[test]
    fn test_recent_is_newest_first() {
        let matches = vec![result("a", 1, 0, 5), result("b", 0, 0, 9), result("c", 0, 1, 7)];
        let recent: Vec<&str> =
            FormationRecord::recent(&matches, 2).iter().map(|m| m.id.as_str()).collect();
        assert_eq!(recent, vec!["b", "c"]);
    }
}
