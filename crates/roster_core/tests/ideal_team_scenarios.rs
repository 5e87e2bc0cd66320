//! End-to-end generator scenarios through the public API.

use roster_core::{
    generate_ideal_team, CardId, Formation, FormationSlot, PlayStyle, Player, PlayerCard,
    PlayerStats, Position, SlotAssignment,
};
use std::collections::HashSet;

fn four_three_three() -> Formation {
    use Position::*;
    let slots = [
        (Goalkeeper, 50.0, 92.0),
        (LeftBack, 15.0, 72.0),
        (CenterBack, 38.0, 76.0),
        (CenterBack, 62.0, 76.0),
        (RightBack, 85.0, 72.0),
        (CentralMidfielder, 30.0, 50.0),
        (DefensiveMidfielder, 50.0, 58.0),
        (CentralMidfielder, 70.0, 50.0),
        (LeftWinger, 18.0, 22.0),
        (Striker, 50.0, 15.0),
        (RightWinger, 82.0, 22.0),
    ];
    Formation::new(
        "4-3-3",
        slots.iter().map(|(p, x, y)| FormationSlot::new(*p).with_coords(*x, *y)).collect(),
    )
    .unwrap()
}

fn card(id: &str, style: PlayStyle, rated: Vec<(Position, Vec<f64>)>) -> PlayerCard {
    let mut card = PlayerCard::new(id, id, style);
    for (position, values) in rated {
        card = card.with_ratings(position, &values).unwrap();
    }
    card
}

#[test]
fn test_single_player_fills_only_first_matching_slot() {
    let player = Player::new("A", "Player A").with_card(card(
        "A-base",
        PlayStyle::GoalPoacher,
        vec![(Position::Striker, vec![9.0, 9.0, 9.0]), (Position::LeftWinger, vec![5.0])],
    ));

    let mut slots = vec![FormationSlot::new(Position::Striker); 2];
    slots.push(FormationSlot::new(Position::LeftWinger));
    slots.extend(vec![FormationSlot::new(Position::Goalkeeper); 8]);
    let formation = Formation::new("two strikers", slots).unwrap();

    let team = generate_ideal_team(&[player], &formation, &HashSet::new());

    match &team.slots[0].starter {
        SlotAssignment::Assigned(a) => {
            assert_eq!(a.player_id, "A");
            assert_eq!(a.card_id, "A-base");
            assert_eq!(a.average, 9.0);
            assert_eq!(a.performance.stats.matches, 3);
        }
        SlotAssignment::Vacant(_) => panic!("slot 1 should be filled"),
    }
    assert!(team.slots[1].starter.is_vacant());
    assert!(team.slots[2].starter.is_vacant(), "A is used even though rated at EXI");
    assert_eq!(team.vacancy_count(), 21);
}

#[test]
fn test_empty_roster_vacant_shape() {
    let formation = four_three_three();
    let team = generate_ideal_team(&[], &formation, &HashSet::new());

    assert_eq!(team.slots.len(), 11);
    for (slot, formation_slot) in team.slots.iter().zip(formation.slots()) {
        for entry in [&slot.starter, &slot.substitute] {
            match entry {
                SlotAssignment::Vacant(v) => {
                    assert_eq!(v.position, formation_slot.position);
                    assert_eq!(v.average, 0.0);
                    assert_eq!(v.performance.stats, PlayerStats::default());
                    assert!(!v.performance.is_hot_streak);
                    assert!(!v.performance.is_consistent);
                    assert!(!v.performance.is_promising);
                    assert!(!v.performance.is_versatile);
                }
                SlotAssignment::Assigned(_) => panic!("empty roster cannot assign"),
            }
        }
    }
}

#[test]
fn test_full_squad_with_bench() {
    let formation = four_three_three();
    let mut players = Vec::new();
    for (i, slot) in formation.slots().iter().enumerate() {
        players.push(Player::new(format!("first-{}", i), "First").with_card(card(
            &format!("first-{}-card", i),
            PlayStyle::None,
            vec![(slot.position, vec![8.0; 12])],
        )));
        players.push(Player::new(format!("second-{}", i), "Second").with_card(card(
            &format!("second-{}-card", i),
            PlayStyle::None,
            vec![(slot.position, vec![6.0; 12])],
        )));
    }

    let team = generate_ideal_team(&players, &formation, &HashSet::new());

    assert_eq!(team.vacancy_count(), 0);
    assert_eq!(team.assigned().count(), 22);
    for starter in team.starters() {
        assert_eq!(starter.average(), 8.0);
    }
    for sub in team.substitutes() {
        assert_eq!(sub.average(), 6.0);
    }
}

#[test]
fn test_progressive_discards() {
    let players: Vec<Player> = [9.0, 8.0, 7.0]
        .iter()
        .enumerate()
        .map(|(i, avg)| {
            Player::new(format!("gk{}", i), "Keeper").with_card(card(
                &format!("gk{}-card", i),
                PlayStyle::DefensiveGoalkeeper,
                vec![(Position::Goalkeeper, vec![*avg; 12])],
            ))
        })
        .collect();
    let formation = four_three_three();

    let mut discarded: HashSet<CardId> = HashSet::new();
    let mut starters = Vec::new();
    for _ in 0..3 {
        let team = generate_ideal_team(&players, &formation, &discarded);
        let starter = team.slots[0].starter.assigned().map(|a| a.card_id.clone());
        if let Some(card_id) = &starter {
            discarded.insert(card_id.clone());
        }
        starters.push(starter);
    }

    assert_eq!(
        starters,
        vec![
            Some("gk0-card".to_string()),
            Some("gk1-card".to_string()),
            Some("gk2-card".to_string())
        ]
    );
    let team = generate_ideal_team(&players, &formation, &discarded);
    assert!(team.slots[0].starter.is_vacant());
}

#[test]
fn test_styled_substitute_search_exhausts_tiers_before_fallback() {
    // Styled slot: the only preferred-style candidate is a plain veteran
    // (no tags), while an unstyled hot-streak player also exists.
    let players = vec![
        Player::new("starter", "Starter").with_card(card(
            "starter-card",
            PlayStyle::Destroyer,
            vec![(Position::CenterBack, vec![9.0; 12])],
        )),
        Player::new("veteran", "Veteran").with_card(card(
            "veteran-card",
            PlayStyle::Destroyer,
            vec![(Position::CenterBack, vec![6.0; 12])],
        )),
        Player::new("hot", "Hot").with_card(card(
            "hot-card",
            PlayStyle::BuildUp,
            vec![(
                Position::CenterBack,
                vec![5.0, 5.0, 5.0, 5.0, 5.0, 5.0, 5.0, 5.0, 5.0, 8.0, 8.0, 8.0],
            )],
        )),
    ];
    let mut slots =
        vec![FormationSlot::new(Position::CenterBack).with_styles([PlayStyle::Destroyer])];
    slots.extend(vec![FormationSlot::new(Position::Goalkeeper); 10]);
    let formation = Formation::new("styled", slots).unwrap();

    let team = generate_ideal_team(&players, &formation, &HashSet::new());

    assert_eq!(team.slots[0].starter.assigned().unwrap().player_id, "starter");
    assert_eq!(team.slots[0].substitute.assigned().unwrap().player_id, "veteran");
}

#[test]
fn test_inputs_are_not_modified() {
    let players = vec![Player::new("A", "A").with_card(card(
        "A-card",
        PlayStyle::None,
        vec![(Position::Goalkeeper, vec![7.0])],
    ))];
    let formation = four_three_three();
    let discarded: HashSet<CardId> = ["other".to_string()].into_iter().collect();

    let players_before = players.clone();
    let formation_before = formation.clone();
    let discarded_before = discarded.clone();

    let _ = generate_ideal_team(&players, &formation, &discarded);

    assert_eq!(players, players_before);
    assert_eq!(formation, formation_before);
    assert_eq!(discarded, discarded_before);
}

#[test]
fn test_coords_pass_through() {
    let formation = four_three_three();
    assert_eq!(formation.slots()[0].coords.unwrap().y, 92.0);
}
