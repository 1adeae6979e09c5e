use super::*;
use std::collections::HashSet;

fn opponents() -> Vec<&'static str> {
    vec!["b", "c", "d", "e", "f", "g", "h"]
}

#[test]
fn test_day_one_layout() {
    assert_eq!(day_slots(1).unwrap(), vec![(0, 7), (6, 1), (2, 5), (4, 3)]);
}

#[test]
fn test_day_two_rotates() {
    assert_eq!(day_slots(2).unwrap(), vec![(6, 0), (7, 5), (4, 1), (2, 3)]);
}

#[test]
fn test_everyone_plays_once_per_day() {
    for day in 1..=7 {
        let fixtures = day_pairings(day, &"a", &opponents()).unwrap();
        assert_eq!(fixtures.len(), 4);

        let seen: HashSet<_> = fixtures.iter().flat_map(|f| [f.home, f.away]).collect();
        assert_eq!(seen.len(), FIELD_SIZE);
        assert!(seen.contains("a"));
    }
}

#[test]
fn test_seven_days_make_a_round_robin() {
    let mut pairs = HashSet::new();
    for day in 1..=7 {
        for (home, away) in day_slots(day).unwrap() {
            assert!(pairs.insert((home.min(away), home.max(away))), "pair repeated on day {day}");
        }
    }
    assert_eq!(pairs.len(), FIELD_SIZE * (FIELD_SIZE - 1) / 2);
}

#[test]
fn test_tracked_entrant_alternates_home_and_away() {
    let homes = (1..=7)
        .filter(|&day| day_slots(day).unwrap().iter().any(|&(home, _)| home == 0))
        .count();
    assert!((3..=4).contains(&homes));
}

#[test]
fn test_wrong_opponent_count() {
    let err = day_pairings(1, &"a", &["b", "c"][..]).unwrap_err();
    assert!(matches!(
        err,
        SimError::OpponentCount {
            expected: 7,
            actual: 2
        }
    ));
}

#[test]
fn test_day_zero_rejected() {
    assert!(matches!(day_slots(0), Err(SimError::InvalidDay(0))));
}
