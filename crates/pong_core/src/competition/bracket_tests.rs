use super::*;
use crate::competition::CompetitionShape;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn event(tier: Tier) -> Competition {
    Competition::new("open", "Regional open", CompetitionShape::RankedBracket).with_tier(tier)
}

fn field(n: usize, rating: f64) -> Vec<Competitor> {
    (0..n)
        .map(|i| Competitor::new(format!("p{i}"), format!("Player {i}"), rating))
        .collect()
}

#[test]
fn test_bracket_size_by_tier() {
    let config = BracketConfig::default();
    assert_eq!(bracket_size(&config, Tier::Standard, 1), 16);
    assert_eq!(bracket_size(&config, Tier::Federal, 16), 16);
    assert_eq!(bracket_size(&config, Tier::Finals, 3), 32);
    assert_eq!(bracket_size(&config, Tier::Standard, 17), 32);
}

#[test]
fn test_rounds() {
    assert_eq!(bracket_rounds(16), 4);
    assert_eq!(bracket_rounds(32), 5);
}

#[test]
fn test_labels() {
    assert_eq!(placement_label(1), "Winner (1st)");
    assert_eq!(placement_label(2), "Finalist (2nd)");
    assert_eq!(placement_label(3), "3rd");
    assert_eq!(placement_label(12), "12th");
    assert_eq!(placement_label(22), "22nd");
}

#[test]
fn test_delta_by_rank() {
    assert_eq!(placement_delta(1), 37.0);
    assert_eq!(placement_delta(2), 34.0);
    assert_eq!(placement_delta(16), -8.0);
}

#[test]
fn test_tally_by_rank() {
    assert_eq!(placement_tally(1, 4), (4, Some(0)));
    assert_eq!(placement_tally(2, 4), (3, Some(1)));
    assert_eq!(placement_tally(3, 4), (3, None));
    assert_eq!(placement_tally(8, 4), (2, None));
    assert_eq!(placement_tally(16, 4), (0, None));
    assert_eq!(placement_tally(32, 5), (0, None));
}

#[test]
fn test_strong_registrant_wins_standard_event() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut players = field(1, 3000.0);
    players.push(Competitor::new("weak", "Weak Player", 600.0));

    let results = simulate(&mut rng, &BracketConfig::default(), &event(Tier::Standard), &players);

    assert_eq!(results.len(), 2);
    let top = &results[0];
    assert_eq!(top.competitor_id.as_str(), "p0");
    assert_eq!(top.exact_rank, Some(1));
    assert_eq!(top.placement, "Winner (1st)");
    assert_eq!((top.wins, top.losses, top.matches_played), (4, 0, 4));
    assert!(top.qualified);
    assert!(!top.promoted, "only federal events promote");
}

#[test]
fn test_federal_flags() {
    let mut rng = StdRng::seed_from_u64(4);
    let mut players = vec![Competitor::new("ace", "Ace Player", 4000.0)];
    players.push(Competitor::new("last", "Last Player", 0.0));

    let results = simulate(&mut rng, &BracketConfig::default(), &event(Tier::Federal), &players);

    let ace = results.iter().find(|r| r.competitor_id.as_str() == "ace").unwrap();
    assert!(ace.promoted && ace.qualified && !ace.relegated);

    let last = results.iter().find(|r| r.competitor_id.as_str() == "last").unwrap();
    assert_eq!(last.exact_rank, Some(16));
    assert!(last.relegated && !last.promoted);
    assert!((1..=2).contains(&last.losses));
}

#[test]
fn test_full_field_has_unique_ranks() {
    let mut rng = StdRng::seed_from_u64(5);
    let players = field(16, 1200.0);
    let results = simulate(&mut rng, &BracketConfig::default(), &event(Tier::Standard), &players);

    let mut ranks: Vec<u32> = results.iter().filter_map(|r| r.exact_rank).collect();
    ranks.sort_unstable();
    assert_eq!(ranks, (1..=16).collect::<Vec<_>>());
    assert_eq!(results.iter().filter(|r| r.qualified).count(), 2);
}
