//! Structural invariants of sets, matches and meetings over many seeds
//!
//! - Every set ends at 11+ with a two point margin, or past the ceiling
//! - Every match ends with exactly three sets for the winner
//! - The point log of a match adds up to its set scores
//! - Ratings exchange is zero-sum in sign only

use pong_core::config::MeetingConfig;
use pong_core::set::{POINTS_TO_WIN, SCORE_CEILING, WINNING_MARGIN};
use pong_core::{play_match, play_meeting, Attributes, Competitor, PlayStyle, Side};
use rand::rngs::StdRng;
use rand::SeedableRng;

const SEEDS: u64 = 200;

fn pairing(seed: u64) -> (Competitor, Competitor) {
    let styles = PlayStyle::ALL;
    let a = Competitor::new("a", "Ada Lind", 600.0 + (seed % 17) as f64 * 90.0)
        .with_style(styles[seed as usize % styles.len()])
        .with_attributes(Attributes::uniform(20.0 + (seed % 7) as f64 * 10.0));
    let b = Competitor::new("b", "Bo Carlsen", 700.0 + (seed % 13) as f64 * 110.0)
        .with_style(styles[(seed as usize / 3) % styles.len()])
        .with_attributes(Attributes::uniform(30.0 + (seed % 5) as f64 * 12.0));
    (a, b)
}

#[test]
fn test_every_set_is_legal() {
    for seed in 0..SEEDS {
        let mut rng = StdRng::seed_from_u64(seed);
        let (a, b) = pairing(seed);
        let game = play_match(&mut rng, &a, &b);

        for set in &game.sets {
            let (hi, lo) = (set.a.max(set.b), set.a.min(set.b));
            let won_outright = hi >= POINTS_TO_WIN && hi - lo >= WINNING_MARGIN;
            assert!(
                won_outright || hi > SCORE_CEILING,
                "seed {seed}: illegal set {}-{}",
                set.a,
                set.b
            );
        }
    }
}

#[test]
fn test_every_match_is_best_of_five() {
    for seed in 0..SEEDS {
        let mut rng = StdRng::seed_from_u64(seed);
        let (a, b) = pairing(seed);
        let game = play_match(&mut rng, &a, &b);

        let won = game.sets_won(game.winner);
        let lost = game.sets_won(game.winner.other());
        assert_eq!(won, 3, "seed {seed}");
        assert!(lost < 3, "seed {seed}");
        assert_eq!(game.sets.len() as u32, won + lost);
        assert!(!game.walkover);
    }
}

#[test]
fn test_point_log_matches_score() {
    for seed in 0..50 {
        let mut rng = StdRng::seed_from_u64(seed);
        let (a, b) = pairing(seed);
        let game = play_match(&mut rng, &a, &b);

        let total: u32 = game.sets.iter().map(|s| s.a + s.b).sum();
        assert_eq!(game.log.len() as u32, total);
        let a_points = game.log.iter().filter(|p| p.winner == Side::A).count() as u32;
        assert_eq!(a_points, game.sets.iter().map(|s| s.a).sum::<u32>());
    }
}

#[test]
fn test_exchange_signs() {
    for seed in 0..SEEDS {
        let mut rng = StdRng::seed_from_u64(seed);
        let (a, b) = pairing(seed);
        let game = play_match(&mut rng, &a, &b);
        assert!(game.delta.gain >= 0.0);
        assert!(game.delta.loss <= 0.0);
    }
}

#[test]
fn test_same_seed_replays_identically() {
    let (a, b) = pairing(3);
    let first = play_match(&mut StdRng::seed_from_u64(99), &a, &b);
    let second = play_match(&mut StdRng::seed_from_u64(99), &a, &b);
    assert_eq!(first, second);
}

#[test]
fn test_meeting_scores_add_up() {
    for seed in 0..30 {
        let mut rng = StdRng::seed_from_u64(seed);
        let home: Vec<Competitor> = (0..4)
            .map(|i| {
                let rating = 1000.0 + i as f64 * 60.0;
                Competitor::new(format!("h{i}"), format!("Home {i}"), rating)
            })
            .collect();
        let away: Vec<Competitor> = (0..(seed as usize % 5))
            .map(|i| Competitor::new(format!("a{i}"), format!("Away {i}"), 1100.0))
            .collect();

        let meeting = play_meeting(&mut rng, &MeetingConfig::default(), &home, &away);
        assert_eq!(
            (meeting.home_score + meeting.away_score) as usize,
            meeting.legs.len()
        );
    }
}
