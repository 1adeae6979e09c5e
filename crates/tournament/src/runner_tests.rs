use super::*;
use pong_core::CompetitionShape;

fn runner(seed: u64) -> EventRunner {
    EventRunner::new(
        SimConfig::default(),
        RunnerConfig {
            seed: Some(seed),
            verbose: false,
        },
    )
}

fn squad(prefix: &str) -> Vec<Competitor> {
    (0..4)
        .map(|i| Competitor::new(format!("{prefix}{i}"), format!("{prefix} {i}"), 1100.0))
        .collect()
}

#[test]
fn test_seeded_runs_replay() {
    let a = Competitor::new("a", "Ana", 1200.0);
    let b = Competitor::new("b", "Ben", 1150.0);

    let first = runner(7).run_match(&a, &b);
    let second = runner(7).run_match(&a, &b);
    assert_eq!(first, second);
}

#[test]
fn test_runner_keeps_its_stream() {
    let a = Competitor::new("a", "Ana", 1200.0);
    let b = Competitor::new("b", "Ben", 1150.0);

    let mut runner = runner(8);
    let games: Vec<Match> = (0..3).map(|_| runner.run_match(&a, &b)).collect();
    assert!(games.iter().all(|g| g.sets_won(g.winner) == 3));
    assert_eq!(runner.seed(), Some(8));
}

#[test]
fn test_meeting_and_competition() {
    let mut runner = runner(9);
    let meeting = runner.run_meeting(&squad("h"), &squad("a"));
    assert_eq!(meeting.home_score + meeting.away_score, 14);

    let competition = Competition::new("open", "Open", CompetitionShape::RankedBracket);
    let results = runner.run_competition(&competition, &squad("r"));
    assert_eq!(results.len(), 4);
}

#[test]
fn test_internal_needs_players() {
    let mut runner = runner(10);
    assert!(runner.run_internal(&squad("m")[..1]).is_err());
    assert_eq!(runner.run_internal(&squad("m")).unwrap().standings.len(), 4);
}
