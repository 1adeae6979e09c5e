//! Event runner: owns the random source and the simulation settings

use pong_core::{
    play_match, play_meeting, run_internal_event, simulate_competition, simulate_league_day,
    Competition, CompetitionResult, Competitor, InternalEvent, LeagueClub, LeagueMeeting, Match,
    Meeting, SetScore, SimConfig,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

/// Configuration for a run
#[derive(Debug, Clone, Default)]
pub struct RunnerConfig {
    /// Replay seed; `None` draws from OS entropy
    pub seed: Option<u64>,
    /// Print point-by-point commentary for single matches
    pub verbose: bool,
}

/// Runs events against a single random source
pub struct EventRunner {
    sim: SimConfig,
    config: RunnerConfig,
    rng: StdRng,
}

impl EventRunner {
    pub fn new(sim: SimConfig, config: RunnerConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { sim, config, rng }
    }

    pub fn seed(&self) -> Option<u64> {
        self.config.seed
    }

    pub fn sim_config(&self) -> &SimConfig {
        &self.sim
    }

    /// Play a single match between two competitors
    pub fn run_match(&mut self, a: &Competitor, b: &Competitor) -> Match {
        let game = play_match(&mut self.rng, a, b);

        if self.config.verbose {
            let mut score = SetScore::default();
            for (n, point) in game.log.iter().enumerate() {
                score.add_point(point.winner);
                println!("Point {:>3}: {:<40} {}-{}", n + 1, point.description, score.a, score.b);
                if score.is_complete() {
                    score = SetScore::default();
                }
            }
        }

        info!(winner = %game.winner_id(), score = %game.score_line(), "match played");
        game
    }

    pub fn run_meeting(&mut self, home: &[Competitor], away: &[Competitor]) -> Meeting {
        let meeting = play_meeting(&mut self.rng, &self.sim.meeting, home, away);
        info!(
            home = meeting.home_score,
            away = meeting.away_score,
            "meeting played"
        );
        meeting
    }

    pub fn run_league_day(
        &mut self,
        day: u32,
        tracked_club: &str,
        clubs: &[LeagueClub],
        excluded: Option<&str>,
    ) -> pong_core::Result<Vec<LeagueMeeting>> {
        simulate_league_day(&mut self.rng, &self.sim, day, tracked_club, clubs, excluded)
    }

    pub fn run_competition(
        &mut self,
        competition: &Competition,
        registrants: &[Competitor],
    ) -> Vec<CompetitionResult> {
        let results = simulate_competition(&mut self.rng, &self.sim, competition, registrants);
        info!(competition = %competition.name, results = results.len(), "competition simulated");
        results
    }

    pub fn run_internal(&mut self, players: &[Competitor]) -> pong_core::Result<InternalEvent> {
        run_internal_event(&mut self.rng, &self.sim.internal, players)
    }
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod runner_tests;
