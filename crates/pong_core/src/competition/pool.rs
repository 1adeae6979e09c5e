//! Paired pool events
//!
//! Registrants enter as two-player teams. Each team plays a pool of three
//! rounds against generated pairs; every round is a five-leg reduced sheet
//! and is won by taking at least three legs.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::{Competition, CompetitionResult, Tier};
use crate::config::PoolConfig;
use crate::doubles::compose_pair;
use crate::game::{play_match, Match};
use crate::generator::generate_competitor;
use crate::types::{Competitor, Side};

/// Pool points for a round won and a round lost.
pub const ROUND_WIN_POINTS: u32 = 3;
pub const ROUND_LOSS_POINTS: u32 = 1;

/// Legs needed to take a round.
const LEGS_TO_WIN_ROUND: u32 = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PoolMovement {
    Promoted,
    Maintained,
    Relegated,
    Podium,
    NotClassified,
}

impl PoolMovement {
    pub fn label(self) -> &'static str {
        match self {
            PoolMovement::Promoted => "Promoted",
            PoolMovement::Maintained => "Maintained",
            PoolMovement::Relegated => "Relegated",
            PoolMovement::Podium => "Podium",
            PoolMovement::NotClassified => "Not classified",
        }
    }
}

/// Final pool position (1..=4) and movement for a team's pool points.
pub fn pool_standing(points: u32, tier: Tier) -> (u32, PoolMovement) {
    let (position, movement) = match points {
        9.. => (1, PoolMovement::Promoted),
        7..=8 => (2, PoolMovement::Maintained),
        5..=6 => (3, PoolMovement::Maintained),
        _ => (4, PoolMovement::Relegated),
    };

    if tier == Tier::Finals {
        let finals = if points >= 7 {
            PoolMovement::Podium
        } else {
            PoolMovement::NotClassified
        };
        return (position, finals);
    }
    (position, movement)
}

/// Singles tally of one team member across the pool.
#[derive(Default)]
struct Tally {
    wins: u32,
    losses: u32,
    delta: f64,
}

impl Tally {
    fn record(&mut self, game: &Match, side: Side) {
        if game.winner == side {
            self.wins += 1;
        } else {
            self.losses += 1;
        }
        self.delta += game.delta_for(side);
    }
}

pub(super) fn simulate<R: Rng + ?Sized>(
    rng: &mut R,
    config: &PoolConfig,
    competition: &Competition,
    registrants: &[Competitor],
) -> Vec<CompetitionResult> {
    if registrants.len() % 2 == 1 {
        if let Some(trailer) = registrants.last() {
            warn!(
                competition = %competition.id,
                competitor = %trailer.id,
                "unpaired registrant dropped"
            );
        }
    }

    let mut results = Vec::with_capacity(registrants.len());

    for (team, pair) in registrants.chunks_exact(2).enumerate() {
        let (first, second) = (&pair[0], &pair[1]);
        let team_mean = (first.rating + second.rating) / 2.0;

        let mut team_points = 0;
        let mut tallies = [Tally::default(), Tally::default()];

        for round in 0..config.rounds {
            let variance = if config.opponent_spread > 0 {
                rng.gen_range(-config.opponent_spread..config.opponent_spread)
            } else {
                0
            };
            let target = team_mean + variance as f64;
            let tag = format!("{}-t{team}-r{round}", competition.id);
            let opp_first = generate_competitor(rng, format!("{tag}-o1"), target);
            let opp_second = generate_competitor(rng, format!("{tag}-o2"), target);

            let legs = [
                play_match(rng, first, &opp_first),
                play_match(rng, second, &opp_second),
                play_match(
                    rng,
                    &compose_pair(first, second),
                    &compose_pair(&opp_first, &opp_second),
                ),
                play_match(rng, first, &opp_second),
                play_match(rng, second, &opp_first),
            ];

            for (leg, game) in legs.iter().enumerate() {
                match leg {
                    0 | 3 => tallies[0].record(game, Side::A),
                    1 | 4 => tallies[1].record(game, Side::A),
                    _ => {}
                }
            }

            let legs_won = legs.iter().filter(|g| g.winner == Side::A).count() as u32;
            team_points += if legs_won >= LEGS_TO_WIN_ROUND {
                ROUND_WIN_POINTS
            } else {
                ROUND_LOSS_POINTS
            };
        }

        let (position, movement) = pool_standing(team_points, competition.tier);
        let label = format!("{} in pool ({})", super::ordinal(position), movement.label());
        debug!(competition = %competition.id, team, team_points, ?movement, "pool finished");

        let members = [(first, second, &tallies[0]), (second, first, &tallies[1])];
        for (member, partner, tally) in members {
            let mut result = CompetitionResult::blank(member, label.clone());
            result.exact_rank = Some(position);
            result.partner_name = Some(partner.name.clone());
            result.rating_delta = tally.delta;
            result.matches_played = 2 * config.rounds;
            result.wins = tally.wins;
            result.losses = tally.losses;
            result.promoted = movement == PoolMovement::Promoted;
            result.relegated = movement == PoolMovement::Relegated;
            results.push(result);
        }
    }

    results
}

#[cfg(test)]
#[path = "pool_tests.rs"]
mod pool_tests;
