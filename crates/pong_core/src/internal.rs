//! Club internal events
//!
//! A fixed number of rounds with score-based pairing: before each round the
//! field is stably sorted by running score and neighbours meet. With an odd
//! field one competitor sits the round out on a bye.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::InternalConfig;
use crate::error::{Result, SimError};
use crate::game::{play_match, Match};
use crate::types::{Competitor, CompetitorId, Side};

/// Final line of the internal event table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InternalStanding {
    pub rank: u32,
    pub competitor_id: CompetitorId,
    pub name: String,
    pub rating: f64,
    pub wins: u32,
    pub losses: u32,
    pub byes: u32,
    pub score: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InternalRound {
    pub number: u32,
    pub matches: Vec<Match>,
    /// Competitor who sat this round out, if the field was odd
    pub bye: Option<CompetitorId>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InternalEvent {
    pub rounds: Vec<InternalRound>,
    pub standings: Vec<InternalStanding>,
}

impl InternalEvent {
    /// Every match of the event in playing order.
    pub fn matches(&self) -> impl Iterator<Item = &Match> {
        self.rounds.iter().flat_map(|r| r.matches.iter())
    }

    pub fn winner(&self) -> Option<&InternalStanding> {
        self.standings.first()
    }
}

#[derive(Default)]
struct Running {
    wins: u32,
    losses: u32,
    byes: u32,
    score: u32,
}

/// Position in `order` of the bye for an odd field: the lowest placed
/// competitor among those with the fewest byes so far.
fn pick_bye(order: &[usize], running: &[Running]) -> Option<usize> {
    let fewest = order.iter().map(|&i| running[i].byes).min()?;
    order.iter().rposition(|&i| running[i].byes == fewest)
}

/// Run an internal event over `players`.
pub fn run_internal_event<R: Rng + ?Sized>(
    rng: &mut R,
    config: &InternalConfig,
    players: &[Competitor],
) -> Result<InternalEvent> {
    if players.len() < 2 {
        return Err(SimError::NotEnoughCompetitors(players.len()));
    }

    let mut running: Vec<Running> = players.iter().map(|_| Running::default()).collect();
    let mut rounds = Vec::with_capacity(config.rounds as usize);

    for number in 1..=config.rounds {
        let mut order: Vec<usize> = (0..players.len()).collect();
        order.sort_by(|&x, &y| running[y].score.cmp(&running[x].score));

        let mut bye = None;
        if order.len() % 2 == 1 {
            if let Some(position) = pick_bye(&order, &running) {
                let idle = order.remove(position);
                running[idle].byes += 1;
                running[idle].score += config.bye_points;
                bye = Some(players[idle].id.clone());
            }
        }

        let mut matches = Vec::with_capacity(order.len() / 2);
        for pair in order.chunks_exact(2) {
            let (a, b) = (pair[0], pair[1]);
            let game = play_match(rng, &players[a], &players[b]);
            let (winner, loser) = match game.winner {
                Side::A => (a, b),
                Side::B => (b, a),
            };
            running[winner].wins += 1;
            running[winner].score += config.win_points;
            running[loser].losses += 1;
            running[loser].score += config.loss_points;
            matches.push(game);
        }

        debug!(round = number, matches = matches.len(), bye = ?bye, "internal round played");
        rounds.push(InternalRound {
            number,
            matches,
            bye,
        });
    }

    let mut table: Vec<usize> = (0..players.len()).collect();
    table.sort_by(|&x, &y| {
        running[y]
            .score
            .cmp(&running[x].score)
            .then_with(|| players[y].rating.total_cmp(&players[x].rating))
    });

    let standings = table
        .into_iter()
        .enumerate()
        .map(|(place, i)| InternalStanding {
            rank: place as u32 + 1,
            competitor_id: players[i].id.clone(),
            name: players[i].name.clone(),
            rating: players[i].rating,
            wins: running[i].wins,
            losses: running[i].losses,
            byes: running[i].byes,
            score: running[i].score,
        })
        .collect();

    Ok(InternalEvent { rounds, standings })
}

#[cfg(test)]
#[path = "internal_tests.rs"]
mod internal_tests;
