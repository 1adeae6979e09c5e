//! Ranked bracket events
//!
//! The field is completed with generated fillers around the registrants'
//! mean rating, then everyone is ranked by a noisy placement score. The
//! bracket itself is not played out: the win/loss tally of each placement is
//! derived from how deep that placement would have gone.

use rand::Rng;
use tracing::debug;

use super::{ordinal, Competition, CompetitionResult, Tier};
use crate::config::BracketConfig;
use crate::generator::generate_competitor;
use crate::types::Competitor;

/// Field size for `entrants` registrants: the configured size for the tier,
/// grown to the next power of two when the registrants do not fit.
pub fn bracket_size(config: &BracketConfig, tier: Tier, entrants: usize) -> usize {
    let base = match tier {
        Tier::Finals => config.finals_size,
        _ => config.size,
    };
    base.max(entrants).next_power_of_two()
}

/// Number of rounds needed to reduce `size` to a single winner.
pub fn bracket_rounds(size: usize) -> u32 {
    size.max(1).trailing_zeros()
}

pub fn placement_label(rank: u32) -> String {
    match rank {
        1 => "Winner (1st)".to_string(),
        2 => "Finalist (2nd)".to_string(),
        n => ordinal(n),
    }
}

/// Rating change for a final placement.
pub fn placement_delta(rank: u32) -> f64 {
    (40.0 - 3.0 * rank as f64).round()
}

/// Wins for a placement, and the losses when they are fixed by the placement.
/// Placements past the final have a random loss count.
fn placement_tally(rank: u32, rounds: u32) -> (u32, Option<u32>) {
    match rank {
        1 => (rounds, Some(0)),
        2 => (rounds.saturating_sub(1), Some(1)),
        _ => {
            let wins = (rounds as f64 - rank as f64 / 4.0).floor().max(0.0);
            (wins as u32, None)
        }
    }
}

struct Entry {
    competitor: Competitor,
    registered: bool,
    score: f64,
}

pub(super) fn simulate<R: Rng + ?Sized>(
    rng: &mut R,
    config: &BracketConfig,
    competition: &Competition,
    registrants: &[Competitor],
) -> Vec<CompetitionResult> {
    let size = bracket_size(config, competition.tier, registrants.len());
    let rounds = bracket_rounds(size);
    let mean = registrants.iter().map(|c| c.rating).sum::<f64>() / registrants.len() as f64;

    let mut field: Vec<Entry> = registrants
        .iter()
        .map(|c| Entry {
            competitor: c.clone(),
            registered: true,
            score: 0.0,
        })
        .collect();

    for slot in registrants.len()..size {
        let target = mean + (rng.gen::<f64>() * 2.0 - 1.0) * config.filler_spread;
        let filler = generate_competitor(rng, format!("{}-filler-{slot}", competition.id), target);
        field.push(Entry {
            competitor: filler,
            registered: false,
            score: 0.0,
        });
    }

    for entry in &mut field {
        let bonus = if entry.registered {
            config.registrant_bonus
        } else {
            0.0
        };
        entry.score = entry.competitor.rating + rng.gen::<f64>() * config.placement_noise + bonus;
    }
    field.sort_by(|x, y| y.score.total_cmp(&x.score));

    debug!(competition = %competition.id, size, rounds, "bracket ranked");

    let federal = competition.tier == Tier::Federal;
    let mut results = Vec::with_capacity(registrants.len());

    for (index, entry) in field.iter().enumerate() {
        if !entry.registered {
            continue;
        }
        let rank = index as u32 + 1;
        let (wins, fixed_losses) = placement_tally(rank, rounds);
        let losses = match fixed_losses {
            Some(losses) => losses,
            None => rng.gen_range(1..=2),
        };

        let mut result = CompetitionResult::blank(&entry.competitor, placement_label(rank));
        result.exact_rank = Some(rank);
        result.rating_delta = placement_delta(rank);
        result.wins = wins;
        result.losses = losses;
        result.matches_played = wins + losses;
        result.qualified = rank <= 2;
        result.promoted = federal && rank == 1;
        result.relegated = federal && index + 2 >= size;
        results.push(result);
    }

    results
}

#[cfg(test)]
#[path = "bracket_tests.rs"]
mod bracket_tests;
