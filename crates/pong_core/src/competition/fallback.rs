//! Heuristic results for competitions with no dedicated format
//!
//! Nothing is played. A skill ratio against the competition's rating cap is
//! blurred with noise and mapped onto a finishing stage.

use rand::Rng;

use super::{Competition, CompetitionResult};
use crate::config::FallbackConfig;
use crate::types::Competitor;

const STAGE_NOISE: f64 = 0.5;
const WIN_SHARE: f64 = 0.6;
const WIN_VALUE: f64 = 8.0;
const LOSS_VALUE: f64 = 6.0;

/// Stage reached for a blurred skill total.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    Winner,
    Finalist,
    Semifinal,
    Quarterfinal,
    PoolStage,
}

impl Stage {
    pub fn from_total(total: f64) -> Self {
        if total > 1.3 {
            Stage::Winner
        } else if total > 1.1 {
            Stage::Finalist
        } else if total > 0.9 {
            Stage::Semifinal
        } else if total > 0.7 {
            Stage::Quarterfinal
        } else {
            Stage::PoolStage
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Stage::Winner => "Winner",
            Stage::Finalist => "Finalist",
            Stage::Semifinal => "Semifinal",
            Stage::Quarterfinal => "Quarterfinal",
            Stage::PoolStage => "Pool stage",
        }
    }
}

/// Tally of a fallback result before it is attached to a competitor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StageTally {
    pub stage: Stage,
    pub matches: u32,
    pub wins: u32,
    pub losses: u32,
    pub delta: f64,
}

/// Derive the tally for a blurred skill `total` over `matches` matches.
///
/// The delta is computed from the raw tally and then gets the stage bonus.
/// A stage from Semifinal up also replaces the tally; a Quarterfinal only
/// lifts the wins to at least one and leaves the losses as they were.
pub fn stage_tally(total: f64, matches: u32) -> StageTally {
    let wins = ((matches as f64 * total * WIN_SHARE).floor().max(0.0) as u32).min(matches);
    let losses = matches - wins;
    let delta = WIN_VALUE * wins as f64 - LOSS_VALUE * losses as f64;
    let stage = Stage::from_total(total);

    let (wins, losses, delta) = match stage {
        Stage::Winner => (matches, 0, delta + 30.0),
        Stage::Finalist => (matches.saturating_sub(1), 1, delta + 20.0),
        Stage::Semifinal => (matches.saturating_sub(2), 2, delta + 10.0),
        Stage::Quarterfinal => (wins.max(1), losses, delta + 5.0),
        Stage::PoolStage => (wins, losses, delta),
    };

    StageTally {
        stage,
        matches,
        wins,
        losses,
        delta,
    }
}

pub(super) fn simulate<R: Rng + ?Sized>(
    rng: &mut R,
    config: &FallbackConfig,
    competition: &Competition,
    registrants: &[Competitor],
) -> Vec<CompetitionResult> {
    let cap = competition
        .max_rating
        .filter(|&cap| cap > 0.0)
        .unwrap_or(config.default_rating_cap);

    registrants
        .iter()
        .map(|competitor| {
            let skill = (competitor.rating / cap).min(1.0);
            let total = skill + rng.gen::<f64>() * STAGE_NOISE;
            let matches = 3 + rng.gen_range(0..4);
            let tally = stage_tally(total, matches);

            let mut result = CompetitionResult::blank(competitor, tally.stage.label().to_string());
            result.rating_delta = tally.delta;
            result.matches_played = tally.matches;
            result.wins = tally.wins;
            result.losses = tally.losses;
            result
        })
        .collect()
}
