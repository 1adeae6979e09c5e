//! Match simulation (best of five sets)

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::exchange::{point_exchange, RatingDelta};
use crate::point::PointOutcome;
use crate::set::{play_set, SetScore, POINTS_TO_WIN};
use crate::types::{Competitor, CompetitorId, Side};

pub const SETS_TO_WIN: u32 = 3;

/// A finished match between sides A and B.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Match {
    pub a: CompetitorId,
    pub b: CompetitorId,
    pub sets: Vec<SetScore>,
    pub winner: Side,
    /// Exchange for the winner (`gain`) and loser (`loss`)
    pub delta: RatingDelta,
    /// Decided without play because one side was a ghost
    #[serde(default)]
    pub walkover: bool,
    /// Every point in order, for playback
    #[serde(default)]
    pub log: Vec<PointOutcome>,
}

impl Match {
    pub fn winner_id(&self) -> &CompetitorId {
        self.id_of(self.winner)
    }

    pub fn loser_id(&self) -> &CompetitorId {
        self.id_of(self.winner.other())
    }

    pub fn id_of(&self, side: Side) -> &CompetitorId {
        match side {
            Side::A => &self.a,
            Side::B => &self.b,
        }
    }

    pub fn sets_won(&self, side: Side) -> u32 {
        self.sets.iter().filter(|s| s.winner() == side).count() as u32
    }

    /// Rating change for `side`: the gain if it won, the loss otherwise.
    pub fn delta_for(&self, side: Side) -> f64 {
        if side == self.winner {
            self.delta.gain
        } else {
            self.delta.loss
        }
    }

    /// Compact score line such as `3-1 (11-7, 9-11, 11-5, 12-10)`.
    pub fn score_line(&self) -> String {
        let sets: Vec<String> = self.sets.iter().map(|s| format!("{}-{}", s.a, s.b)).collect();
        format!(
            "{}-{} ({})",
            self.sets_won(Side::A),
            self.sets_won(Side::B),
            sets.join(", ")
        )
    }
}

/// Play a best-of-five match. Ratings are read from the competitors as given.
///
/// A ghost never plays: the other side takes the match 3-0 by walkover with
/// no rating change. Two ghosts hand the walkover to side A.
pub fn play_match<R: Rng + ?Sized>(rng: &mut R, a: &Competitor, b: &Competitor) -> Match {
    if a.is_ghost() || b.is_ghost() {
        let winner = if b.is_ghost() { Side::A } else { Side::B };
        return walkover(a, b, winner);
    }

    let mut sets = Vec::with_capacity(5);
    let mut log = Vec::new();
    let (mut won_a, mut won_b) = (0, 0);

    while won_a < SETS_TO_WIN && won_b < SETS_TO_WIN {
        let (score, points) = play_set(rng, a, b);
        match score.winner() {
            Side::A => won_a += 1,
            Side::B => won_b += 1,
        }
        sets.push(score);
        log.extend(points);
    }

    let winner = if won_a > won_b { Side::A } else { Side::B };
    let (w, l) = match winner {
        Side::A => (a, b),
        Side::B => (b, a),
    };
    let delta = point_exchange(w.rating, l.rating);

    trace!(
        winner = %w.id,
        loser = %l.id,
        sets = won_a + won_b,
        gain = delta.gain,
        "match finished"
    );

    Match {
        a: a.id.clone(),
        b: b.id.clone(),
        sets,
        winner,
        delta,
        walkover: false,
        log,
    }
}

fn walkover(a: &Competitor, b: &Competitor, winner: Side) -> Match {
    let set = match winner {
        Side::A => SetScore::new(POINTS_TO_WIN, 0),
        Side::B => SetScore::new(0, POINTS_TO_WIN),
    };
    Match {
        a: a.id.clone(),
        b: b.id.clone(),
        sets: vec![set; SETS_TO_WIN as usize],
        winner,
        delta: RatingDelta::ZERO,
        walkover: true,
        log: Vec::new(),
    }
}

#[cfg(test)]
#[path = "game_tests.rs"]
mod game_tests;
