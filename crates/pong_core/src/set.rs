//! Set simulation: first to 11, win by 2, with a hard ceiling.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::point::{play_point, PointOutcome};
use crate::types::{Competitor, Side};

pub const POINTS_TO_WIN: u32 = 11;
pub const WINNING_MARGIN: u32 = 2;
/// A set stops as soon as either score goes past this, whatever the margin.
pub const SCORE_CEILING: u32 = 50;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetScore {
    pub a: u32,
    pub b: u32,
}

impl SetScore {
    pub fn new(a: u32, b: u32) -> Self {
        Self { a, b }
    }

    /// True once the set can no longer continue.
    pub fn is_complete(&self) -> bool {
        self.is_won_outright() || self.a > SCORE_CEILING || self.b > SCORE_CEILING
    }

    fn is_won_outright(&self) -> bool {
        (self.a >= POINTS_TO_WIN && self.a >= self.b + WINNING_MARGIN)
            || (self.b >= POINTS_TO_WIN && self.b >= self.a + WINNING_MARGIN)
    }

    pub fn winner(&self) -> Side {
        if self.a > self.b {
            Side::A
        } else {
            Side::B
        }
    }

    pub fn add_point(&mut self, side: Side) {
        match side {
            Side::A => self.a += 1,
            Side::B => self.b += 1,
        }
    }
}

/// Play points until the set is complete. Returns the score and point log.
pub fn play_set<R: Rng + ?Sized>(
    rng: &mut R,
    a: &Competitor,
    b: &Competitor,
) -> (SetScore, Vec<PointOutcome>) {
    let mut score = SetScore::default();
    let mut log = Vec::with_capacity(24);

    while !score.is_complete() {
        let point = play_point(rng, a, b);
        score.add_point(point.winner);
        log.push(point);
    }

    trace!(a = %a.id, b = %b.id, score_a = score.a, score_b = score.b, "set finished");
    (score, log)
}

#[cfg(test)]
#[path = "set_tests.rs"]
mod set_tests;
