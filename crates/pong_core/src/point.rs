//! Point outcome generator
//!
//! A point is decided in two steps. Each side gets a performance score from
//! its rating, attributes and a noise term; then a single roll classifies the
//! point. Sampling lives in [`play_point`], the classification itself in the
//! pure [`classify_point`] so it can be replayed from known inputs.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::types::{Competitor, PlayStyle, Side};

/// Upper bound of the uniform noise added to each side's performance.
pub const PERFORMANCE_NOISE: f64 = 500.0;

/// Flat modifier applied when one style counters the other.
pub const STYLE_COUNTER_BONUS: f64 = 30.0;

const LUCKY_ABOVE: f64 = 0.95;
const ACE_ABOVE: f64 = 0.90;
const ERROR_BELOW: f64 = 0.10;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointKind {
    Ace,
    Winner,
    UnforcedError,
    /// Edge or net ball
    Lucky,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PointOutcome {
    pub winner: Side,
    pub kind: PointKind,
    pub description: String,
}

/// Modifier `own` earns against `opponent`: attackers beat blockers and
/// crabs, and lose to both kinds of defender.
pub fn style_bonus(own: PlayStyle, opponent: PlayStyle) -> f64 {
    match (own, opponent) {
        (PlayStyle::Attacker, PlayStyle::Blocker | PlayStyle::Crab) => STYLE_COUNTER_BONUS,
        (PlayStyle::Attacker, PlayStyle::Defender | PlayStyle::ModernDefender) => {
            -STYLE_COUNTER_BONUS
        }
        _ => 0.0,
    }
}

/// Net style modifier for side A. Swapping the sides flips its sign.
pub fn style_edge(a: PlayStyle, b: PlayStyle) -> f64 {
    style_bonus(a, b) - style_bonus(b, a)
}

/// Performance of `own` against `opponent` before any style modifier.
pub fn performance(own: &Competitor, opponent: &Competitor, noise: f64) -> f64 {
    0.4 * own.rating + 1.5 * own.attributes.attack - 0.5 * opponent.attributes.defense
        + own.attributes.speed
        + noise
}

/// Sample one point between `a` and `b`.
pub fn play_point<R: Rng + ?Sized>(rng: &mut R, a: &Competitor, b: &Competitor) -> PointOutcome {
    let mut perf_a = performance(a, b, rng.gen_range(0.0..PERFORMANCE_NOISE));
    let perf_b = performance(b, a, rng.gen_range(0.0..PERFORMANCE_NOISE));
    perf_a += style_edge(a.style, b.style);

    let roll: f64 = rng.gen();
    classify_point(a, b, perf_a, perf_b, roll)
}

/// Decide a point from both performances and the classification roll.
///
/// Ties in performance go to side B.
pub fn classify_point(
    a: &Competitor,
    b: &Competitor,
    perf_a: f64,
    perf_b: f64,
    roll: f64,
) -> PointOutcome {
    let stronger = if perf_a > perf_b { Side::A } else { Side::B };
    let (best, other) = match stronger {
        Side::A => (a, b),
        Side::B => (b, a),
    };

    if roll > LUCKY_ABOVE {
        return PointOutcome {
            winner: stronger,
            kind: PointKind::Lucky,
            description: "Net and edge!".to_string(),
        };
    }

    if roll > ACE_ABOVE && best.attributes.technique > other.attributes.tactical {
        return PointOutcome {
            winner: stronger,
            kind: PointKind::Ace,
            description: "Service ace!".to_string(),
        };
    }

    if roll < ERROR_BELOW {
        // The side on top commits the error
        return PointOutcome {
            winner: stronger.other(),
            kind: PointKind::UnforcedError,
            description: format!("Unforced error by {}.", best.short_name()),
        };
    }

    PointOutcome {
        winner: stronger,
        kind: PointKind::Winner,
        description: format!("Winning attack by {}.", best.short_name()),
    }
}

#[cfg(test)]
#[path = "point_tests.rs"]
mod point_tests;
