//! Rank exchange table
//!
//! Converts the rating gap between a match winner and loser into the points
//! gained by the winner and lost by the loser. Expected results (the higher
//! or equally rated side wins) are worth less the wider the gap; upsets are
//! worth more.

use serde::{Deserialize, Serialize};

/// Lower bounds of bands 1..=8. Band 0 covers gaps below the first entry.
pub const BAND_THRESHOLDS: [f64; 8] = [25.0, 50.0, 100.0, 150.0, 200.0, 300.0, 400.0, 500.0];

const EXPECTED_GAIN: [f64; 9] = [6.0, 5.5, 5.0, 4.0, 3.0, 2.0, 1.0, 0.5, 0.0];
const EXPECTED_LOSS: [f64; 9] = [-5.0, -4.5, -4.0, -3.0, -2.0, -1.0, -0.5, 0.0, 0.0];
const UPSET_GAIN: [f64; 9] = [6.0, 7.0, 8.0, 10.0, 13.0, 17.0, 22.0, 28.0, 40.0];
const UPSET_LOSS: [f64; 9] = [-5.0, -6.0, -7.0, -8.0, -10.0, -12.5, -16.0, -20.0, -29.0];

/// Rating change produced by one match.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RatingDelta {
    /// Added to the winner's rating (never negative)
    pub gain: f64,
    /// Added to the loser's rating (never positive)
    pub loss: f64,
}

impl RatingDelta {
    pub const ZERO: RatingDelta = RatingDelta {
        gain: 0.0,
        loss: 0.0,
    };
}

/// Band index (0..=8) for an absolute rating gap.
pub fn exchange_band(diff: f64) -> usize {
    BAND_THRESHOLDS.iter().take_while(|&&t| diff >= t).count()
}

/// Look up the exchange for a finished match.
pub fn point_exchange(winner_rating: f64, loser_rating: f64) -> RatingDelta {
    let band = exchange_band((winner_rating - loser_rating).abs());

    if winner_rating >= loser_rating {
        RatingDelta {
            gain: EXPECTED_GAIN[band],
            loss: EXPECTED_LOSS[band],
        }
    } else {
        RatingDelta {
            gain: UPSET_GAIN[band],
            loss: UPSET_LOSS[band],
        }
    }
}

#[cfg(test)]
#[path = "exchange_tests.rs"]
mod exchange_tests;
