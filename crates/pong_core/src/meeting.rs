//! Team meetings
//!
//! A meeting is a fixed sequence of legs between two rosters. Four-player
//! rosters play the full fourteen-leg sheet; two-player rosters play the
//! reduced five-leg cup sheet. Missing roster slots are filled with ghosts,
//! so every leg is always played and the score always adds up to the sheet
//! length.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::MeetingConfig;
use crate::doubles::compose_pair;
use crate::game::{play_match, Match};
use crate::types::{Competitor, CompetitorId, Side};

/// One entry of a meeting sheet. Indices are roster slots.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Leg {
    Singles { home: usize, away: usize },
    Doubles { home: (usize, usize), away: (usize, usize) },
}

const fn singles(home: usize, away: usize) -> Leg {
    Leg::Singles { home, away }
}

const FIRST_PAIR: Leg = Leg::Doubles {
    home: (0, 1),
    away: (0, 1),
};
const SECOND_PAIR: Leg = Leg::Doubles {
    home: (2, 3),
    away: (2, 3),
};

const FULL_SHEET: [Leg; 14] = [
    singles(0, 0),
    singles(1, 1),
    singles(2, 2),
    singles(3, 3),
    singles(0, 1),
    singles(1, 0),
    singles(3, 2),
    singles(2, 3),
    FIRST_PAIR,
    FIRST_PAIR,
    singles(0, 2),
    singles(2, 0),
    singles(3, 1),
    singles(1, 3),
];

const REDUCED_SHEET: [Leg; 5] = [
    singles(0, 0),
    singles(1, 1),
    FIRST_PAIR,
    singles(0, 1),
    singles(1, 0),
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MeetingFormat {
    /// Four players a side, fourteen legs
    Full,
    /// Two players a side, five legs
    Reduced,
}

impl MeetingFormat {
    /// The reduced sheet is used whenever the home side brings two or fewer.
    pub fn for_roster(home_len: usize) -> Self {
        if home_len <= 2 {
            MeetingFormat::Reduced
        } else {
            MeetingFormat::Full
        }
    }

    pub fn roster_size(self) -> usize {
        match self {
            MeetingFormat::Full => 4,
            MeetingFormat::Reduced => 2,
        }
    }

    pub fn legs(self, config: &MeetingConfig) -> Vec<Leg> {
        match self {
            MeetingFormat::Full => {
                let mut legs = FULL_SHEET.to_vec();
                if config.distinct_doubles_pairs {
                    legs[9] = SECOND_PAIR;
                }
                legs
            }
            MeetingFormat::Reduced => REDUCED_SHEET.to_vec(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meeting {
    pub format: MeetingFormat,
    /// Home roster after padding, in slot order
    pub home_roster: Vec<CompetitorId>,
    pub away_roster: Vec<CompetitorId>,
    pub legs: Vec<Leg>,
    /// One match per leg; home is always side A
    pub matches: Vec<Match>,
    pub home_score: u32,
    pub away_score: u32,
}

impl Meeting {
    pub fn winner(&self) -> Option<Side> {
        match self.home_score.cmp(&self.away_score) {
            std::cmp::Ordering::Greater => Some(Side::A),
            std::cmp::Ordering::Less => Some(Side::B),
            std::cmp::Ordering::Equal => None,
        }
    }

    /// Legs paired with their results, in sheet order.
    pub fn results(&self) -> impl Iterator<Item = (&Leg, &Match)> {
        self.legs.iter().zip(self.matches.iter())
    }
}

/// Pad (or truncate) a roster to `size` slots with ghosts.
pub fn fill_roster(players: &[Competitor], size: usize, tag: &str) -> Vec<Competitor> {
    (0..size)
        .map(|slot| match players.get(slot) {
            Some(p) => p.clone(),
            None => Competitor::ghost(format!("ghost-{tag}-{slot}")),
        })
        .collect()
}

/// Play a full meeting between two rosters.
pub fn play_meeting<R: Rng + ?Sized>(
    rng: &mut R,
    config: &MeetingConfig,
    home: &[Competitor],
    away: &[Competitor],
) -> Meeting {
    let format = MeetingFormat::for_roster(home.len());
    let home = fill_roster(home, format.roster_size(), "home");
    let away = fill_roster(away, format.roster_size(), "away");
    let legs = format.legs(config);

    let mut matches = Vec::with_capacity(legs.len());
    let (mut home_score, mut away_score) = (0, 0);

    for leg in &legs {
        let result = match *leg {
            Leg::Singles { home: h, away: a } => play_match(rng, &home[h], &away[a]),
            Leg::Doubles { home: h, away: a } => {
                let home_pair = compose_pair(&home[h.0], &home[h.1]);
                let away_pair = compose_pair(&away[a.0], &away[a.1]);
                play_match(rng, &home_pair, &away_pair)
            }
        };

        match result.winner {
            Side::A => home_score += 1,
            Side::B => away_score += 1,
        }
        matches.push(result);
    }

    debug!(?format, home_score, away_score, "meeting finished");

    Meeting {
        format,
        home_roster: home.iter().map(|c| c.id.clone()).collect(),
        away_roster: away.iter().map(|c| c.id.clone()).collect(),
        legs,
        matches,
        home_score,
        away_score,
    }
}

#[cfg(test)]
#[path = "meeting_tests.rs"]
mod meeting_tests;
